//! Text helpers

/// URL-safe slug: lowercase, word characters only, runs of whitespace,
/// underscores and hyphens collapsed into a single `-`
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.trim().chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_dash = true;
        } else if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        }
    }

    slug
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Format an Indian mobile number for display: `+919064389085` -> `+91 90643 89085`.
/// Anything that isn't a 10-digit number with optional `+91`/`91`/`0` prefix is
/// returned unchanged.
pub fn format_phone_display(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    let local = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('0') => &digits[1..],
        12 if digits.starts_with("91") => &digits[2..],
        _ => return phone.to_string(),
    };

    format!("+91 {} {}", &local[..5], &local[5..])
}

/// `tel:` URI for a phone number, keeping only `+` and digits
pub fn tel_href(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Gobindobhog Rice"), "gobindobhog-rice");
        assert_eq!(slugify("  IR-36 Rice!  "), "ir-36-rice");
        assert_eq!(slugify("Harvesting & Intake"), "harvesting-intake");
        assert_eq!(slugify("--snake_case__name--"), "snake-case-name");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Swarna", 10), "Swarna");
        assert_eq!(truncate_text("Swarna", 6), "Swarna");
        assert_eq!(truncate_text("Banshkathi Rice", 10), "Banshkathi...");
        assert_eq!(truncate_text("চাল ভাত", 3), "চাল...");
    }

    #[test]
    fn test_format_phone_display() {
        assert_eq!(format_phone_display("+919064389085"), "+91 90643 89085");
        assert_eq!(format_phone_display("9832170531"), "+91 98321 70531");
        assert_eq!(format_phone_display("09832170531"), "+91 98321 70531");
        assert_eq!(format_phone_display("12345"), "12345");
    }

    #[test]
    fn test_tel_href() {
        assert_eq!(tel_href("+91 86707 66439"), "tel:+918670766439");
        assert_eq!(tel_href("9064389085"), "tel:9064389085");
    }
}
