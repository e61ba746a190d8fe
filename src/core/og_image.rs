//! Social preview card
//!
//! Renders the 1200x630 Open Graph image as SVG: cream background, two soft
//! radial glows, a gold frame, company name, tagline and certification badge.

use crate::core::seo::COMPANY;

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;
pub const OG_CONTENT_TYPE: &str = "image/svg+xml";

const BACKGROUND: &str = "#F9F7F3";
const GOLD: &str = "#D4AF37";
const GREEN: &str = "#2E7D32";
const TITLE_COLOR: &str = "#1C2B1C";
const TAGLINE_COLOR: &str = "#4A6741";
const BADGE_COLOR: &str = "#8A9A88";

/// Text content of the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialCard {
    pub title: String,
    pub tagline: String,
    pub badge: String,
}

impl Default for SocialCard {
    fn default() -> Self {
        Self {
            title: COMPANY.name.to_string(),
            tagline: "Premium Rice Manufacturers · West Bengal, India".to_string(),
            badge: "ISO 22000:2018 Certified · Food Safety Management".to_string(),
        }
    }
}

impl SocialCard {
    /// Render the card as a standalone SVG document
    pub fn render_svg(&self) -> String {
        let cx = OG_WIDTH / 2;
        let mut svg = String::with_capacity(2048);

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = OG_WIDTH,
            h = OG_HEIGHT
        ));
        svg.push_str(&format!(
            concat!(
                "<defs>",
                r#"<radialGradient id="glow-green"><stop offset="0%" stop-color="{green}" stop-opacity="0.07"/><stop offset="70%" stop-color="{green}" stop-opacity="0"/></radialGradient>"#,
                r#"<radialGradient id="glow-gold"><stop offset="0%" stop-color="{gold}" stop-opacity="0.07"/><stop offset="70%" stop-color="{gold}" stop-opacity="0"/></radialGradient>"#,
                "</defs>"
            ),
            green = GREEN,
            gold = GOLD
        ));
        svg.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            BACKGROUND
        ));
        svg.push_str(r#"<circle cx="240" cy="240" r="240" fill="url(#glow-green)"/>"#);
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="240" fill="url(#glow-gold)"/>"#,
            OG_WIDTH - 240,
            OG_HEIGHT - 240
        ));

        // Frame and accents
        svg.push_str(&format!(
            r#"<rect x="20" y="20" width="{}" height="{}" rx="20" fill="none" stroke="{}" stroke-opacity="0.3"/>"#,
            OG_WIDTH - 40,
            OG_HEIGHT - 40,
            GOLD
        ));
        svg.push_str(&format!(
            r#"<rect x="{}" y="36" width="56" height="3" rx="2" fill="{}"/>"#,
            cx - 28,
            GOLD
        ));
        svg.push_str(&format!(
            r#"<rect x="{}" y="330" width="56" height="3" rx="2" fill="{}"/>"#,
            cx - 28,
            GREEN
        ));

        svg.push_str(&format!(
            r#"<text x="{}" y="290" text-anchor="middle" font-family="Georgia, 'Times New Roman', serif" font-size="56" font-weight="700" letter-spacing="-0.5" fill="{}">{}</text>"#,
            cx,
            TITLE_COLOR,
            xml_escape(&self.title)
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="385" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="22" letter-spacing="2.2" fill="{}">{}</text>"#,
            cx,
            TAGLINE_COLOR,
            xml_escape(&self.tagline.to_uppercase())
        ));

        // Badge row with gold dots on both sides
        let badge_y = OG_HEIGHT - 40;
        let half_badge = badge_half_width(&self.badge);
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="2.5" fill="{}"/>"#,
            cx - half_badge - 14,
            badge_y - 5,
            GOLD
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-family="Helvetica, Arial, sans-serif" font-size="13" letter-spacing="1.8" fill="{}">{}</text>"#,
            cx,
            badge_y,
            BADGE_COLOR,
            xml_escape(&self.badge.to_uppercase())
        ));
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="2.5" fill="{}"/>"#,
            cx + half_badge + 14,
            badge_y - 5,
            GOLD
        ));

        svg.push_str("</svg>");
        svg
    }
}

/// Widest badge half-width that keeps both dots inside the frame
const MAX_BADGE_HALF_WIDTH: u32 = OG_WIDTH / 2 - 60;

/// Rough half-width of the uppercase badge text at 13px with tracking,
/// capped so the side dots never leave the card
fn badge_half_width(text: &str) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    (chars.saturating_mul(11) / 2).min(MAX_BADGE_HALF_WIDTH)
}

/// Escape text for use inside SVG/XML content and attributes
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("Rice & <Grain>"), "Rice &amp; &lt;Grain&gt;");
        assert_eq!(xml_escape(r#"a "b" 'c'"#), "a &quot;b&quot; &apos;c&apos;");
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn test_default_card_content() {
        let svg = SocialCard::default().render_svg();

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="630""#));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(">Annadaata Agro Industries</text>"));
        assert!(svg.contains("PREMIUM RICE MANUFACTURERS · WEST BENGAL, INDIA"));
        assert!(svg.contains("ISO 22000:2018 CERTIFIED · FOOD SAFETY MANAGEMENT"));
        assert!(svg.contains(r##"fill="#F9F7F3""##));
    }

    #[test]
    fn test_custom_text_is_escaped() {
        let card = SocialCard {
            title: "A & B <Mills>".to_string(),
            ..SocialCard::default()
        };
        let svg = card.render_svg();

        assert!(svg.contains("A &amp; B &lt;Mills&gt;"));
        assert!(!svg.contains("<Mills>"));
    }

    #[test]
    fn test_long_badge_keeps_dots_on_card() {
        let card = SocialCard {
            badge: "Certified ".repeat(40),
            ..SocialCard::default()
        };
        let svg = card.render_svg();

        let dots: Vec<u32> = svg
            .match_indices(r#"<circle cx=""#)
            .skip(2)
            .filter_map(|(at, tag)| {
                let rest = &svg[at + tag.len()..];
                rest[..rest.find('"')?].parse().ok()
            })
            .collect();
        assert_eq!(dots.len(), 2);
        assert!(dots.iter().all(|&x| x > 20 && x < OG_WIDTH - 20), "{dots:?}");
    }
}
