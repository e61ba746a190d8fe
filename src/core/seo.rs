//! Search engine metadata
//!
//! Company facts, page titles, keywords, robots directives and the
//! `FoodManufacturer` structured-data block rendered into every page.

use serde_json::{Value, json};

/// Public facts about the company
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub address: &'static str,
    pub street_address: &'static str,
    pub locality: &'static str,
    pub postal_code: &'static str,
    pub region: &'static str,
    pub country_code: &'static str,
    pub phones: &'static [&'static str],
    pub email: &'static str,
    pub business_hours: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "Annadaata Agro Industries",
    address: "Baharampur, Shyamsundar, Bardhaman - 713424, West Bengal, India",
    street_address: "Baharampur, Shyamsundar",
    locality: "Bardhaman",
    postal_code: "713424",
    region: "West Bengal",
    country_code: "IN",
    phones: &["+919064389085", "+919832170531"],
    email: "industries.annadaataagro@gmail.com",
    business_hours: "Monday to Sunday 9am to 8pm",
    latitude: 23.1281039,
    longitude: 87.8500515,
};

/// Number dialled by the lightbox "Contact Us" link
pub const LIGHTBOX_CONTACT_PHONE: &str = "+918670766439";

/// Default canonical origin when `SITE_URL` is not configured
pub const DEFAULT_SITE_URL: &str = "https://annadaataagro.com";

/// Per-deployment values rendered into the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub site_url: String,
    pub google_site_verification: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            google_site_verification: None,
        }
    }
}

impl SiteSettings {
    pub fn canonical_url(&self) -> String {
        absolute_url(&self.site_url, "/")
    }

    pub fn og_image_url(&self) -> String {
        absolute_url(&self.site_url, OG_IMAGE_PATH)
    }
}

pub const SITE_TITLE: &str =
    "Annadaata Agro Industries - Rice Manufacturing Company in West Bengal, India";

pub const SITE_DESCRIPTION: &str = "Leading rice manufacturer in Bardhaman, West Bengal. Specializing in premium rice varieties including Minikit, Swarna, Kuruva, IR-36, Banshkathi, and our flagship Gobindobhog Rice. Quality rice production with traditional expertise.";

pub const OG_TITLE: &str = "Annadaata Agro Industries - Rice Manufacturing Company in West Bengal";

pub const OG_DESCRIPTION: &str = "Leading rice manufacturer in Bardhaman, West Bengal. Premium quality rice varieties including Minikit, Swarna, Kuruva, IR-36, Banshkathi, and Gobindobhog Rice.";

pub const TWITTER_TITLE: &str = "Annadaata Agro Industries - Rice Manufacturing Company";

pub const TWITTER_DESCRIPTION: &str = "Leading rice manufacturer in Bardhaman, West Bengal. Premium quality rice varieties with traditional expertise.";

pub const OG_IMAGE_ALT: &str =
    "Annadaata Agro Industries, Premium Rice Manufacturers, West Bengal";

pub const NOT_FOUND_TITLE: &str = "404 - Page Not Found | Annadaata Agro Industries";

pub const NOT_FOUND_DESCRIPTION: &str =
    "The page you are looking for does not exist. Return to our home page.";

pub const ROBOTS: &str = "index, follow";

pub const GOOGLEBOT: &str =
    "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1";

pub const CATEGORY: &str = "Food & Agriculture Manufacturing";

/// Path of the generated social preview image
pub const OG_IMAGE_PATH: &str = "/opengraph-image";

pub const SEO_KEYWORDS: &[&str] = &[
    "rice manufacturer West Bengal",
    "rice mill Bardhaman",
    "Gobindobhog Rice manufacturer",
    "rice processing unit Bardhaman",
    "wholesale rice supplier",
    "rice manufacturing company India",
    "rice manufacturer Shyamsundar",
    "rice supplier Bardhaman",
    "rice mill West Bengal",
    "rice wholesaler Baharampur",
    "rice manufacturer near Kolkata",
    "rice manufacturer in West Bengal",
    "Minikit Rice manufacturer",
    "Swarna Rice supplier",
    "Kuruva Rice wholesale",
    "IR-36 Rice bulk supplier",
    "Banshkathi Rice manufacturer",
    "Gobindobhog Rice wholesale",
    "bulk rice supplier West Bengal",
    "traditional rice manufacturer India",
    "rice processing unit Bardhaman",
    "wholesale rice supplier West Bengal",
    "premium quality rice manufacturer",
    "rice mill direct supply",
    "rice manufacturing unit",
    "rice processing facility",
    "rice wholesale business",
    "rice bulk orders",
];

/// Comma-separated `<meta name="keywords">` value, duplicates removed
pub fn keywords_meta() -> String {
    let mut seen = Vec::with_capacity(SEO_KEYWORDS.len());
    for keyword in SEO_KEYWORDS {
        if !seen.contains(keyword) {
            seen.push(*keyword);
        }
    }
    seen.join(", ")
}

/// Join `path` onto `site_url` without doubling or dropping the slash
pub fn absolute_url(site_url: &str, path: &str) -> String {
    let base = site_url.trim_end_matches('/');
    if path.is_empty() || path == "/" {
        return format!("{}/", base);
    }
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// `FoodManufacturer` JSON-LD for the home page
pub fn local_business_schema(site_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FoodManufacturer",
        "name": COMPANY.name,
        "image": [absolute_url(site_url, "/apple-icon.png")],
        "url": absolute_url(site_url, "/"),
        "description": "Leading rice manufacturer in Bardhaman, West Bengal. We specialize in premium rice varieties including Minikit, Swarna, Kuruva, IR-36, Banshkathi, and Gobindobhog Rice. Direct supply from our manufacturing unit.",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": COMPANY.street_address,
            "addressLocality": COMPANY.locality,
            "postalCode": COMPANY.postal_code,
            "addressRegion": COMPANY.region,
            "addressCountry": COMPANY.country_code,
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": COMPANY.latitude.to_string(),
            "longitude": COMPANY.longitude.to_string(),
        },
        "telephone": COMPANY.phones,
        "email": COMPANY.email,
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
            "opens": "09:00",
            "closes": "20:00",
        },
    })
}

/// JSON-LD serialized for an inline `<script>`; `</` is escaped so the
/// payload can't terminate the script element
pub fn json_ld_script(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Body of `/robots.txt`
pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        absolute_url(site_url, "/sitemap.xml")
    )
}

/// Body of `/sitemap.xml`; the site is a single page
pub fn sitemap_xml(site_url: &str, last_modified: chrono::NaiveDate) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "  <url>\n",
            "    <loc>{}</loc>\n",
            "    <lastmod>{}</lastmod>\n",
            "    <changefreq>monthly</changefreq>\n",
            "    <priority>1.0</priority>\n",
            "  </url>\n",
            "</urlset>\n"
        ),
        absolute_url(site_url, "/"),
        last_modified.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_meta_deduplicates() {
        let meta = keywords_meta();

        assert!(meta.starts_with("rice manufacturer West Bengal, rice mill Bardhaman"));
        assert_eq!(meta.matches("rice processing unit Bardhaman").count(), 1);
        assert_eq!(meta.split(", ").count(), SEO_KEYWORDS.len() - 1);
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("https://annadaataagro.com/", "/sitemap.xml"),
            "https://annadaataagro.com/sitemap.xml"
        );
        assert_eq!(
            absolute_url("https://annadaataagro.com", "opengraph-image"),
            "https://annadaataagro.com/opengraph-image"
        );
        assert_eq!(
            absolute_url("https://annadaataagro.com", "/"),
            "https://annadaataagro.com/"
        );
    }

    #[test]
    fn test_site_settings_urls() {
        let settings = SiteSettings::default();
        assert_eq!(settings.canonical_url(), "https://annadaataagro.com/");
        assert_eq!(
            settings.og_image_url(),
            "https://annadaataagro.com/opengraph-image"
        );
    }

    #[test]
    fn test_local_business_schema_shape() {
        let schema = local_business_schema(DEFAULT_SITE_URL);

        assert_eq!(schema["@type"], "FoodManufacturer");
        assert_eq!(schema["name"], "Annadaata Agro Industries");
        assert_eq!(schema["address"]["postalCode"], "713424");
        assert_eq!(schema["address"]["addressCountry"], "IN");
        assert_eq!(schema["geo"]["latitude"], "23.1281039");
        assert_eq!(schema["telephone"][1], "+919832170531");
        assert_eq!(
            schema["openingHoursSpecification"]["dayOfWeek"]
                .as_array()
                .map(Vec::len),
            Some(7)
        );
        assert_eq!(schema["openingHoursSpecification"]["closes"], "20:00");
        assert_eq!(schema["image"][0], "https://annadaataagro.com/apple-icon.png");
    }

    #[test]
    fn test_json_ld_script_escapes_closing_tag() {
        let value = json!({ "name": "</script><b>" });
        let script = json_ld_script(&value);

        assert!(!script.contains("</script>"));
        assert!(script.contains("<\\/script>"));
    }

    #[test]
    fn test_robots_txt_points_at_sitemap() {
        let robots = robots_txt("https://example.in");
        assert!(robots.contains("Allow: /"));
        assert!(robots.ends_with("Sitemap: https://example.in/sitemap.xml\n"));
    }

    #[test]
    fn test_sitemap_lists_home_page() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let sitemap = sitemap_xml(DEFAULT_SITE_URL, date);

        assert!(sitemap.contains("<loc>https://annadaataagro.com/</loc>"));
        assert!(sitemap.contains("<lastmod>2026-03-14</lastmod>"));
        assert_eq!(sitemap.matches("<url>").count(), 1);
    }
}
