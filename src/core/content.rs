//! Static page content
//!
//! Copy and small data tables rendered by the page sections. Icons are
//! referenced by name and resolved to `/icons/{name}.svg` by the UI.

use crate::core::seo::COMPANY;

/// Header navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        href: "/#hero",
    },
    NavItem {
        name: "Products",
        href: "/#products",
    },
    NavItem {
        name: "About Us",
        href: "/#about",
    },
    NavItem {
        name: "Contact",
        href: "/#contact",
    },
];

/// Headline figure shown in the hero strip and the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl Stat {
    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

/// Hero strip; "24/7" is not a count so it is kept as text
pub const HERO_STATS: &[(&str, &str)] = &[
    ("25+", "Years of Excellence"),
    ("7+", "Rice Varieties"),
    ("100%", "Quality Assured"),
    ("24/7", "Support"),
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        value: 25,
        suffix: "+",
        label: "Years of\nExcellence",
    },
    Stat {
        value: 7,
        suffix: "+",
        label: "Rice\nVarieties",
    },
    Stat {
        value: 100,
        suffix: "%",
        label: "Quality\nAssured",
    },
];

pub const FOUNDED_YEAR: u32 = 1998;

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "At Annadaata Agro Industries, we've dedicated over two decades to perfecting the art of rice manufacturing. Our journey began in the fertile lands of West Bengal, where traditional farming wisdom meets modern processing excellence.",
    "Our state-of-the-art manufacturing facility in Bardhaman processes premium rice varieties with precision and care. We maintain stringent quality controls at every step, from grain selection to final packaging, ensuring each batch meets our exacting standards.",
    "Today, we're proud to be one of West Bengal's leading rice manufacturers, known for our flagship Jeerakhasala rice and other premium varieties. Our commitment to quality, sustainability, and customer satisfaction drives everything we do.",
];

/// Brand accent used on alternating process cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Gold,
}

impl Accent {
    pub fn bar_class(&self) -> &'static str {
        match self {
            Accent::Green => "bg-brand-green",
            Accent::Gold => "bg-brand-gold",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Accent::Green => "bg-brand-green/10 text-brand-green",
            Accent::Gold => "bg-brand-gold/10 text-brand-gold",
        }
    }

    pub fn label_class(&self) -> &'static str {
        match self {
            Accent::Green => "text-green-800 border-brand-green/25",
            Accent::Gold => "text-amber-800 border-amber-200/70",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

impl ProcessStep {
    /// Step number without leading zeros ("04" -> 4)
    pub fn number(&self) -> u32 {
        self.step.parse().unwrap_or(0)
    }
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        step: "01",
        title: "Paddy Procurement",
        description: "We partner with trusted farmers across West Bengal, sourcing premium paddy varieties grown under transparent, sustainable farming practices.",
        icon: "sprout",
        accent: Accent::Green,
    },
    ProcessStep {
        step: "02",
        title: "Harvesting & Intake",
        description: "Paddy is harvested at peak maturity using precision techniques that protect grain integrity and minimise field-to-mill losses.",
        icon: "wheat",
        accent: Accent::Gold,
    },
    ProcessStep {
        step: "03",
        title: "Drying & Conditioning",
        description: "Controlled drying achieves the optimal moisture level. Select varieties are then aged to deepen their natural aroma and flavour profile.",
        icon: "sun",
        accent: Accent::Green,
    },
    ProcessStep {
        step: "04",
        title: "Milling & Polishing",
        description: "State-of-the-art machinery removes husks and bran with surgical precision, preserving nutritional value and delivering a natural lustre.",
        icon: "settings",
        accent: Accent::Gold,
    },
    ProcessStep {
        step: "05",
        title: "Quality Assurance",
        description: "Every batch is lab-tested for colour, texture, aroma, and purity. Only grain that meets our ISO 22000:2018 standards is approved for release.",
        icon: "shield-check",
        accent: Accent::Green,
    },
    ProcessStep {
        step: "06",
        title: "Packaging & Dispatch",
        description: "Approved rice is sealed in eco-conscious packaging engineered to lock in freshness, then dispatched through our precision logistics network.",
        icon: "package",
        accent: Accent::Gold,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPillar {
    pub label: &'static str,
    pub sub: &'static str,
    pub icon: &'static str,
}

pub const QUALITY_PILLARS: &[QualityPillar] = &[
    QualityPillar {
        label: "ISO 22000:2018",
        sub: "Food Safety Management Certified",
        icon: "award",
    },
    QualityPillar {
        label: "Lab Verified",
        sub: "Every batch tested before dispatch",
        icon: "flask",
    },
    QualityPillar {
        label: "Eco-Conscious",
        sub: "Sustainable from farm to packaging",
        icon: "leaf",
    },
];

/// Row of the contact information card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: String,
}

/// Contact card rows, phone numbers formatted for display
pub fn contact_details() -> Vec<ContactDetail> {
    let phones = COMPANY
        .phones
        .iter()
        .map(|p| crate::core::format::format_phone_display(p))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        ContactDetail {
            icon: "phone",
            title: "Phone",
            details: phones,
        },
        ContactDetail {
            icon: "mail",
            title: "Email",
            details: COMPANY.email.to_string(),
        },
        ContactDetail {
            icon: "clock",
            title: "Business Hours",
            details: "Monday - Sunday: 9:00 AM - 8:00 PM".to_string(),
        },
        ContactDetail {
            icon: "map-pin",
            title: "Address",
            details: COMPANY.address.to_string(),
        },
    ]
}

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3661.9861247556386!2d87.84786397507825!3d23.128103885895523!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x39f839007f2165ad%3A0xe910997d0448075b!2sAnnadaata%20Agro%20Industries%20Pvt.%20Ltd.!5e0!3m2!1sen!2sin!4v1710425163089!5m2!1sen!2sin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Titled column of footer links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Products",
        links: &[
            FooterLink {
                name: "Gobindobhog Rice",
                href: "/#products",
            },
            FooterLink {
                name: "Minikit Rice",
                href: "/#products",
            },
            FooterLink {
                name: "Swarna Rice",
                href: "/#products",
            },
            FooterLink {
                name: "Kuruva Rice",
                href: "/#products",
            },
            FooterLink {
                name: "Banshkathi Rice",
                href: "/#products",
            },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            FooterLink {
                name: "About Us",
                href: "/#about",
            },
            FooterLink {
                name: "Our Process",
                href: "/#process",
            },
            FooterLink {
                name: "Contact Us",
                href: "/#contact",
            },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Facebook",
        icon: "facebook",
        url: "/",
    },
    SocialLink {
        name: "Twitter",
        icon: "twitter",
        url: "/",
    },
    SocialLink {
        name: "Instagram",
        icon: "instagram",
        url: "/",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        url: "/",
    },
];

pub const FOOTER_BLURB: &str = "Committed to delivering premium quality rice products while embracing sustainable agriculture practices and supporting farming communities.";

/// Copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!(
        "\u{a9} {} Annadaata Agro Industries Pvt. Ltd. All rights reserved.",
        year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_steps_are_sequential_and_alternate() {
        assert_eq!(PROCESS_STEPS.len(), 6);
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number() as usize, i + 1);
            let expected = if i % 2 == 0 { Accent::Green } else { Accent::Gold };
            assert_eq!(step.accent, expected);
        }
    }

    #[test]
    fn test_nav_items_point_at_sections() {
        assert_eq!(NAV_ITEMS.len(), 4);
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with("/#")));
    }

    #[test]
    fn test_contact_details_format_phones() {
        let details = contact_details();

        assert_eq!(details.len(), 4);
        assert_eq!(details[0].details, "+91 90643 89085, +91 98321 70531");
        assert_eq!(details[1].details, COMPANY.email);
    }

    #[test]
    fn test_stat_display() {
        assert_eq!(ABOUT_STATS[0].display(), "25+");
        assert_eq!(ABOUT_STATS[2].display(), "100%");
    }

    #[test]
    fn test_copyright_year() {
        assert_eq!(
            copyright(2026),
            "\u{a9} 2026 Annadaata Agro Industries Pvt. Ltd. All rights reserved."
        );
    }
}
