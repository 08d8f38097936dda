//! Marketing copy for the landing page
//!
//! Sections render straight from these tables, so copy changes never touch
//! markup.

use serde::Serialize;

pub const PRODUCT_NAME: &str = "Feature List Generator";
pub const SITE_URL: &str = "https://featurelistgenerator.com/";
pub const APP_PATH: &str = "/webapp";

pub const PAGE_TITLE: &str =
    "Feature List Generator - Transform Technical Documents into Structured Lists";
pub const PAGE_DESCRIPTION: &str = "Extract features from technical proposals with precision. Upload documents, review with AI assistance, export to your preferred format. Simple, elegant, effective.";

/// Accent palette used across the sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Gold,
    Blue,
    Brown,
    Orange,
}

impl Accent {
    /// Diagonal gradient used for icon tiles and step numbers
    pub fn gradient(&self) -> &'static str {
        match self {
            Accent::Gold => "linear-gradient(135deg, #fcdc71 0%, #f2a25c 100%)",
            Accent::Blue => "linear-gradient(135deg, #607caa 0%, #4a6b8a 100%)",
            Accent::Brown => "linear-gradient(135deg, #98816e 0%, #7a6b5d 100%)",
            Accent::Orange => "linear-gradient(135deg, #f2a25c 0%, #d88a4a 100%)",
        }
    }

    /// Solid dot color for badges
    pub fn dot_class(&self) -> &'static str {
        match self {
            Accent::Gold => "bg-gold",
            Accent::Blue => "bg-blue",
            Accent::Brown => "bg-brown",
            Accent::Orange => "bg-orange",
        }
    }

    /// Soft background wash
    pub fn wash_class(&self) -> &'static str {
        match self {
            Accent::Gold => "from-gold/10 to-gold/5",
            Accent::Blue => "from-blue/10 to-blue/5",
            Accent::Brown => "from-brown/10 to-brown/5",
            Accent::Orange => "from-orange/10 to-orange/5",
        }
    }
}

pub struct Hero {
    pub eyebrow: &'static str,
    pub lead_in: &'static str,
    pub headlines: &'static [&'static str],
    pub headline_interval_ms: u32,
    pub lead_out: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub social_proof: &'static str,
    pub quality_badge: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    pub fn is_external(&self) -> bool {
        self.href.starts_with("http") || self.href.starts_with("mailto:")
    }
}

/// Entry of the numbered "What You Get" list
pub struct NumberedFeature {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Card of the features grid
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub struct UseCase {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub accent: Accent,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

impl Testimonial {
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.author, self.role)
    }
}

pub struct SectionHeader {
    pub badge: &'static str,
    pub title: &'static str,
    pub highlight: Option<&'static str>,
    pub subtitle: &'static str,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [Link],
}

pub const HERO: Hero = Hero {
    eyebrow: "AI-Powered Feature Extraction",
    lead_in: "Automatically",
    headlines: &["Extract Features", "Analyze Proposals", "Generate Reports"],
    headline_interval_ms: 3500,
    lead_out: "from Technical Documents",
    subtitle: "Transform lengthy technical proposals into structured feature lists in seconds. Powered by Claude AI, refined by you.",
    primary_cta: Link::new("Try It Now", APP_PATH),
    secondary_cta: Link::new("Learn More", "#features"),
    social_proof: "Trusted by consultants",
    quality_badge: "Fast & Accurate",
};

pub const FEATURES_TITLE: &str = "What You Get";

pub const FEATURES: &[NumberedFeature] = &[
    NumberedFeature {
        number: "01",
        title: "PDF & DOCX Support",
        description: "Upload proposals in any format. Seamlessly process both PDF and DOCX documents with perfect text extraction.",
    },
    NumberedFeature {
        number: "02",
        title: "AI-Powered Extraction",
        description: "Claude analyzes and extracts features with precision. Advanced language understanding ensures accurate identification.",
    },
    NumberedFeature {
        number: "03",
        title: "Manual Refinement",
        description: "Review and customize extracted features before export. Full control to add, edit, or remove items as needed.",
    },
    NumberedFeature {
        number: "04",
        title: "Multiple Export Formats",
        description: "Download as Excel, CSV, or Markdown. Choose the format that best fits your workflow and collaboration needs.",
    },
    NumberedFeature {
        number: "05",
        title: "Secure & Private",
        description: "Process documents locally, your data stays private. No document storage or data retention. Complete privacy guaranteed.",
    },
    NumberedFeature {
        number: "06",
        title: "Lightning Fast",
        description: "Extract hundreds of features in seconds. Save hours of manual work with automated extraction powered by Claude AI.",
    },
];

pub const FEATURES_GRID_HEADER: SectionHeader = SectionHeader {
    badge: "Powerful Features",
    title: "Everything you need to",
    highlight: Some("extract features faster"),
    subtitle: "A complete toolkit designed for technical consultants who value precision, speed, and control.",
};

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: "document",
        title: "PDF & DOCX Support",
        description: "Upload technical proposals in any format. Seamlessly process both PDF and DOCX documents with perfect text extraction.",
        accent: Accent::Gold,
    },
    FeatureCard {
        icon: "lightbulb",
        title: "Claude AI Powered",
        description: "Intelligent extraction using Claude 3.5 Sonnet. Advanced language understanding ensures accurate feature identification and categorization.",
        accent: Accent::Blue,
    },
    FeatureCard {
        icon: "edit",
        title: "Manual Refinement",
        description: "Review and edit extracted features with precision. Full control to customize, reorder, add, or remove items as needed.",
        accent: Accent::Brown,
    },
    FeatureCard {
        icon: "download",
        title: "Multi-Format Export",
        description: "Export to Excel, CSV, or Markdown. Choose the format that best fits your workflow and collaboration needs.",
        accent: Accent::Orange,
    },
    FeatureCard {
        icon: "lock",
        title: "Secure & Private",
        description: "Your data stays yours. Local processing with secure API calls. No document storage or data retention. Complete privacy guaranteed.",
        accent: Accent::Blue,
    },
    FeatureCard {
        icon: "lightning",
        title: "Lightning Fast",
        description: "Extract features in seconds. Powered by Claude AI for instant processing. Save hours of manual work with automated extraction.",
        accent: Accent::Gold,
    },
];

pub const HOW_IT_WORKS_HEADER: SectionHeader = SectionHeader {
    badge: "Simple Process",
    title: "How It Works",
    highlight: None,
    subtitle: "Four simple steps to transform technical proposals into structured feature lists. Fast, easy, and automated.",
};

pub const STEPS: &[Step] = &[
    Step {
        number: "1",
        icon: "upload",
        title: "Upload Document",
        description: "Drop your PDF or DOCX file into the secure upload zone. We support multi-page technical proposals of any size.",
        accent: Accent::Gold,
    },
    Step {
        number: "2",
        icon: "lightning",
        title: "AI Extraction",
        description: "Claude 3.5 Sonnet analyzes your document with advanced language understanding, identifying and categorizing every feature automatically.",
        accent: Accent::Blue,
    },
    Step {
        number: "3",
        icon: "edit",
        title: "Review & Refine",
        description: "Edit extracted features with precision. Add, remove, reorder, or customize any item. Full control over your feature list.",
        accent: Accent::Brown,
    },
    Step {
        number: "4",
        icon: "download",
        title: "Export Anywhere",
        description: "Download your feature list in Excel, CSV, or Markdown format. Seamlessly integrate into your existing workflow and tools.",
        accent: Accent::Orange,
    },
];

pub const USE_CASES_HEADER: SectionHeader = SectionHeader {
    badge: "Three Simple Steps",
    title: "See It In Action",
    highlight: None,
    subtitle: "From lengthy proposal to structured feature list in under a minute. No complex setup. No learning curve.",
};

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        number: "01",
        title: "Upload & Extract",
        description: "Drop your PDF or DOCX proposal and watch as AI instantly identifies every feature, requirement, and specification. No manual reading required.",
        tags: &["PDF Support", "DOCX Support", "Claude AI"],
        accent: Accent::Gold,
    },
    UseCase {
        number: "02",
        title: "Review & Refine",
        description: "AI gets you 90% there. You perfect the remaining 10%. Edit titles, adjust categories, add acceptance criteria, or remove false positives with intuitive controls.",
        tags: &["Drag & Drop", "Inline Editing", "Categories"],
        accent: Accent::Blue,
    },
    UseCase {
        number: "03",
        title: "Export Anywhere",
        description: "Generate polished Excel spreadsheets, CSV files, or Markdown documents. One click. Multiple formats. Ready for your PM tools, clients, or team.",
        tags: &["Excel", "CSV", "Markdown"],
        accent: Accent::Orange,
    },
];

pub const TESTIMONIALS_TITLE: &str = "Client Feedback";

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Excellent tool for technical proposals. Saves me hours every week.",
        author: "Sarah Chen",
        role: "Lead Consultant",
    },
    Testimonial {
        quote: "The AI extraction is remarkably accurate. Game changer for my workflow.",
        author: "Mark Wilson",
        role: "PM, Acme Inc",
    },
    Testimonial {
        quote: "Fast, intuitive, and incredibly useful. Now part of my standard toolkit.",
        author: "Lisa Park",
        role: "Solutions Architect",
    },
    Testimonial {
        quote: "Export options are perfect. Works seamlessly with any team's format.",
        author: "James Taylor",
        role: "Business Analyst",
    },
];

pub const CTA_TITLE: &str = "Ready to start?";
pub const CTA_LINK: Link = Link::new("Try for Free", APP_PATH);

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &[
            Link::new("Features", "/features"),
            Link::new("Pricing", "/pricing"),
            Link::new("Use Cases", "/use-cases"),
            Link::new("Updates", "/updates"),
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            Link::new("Documentation", "/docs"),
            Link::new("API Reference", "/api"),
            Link::new("Guides", "/guides"),
            Link::new("Support", "/support"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            Link::new("About", "/about"),
            Link::new("Blog", "/blog"),
            Link::new("Contact", "/contact"),
            Link::new("Privacy", "/privacy"),
        ],
    },
    FooterColumn {
        title: "Social",
        links: &[
            Link::new("Twitter", "https://twitter.com"),
            Link::new("GitHub", "https://github.com"),
            Link::new("LinkedIn", "https://linkedin.com"),
            Link::new("Email", "mailto:hello@example.com"),
        ],
    },
];

pub const COPYRIGHT_YEAR: u16 = 2025;

// ============================================================================
// Structured data
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SoftwareApplication<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    application_category: &'a str,
    operating_system: &'a str,
    description: &'a str,
    url: &'a str,
    offers: Offer<'a>,
    feature_list: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer<'a> {
    #[serde(rename = "@type")]
    kind: &'a str,
    price: &'a str,
    price_currency: &'a str,
}

/// schema.org `SoftwareApplication` document for the page head
pub fn structured_data() -> Result<String, serde_json::Error> {
    let document = SoftwareApplication {
        context: "https://schema.org",
        kind: "SoftwareApplication",
        name: PRODUCT_NAME,
        application_category: "BusinessApplication",
        operating_system: "Web",
        description: PAGE_DESCRIPTION,
        url: SITE_URL,
        offers: Offer {
            kind: "Offer",
            price: "0",
            price_currency: "USD",
        },
        feature_list: FEATURES.iter().map(|feature| feature.title).collect(),
    };

    // `</` would close the surrounding script element
    serde_json::to_string(&document).map(|json| json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_headlines_rotate() {
        assert_eq!(HERO.headlines.len(), 3);
        assert_eq!(HERO.headlines[0], "Extract Features");
        assert_eq!(HERO.headline_interval_ms, 3500);
        assert_eq!(HERO.primary_cta.href, APP_PATH);
        assert_eq!(HERO.secondary_cta.href, "#features");
    }

    #[test]
    fn test_numbered_features_are_sequential() {
        assert_eq!(FEATURES.len(), 6);
        for (index, feature) in FEATURES.iter().enumerate() {
            assert_eq!(feature.number, format!("{:02}", index + 1));
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
    }

    #[test]
    fn test_section_sizes() {
        assert_eq!(FEATURE_CARDS.len(), 6);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(USE_CASES.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 4);
        assert_eq!(FOOTER_COLUMNS.len(), 4);
    }

    #[test]
    fn test_steps_numbered_from_one() {
        for (index, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, (index + 1).to_string());
        }
    }

    #[test]
    fn test_use_cases_carry_three_tags() {
        assert!(USE_CASES.iter().all(|use_case| use_case.tags.len() == 3));
        assert_eq!(USE_CASES[2].tags, &["Excel", "CSV", "Markdown"]);
    }

    #[test]
    fn test_testimonial_attribution() {
        assert_eq!(TESTIMONIALS[1].attribution(), "Mark Wilson, PM, Acme Inc");
    }

    #[test]
    fn test_footer_links() {
        for column in FOOTER_COLUMNS {
            assert_eq!(column.links.len(), 4);
        }
        let social = &FOOTER_COLUMNS[3];
        assert_eq!(social.title, "Social");
        assert!(social.links.iter().all(Link::is_external));
        assert!(!FOOTER_COLUMNS[0].links[0].is_external());
    }

    #[test]
    fn test_cta_points_to_app() {
        assert_eq!(CTA_TITLE, "Ready to start?");
        assert_eq!(CTA_LINK.href, "/webapp");
    }

    #[test]
    fn test_structured_data() {
        let json = structured_data().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["name"], PRODUCT_NAME);
        assert_eq!(value["offers"]["priceCurrency"], "USD");
        assert_eq!(value["featureList"].as_array().unwrap().len(), FEATURES.len());
        assert!(!json.contains("</"));
    }
}
