//! Semantic heading levels and their type scale

/// Heading rank, `h1` through `h6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Responsive size for regular headings
    pub fn size_class(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "text-4xl md:text-5xl",
            HeadingLevel::H2 => "text-3xl md:text-4xl",
            HeadingLevel::H3 => "text-2xl md:text-3xl",
            HeadingLevel::H4 => "text-xl md:text-2xl",
            HeadingLevel::H5 => "text-lg md:text-xl",
            HeadingLevel::H6 => "text-base md:text-lg",
        }
    }

    /// Responsive size for display headlines, one step larger on wide screens
    pub fn headline_size_class(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "text-4xl md:text-5xl lg:text-6xl",
            HeadingLevel::H2 => "text-3xl md:text-4xl lg:text-5xl",
            HeadingLevel::H3 => "text-2xl md:text-3xl lg:text-4xl",
            other => other.size_class(),
        }
    }
}

/// Out-of-range levels clamp to the nearest valid rank.
impl From<u8> for HeadingLevel {
    fn from(level: u8) -> Self {
        match level {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }
}
