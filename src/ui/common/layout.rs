//! Page layout primitives: width container, vertical section, responsive grid

use crate::core::merge_classes;
use leptos::prelude::*;

/// Shared small/medium/large scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBackground {
    White,
    Gray,
    #[default]
    Transparent,
}

impl SectionBackground {
    fn class(&self) -> &'static str {
        match self {
            SectionBackground::White => "bg-white",
            SectionBackground::Gray => "bg-gray-50",
            SectionBackground::Transparent => "bg-transparent",
        }
    }
}

pub fn container_class(size: Size, class: &str) -> String {
    let width = match size {
        Size::Small => "max-w-4xl",
        Size::Medium => "max-w-6xl",
        Size::Large => "max-w-7xl",
    };
    merge_classes(&["w-full mx-auto px-4 sm:px-6 lg:px-8", width, class])
}

pub fn section_class(size: Size, background: SectionBackground, class: &str) -> String {
    let padding = match size {
        Size::Small => "py-8",
        Size::Medium => "py-16",
        Size::Large => "py-24",
    };
    merge_classes(&["w-full", padding, background.class(), class])
}

/// Grid columns per breakpoint
///
/// Column counts without a matching utility class are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns {
    pub base: u8,
    pub md: Option<u8>,
    pub lg: Option<u8>,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self {
            base: 1,
            md: None,
            lg: None,
        }
    }
}

pub fn grid_class(columns: GridColumns, gap: Size, class: &str) -> String {
    let base = match columns.base {
        2 => "grid-cols-2",
        3 => "grid-cols-3",
        4 => "grid-cols-4",
        _ => "grid-cols-1",
    };
    let md = match columns.md {
        Some(2) => "md:grid-cols-2",
        Some(3) => "md:grid-cols-3",
        Some(4) => "md:grid-cols-4",
        _ => "",
    };
    let lg = match columns.lg {
        Some(2) => "lg:grid-cols-2",
        Some(3) => "lg:grid-cols-3",
        Some(4) => "lg:grid-cols-4",
        Some(6) => "lg:grid-cols-6",
        _ => "",
    };
    let gap = match gap {
        Size::Small => "gap-4",
        Size::Medium => "gap-6",
        Size::Large => "gap-8",
    };
    merge_classes(&["grid", base, md, lg, gap, class])
}

#[component]
pub fn Container(
    #[prop(default = Size::Medium)]
    size: Size,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=container_class(size, &class)>{children()}</div> }
}

#[component]
pub fn Section(
    #[prop(default = Size::Medium)]
    size: Size,
    #[prop(default = SectionBackground::Transparent)]
    background: SectionBackground,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <section class=section_class(size, background, &class)>{children()}</section> }
}

#[component]
pub fn Grid(
    #[prop(default = GridColumns::default())]
    columns: GridColumns,
    #[prop(default = Size::Medium)]
    gap: Size,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=grid_class(columns, gap, &class)>{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_widths() {
        assert!(container_class(Size::Small, "").contains("max-w-4xl"));
        assert!(container_class(Size::default(), "").contains("max-w-6xl"));
        assert!(container_class(Size::Large, "").contains("max-w-7xl"));
        assert!(container_class(Size::Medium, "").starts_with("w-full mx-auto"));
    }

    #[test]
    fn test_section_padding_and_background() {
        assert_eq!(
            section_class(Size::Large, SectionBackground::Gray, ""),
            "w-full py-24 bg-gray-50"
        );
        assert_eq!(
            section_class(Size::Small, SectionBackground::default(), "relative"),
            "w-full py-8 bg-transparent relative"
        );
    }

    #[test]
    fn test_grid_breakpoints() {
        let columns = GridColumns {
            base: 1,
            md: Some(2),
            lg: Some(3),
        };
        assert_eq!(
            grid_class(columns, Size::Large, ""),
            "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8"
        );
    }

    #[test]
    fn test_grid_ignores_unsupported_counts() {
        let columns = GridColumns {
            base: 9,
            md: Some(6),
            lg: Some(5),
        };
        assert_eq!(grid_class(columns, Size::Small, ""), "grid grid-cols-1 gap-4");
    }
}
