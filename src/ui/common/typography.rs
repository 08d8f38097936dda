//! Text primitives: headings, paragraphs and form labels

use crate::core::{HeadingLevel, merge_classes};
use crate::ui::motion::heading_element;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphSize {
    Small,
    #[default]
    Base,
    Large,
}

impl ParagraphSize {
    fn class(&self) -> &'static str {
        match self {
            ParagraphSize::Small => "text-sm",
            ParagraphSize::Base => "text-base",
            ParagraphSize::Large => "text-lg",
        }
    }
}

pub fn heading_class(level: HeadingLevel, class: &str) -> String {
    merge_classes(&["font-bold text-gray-900", level.size_class(), "leading-tight", class])
}

pub fn paragraph_class(size: ParagraphSize, class: &str) -> String {
    merge_classes(&["text-gray-700", size.class(), "leading-relaxed", class])
}

/// Semantic heading, `h2` unless told otherwise
#[component]
pub fn Heading(
    /// Heading rank, clamped into 1..=6
    #[prop(default = 2)]
    level: u8,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let level = HeadingLevel::from(level);
    heading_element(level, heading_class(level, &class), children())
}

#[component]
pub fn Paragraph(
    #[prop(default = ParagraphSize::Base)]
    size: ParagraphSize,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! { <p class=paragraph_class(size, &class)>{children()}</p> }
}

/// Form label with optional required marker
#[component]
pub fn Label(
    /// Id of the labelled control
    #[prop(into)]
    html_for: String,
    #[prop(default = false)]
    required: bool,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <label for=html_for class=merge_classes(&["block text-sm font-medium text-gray-700", class.as_str()])>
            {children()}
            {required.then(|| view! { <span class="text-red-500 ml-1">"*"</span> })}
        </label>
    }
}
