use crate::core::merge_classes;
use leptos::prelude::*;

/// Card surface styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "bg-white border border-gray-200 hover:shadow-md hover:border-gray-300",
            CardVariant::Elevated => "bg-white shadow-lg hover:shadow-xl border-0",
            CardVariant::Outlined => {
                "bg-transparent border-2 border-gray-300 hover:border-gray-400 hover:bg-gray-50"
            }
        }
    }
}

pub fn card_class(variant: CardVariant, class: &str) -> String {
    merge_classes(&[
        "block w-full p-6 rounded-md transition-all duration-200",
        variant.class(),
        class,
    ])
}

/// Content container
#[component]
pub fn Card(
    #[prop(default = CardVariant::Default)]
    variant: CardVariant,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_class(variant, &class)>
            {children()}
        </div>
    }
}
