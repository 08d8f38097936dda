use crate::core::merge_classes;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

/// Button size options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// HTML `type` of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

const BUTTON_BASE: &str = "relative inline-flex items-center justify-center font-semibold rounded-md \
    transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 \
    disabled:opacity-50 disabled:cursor-not-allowed";

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-gold text-gray-900 hover:bg-gold/90 focus:ring-gold/50 shadow-sm hover:shadow-md"
            }
            ButtonVariant::Secondary => {
                "bg-blue text-white hover:bg-blue/90 focus:ring-blue/50 shadow-sm hover:shadow-md"
            }
            ButtonVariant::Ghost => {
                "bg-transparent text-gray-700 border-2 border-gray-300 hover:bg-gray-50 hover:border-gray-400 focus:ring-gray-400/50"
            }
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-sm",
            ButtonSize::Medium => "px-4 py-2 text-base",
            ButtonSize::Large => "px-6 py-3 text-lg",
        }
    }
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Full class list for a button
pub fn button_class(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    merge_classes(&[BUTTON_BASE, variant.class(), size.class(), class])
}

/// Type-safe button component with variants and sizes
///
/// While `loading`, the label stays in the DOM for screen readers but is
/// hidden visually, and clicks are ignored.
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// HTML button type
    #[prop(default = ButtonType::Button)]
    button_type: ButtonType,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether button is in loading state
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let full_classes = button_class(variant, size, &class);
    let is_disabled = move || disabled.get() || loading.get();

    view! {
        <button
            type=button_type.as_str()
            class=full_classes
            on:click=move |_| {
                if !is_disabled() {
                    if let Some(on_click) = on_click {
                        on_click.run(());
                    }
                }
            }
            disabled=is_disabled
            aria-busy=move || loading.get().to_string()
        >
            {move || loading.get().then(|| view! {
                <Icon name=icons::SPINNER class="mr-2 h-4 w-4 animate-spin" />
            })}
            <span class:sr-only=move || loading.get()>{children()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_class() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), "");
        assert!(class.starts_with("relative inline-flex"));
        assert!(class.contains("bg-gold"));
        assert!(class.contains("px-4 py-2 text-base"));
    }

    #[test]
    fn test_variants_are_distinct() {
        let primary = button_class(ButtonVariant::Primary, ButtonSize::Medium, "");
        let secondary = button_class(ButtonVariant::Secondary, ButtonSize::Medium, "");
        let ghost = button_class(ButtonVariant::Ghost, ButtonSize::Medium, "");

        assert!(secondary.contains("bg-blue text-white"));
        assert!(ghost.contains("border-2 border-gray-300"));
        assert_ne!(primary, secondary);
        assert_ne!(secondary, ghost);
    }

    #[test]
    fn test_sizes() {
        assert!(button_class(ButtonVariant::Primary, ButtonSize::Small, "").contains("text-sm"));
        assert!(button_class(ButtonVariant::Primary, ButtonSize::Large, "").contains("px-6 py-3"));
    }

    #[test]
    fn test_caller_class_appended_once() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::Small, "w-full rounded-md");
        assert!(class.contains("w-full"));
        assert_eq!(class.matches("rounded-md").count(), 1);
    }

    #[test]
    fn test_caller_size_overrides_preset() {
        let class = button_class(ButtonVariant::Primary, ButtonSize::Small, "px-8 text-lg");
        assert!(class.contains("py-1.5"));
        assert!(!class.contains("px-3"));
        assert!(!class.contains("text-sm"));
        assert!(class.ends_with("px-8 text-lg"));
    }

    #[test]
    fn test_button_type_attribute() {
        assert_eq!(ButtonType::default().as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
        assert_eq!(ButtonType::Reset.as_str(), "reset");
    }
}
