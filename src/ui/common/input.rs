use crate::core::merge_classes;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_INPUT_ID: AtomicUsize = AtomicUsize::new(0);

const INPUT_BASE: &str = "w-full px-3 py-2 text-base bg-white border-2 rounded-md \
    transition-colors duration-200 placeholder:text-gray-400 \
    focus:outline-none focus:ring-2 focus:ring-offset-1 \
    disabled:opacity-50 disabled:cursor-not-allowed disabled:bg-gray-50";

/// Ids of an input and its describing paragraphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputIds {
    pub input: String,
    pub helper: String,
    pub error: String,
}

impl InputIds {
    pub fn new(id: Option<String>) -> Self {
        let input = id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("input-{}", NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed)));
        Self {
            helper: format!("{input}-helper"),
            error: format!("{input}-error"),
            input,
        }
    }

    /// `aria-describedby` target; the error wins over the helper text
    pub fn described_by(&self, has_error: bool, has_helper: bool) -> Option<String> {
        if has_error {
            Some(self.error.clone())
        } else if has_helper {
            Some(self.helper.clone())
        } else {
            None
        }
    }
}

pub fn input_class(has_error: bool, class: &str) -> String {
    let state = if has_error {
        "border-red-500 text-red-900 focus:ring-red-500 focus:border-red-500"
    } else {
        "border-gray-300 text-gray-900 focus:ring-blue focus:border-blue hover:border-gray-400"
    };
    merge_classes(&[INPUT_BASE, state, class])
}

pub fn label_class(has_error: bool) -> &'static str {
    if has_error {
        "block text-sm font-medium mb-1.5 text-red-700"
    } else {
        "block text-sm font-medium mb-1.5 text-gray-700"
    }
}

/// Text input with label, helper text and error state
#[component]
pub fn Input(
    /// Field label text
    #[prop(into, optional)]
    label: Option<String>,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Element id, generated when absent
    #[prop(into, optional)]
    id: Option<String>,
    #[prop(into, optional)]
    name: Option<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: String,
    /// Current value signal
    #[prop(into, optional)]
    value: Option<Signal<String>>,
    /// Input event callback
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Whether field is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional error message to display
    #[prop(into, optional)]
    error: Option<Signal<Option<String>>>,
    /// Hint shown below the field while there is no error
    #[prop(into, optional)]
    helper_text: Option<String>,
    /// Additional CSS classes for the `<input>`
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let ids = InputIds::new(id);
    let has_helper = helper_text.is_some();
    let current_error = move || error.and_then(|error| error.get());
    let has_error = move || current_error().is_some();

    let input_id = ids.input.clone();
    let label_for = ids.input.clone();
    let error_id = ids.error.clone();
    let helper_id = ids.helper.clone();

    view! {
        <div class="w-full">
            {label.map(|label| view! {
                <label for=label_for class=move || label_class(has_error())>
                    {label}
                    {required.then(|| view! { <span class="text-red-500 ml-1">"*"</span> })}
                </label>
            })}
            <input
                id=input_id
                name=name
                type=input_type
                class=move || input_class(has_error(), &class)
                placeholder=placeholder
                prop:value=move || value.map(|value| value.get()).unwrap_or_default()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
                required=required
                disabled=disabled
                aria-invalid=move || has_error().to_string()
                aria-describedby=move || ids.described_by(has_error(), has_helper)
            />
            {move || current_error().map(|err| view! {
                <p
                    id=error_id.clone()
                    class="mt-1.5 text-sm text-red-600 flex items-center gap-1"
                    role="alert"
                >
                    <Icon name=icons::ALERT_CIRCLE class="h-4 w-4" />
                    {err}
                </p>
            })}
            {
                let helper_text = helper_text.clone();
                move || {
                    helper_text.clone().filter(|_| !has_error()).map(|text| view! {
                        <p id=helper_id.clone() class="mt-1.5 text-sm text-gray-500">{text}</p>
                    })
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_id() {
        let ids = InputIds::new(Some("email".to_string()));
        assert_eq!(ids.input, "email");
        assert_eq!(ids.helper, "email-helper");
        assert_eq!(ids.error, "email-error");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let first = InputIds::new(None);
        let second = InputIds::new(Some(String::new()));
        assert!(first.input.starts_with("input-"));
        assert_ne!(first.input, second.input);
    }

    #[test]
    fn test_error_wins_over_helper() {
        let ids = InputIds::new(Some("pw".to_string()));
        assert_eq!(ids.described_by(true, true), Some("pw-error".to_string()));
        assert_eq!(ids.described_by(false, true), Some("pw-helper".to_string()));
        assert_eq!(ids.described_by(false, false), None);
    }

    #[test]
    fn test_error_state_classes() {
        assert!(input_class(true, "").contains("border-red-500"));
        assert!(input_class(false, "").contains("border-gray-300"));
        assert!(label_class(true).contains("text-red-700"));
        assert!(label_class(false).contains("text-gray-700"));
    }
}
