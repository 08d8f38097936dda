use leptos::prelude::*;

/// Inline stroke icon on a 24x24 grid
///
/// Unknown names render an empty box of the same size so layout never shifts.
#[component]
pub fn Icon(
    /// Icon name, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let path = icon_path(name).unwrap_or_default();

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
        >
            <path d=path />
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const DOCUMENT: &str = "document";
    pub const DOWNLOAD: &str = "download";
    pub const EDIT: &str = "edit";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const LIGHTNING: &str = "lightning";
    pub const LOCK: &str = "lock";
    pub const SPINNER: &str = "spinner";
    pub const UPLOAD: &str = "upload";

    pub const ALL: &[&str] = &[
        ALERT_CIRCLE,
        ARROW_RIGHT,
        CHEVRON_DOWN,
        DOCUMENT,
        DOWNLOAD,
        EDIT,
        LIGHTBULB,
        LIGHTNING,
        LOCK,
        SPINNER,
        UPLOAD,
    ];
}

/// SVG path data for a named icon
pub fn icon_path(name: &str) -> Option<&'static str> {
    let path = match name {
        icons::ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::ARROW_RIGHT => "M13 7l5 5m0 0l-5 5m5-5H6",
        icons::CHEVRON_DOWN => "M19 9l-7 7-7-7",
        icons::DOCUMENT => {
            "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
        }
        icons::DOWNLOAD => "M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4",
        icons::EDIT => {
            "M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"
        }
        icons::LIGHTBULB => {
            "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z"
        }
        icons::LIGHTNING => "M13 10V3L4 14h7v7l9-11h-7z",
        icons::LOCK => {
            "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"
        }
        icons::SPINNER => "M12 3a9 9 0 109 9",
        icons::UPLOAD => {
            "M7 16a4 4 0 01-.88-7.903A5 5 0 1115.9 6L16 6a5 5 0 011 9.9M15 13l-3-3m0 0l-3 3m3-3v12"
        }
        _ => return None,
    };
    Some(path)
}
