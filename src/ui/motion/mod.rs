//! Time and scroll driven motion components
//!
//! Both components render their resting state on the server and attach their
//! browser behavior on hydration.

mod cycling_text;
mod viewport_reveal;

pub use cycling_text::CyclingText;
pub use viewport_reveal::ViewportReveal;

use leptos::prelude::*;

use crate::core::HeadingLevel;

/// Render `children` inside the heading element for `level`
pub(crate) fn heading_element(
    level: HeadingLevel,
    class: String,
    children: impl IntoView + Send + 'static,
) -> AnyView {
    match level {
        HeadingLevel::H1 => view! { <h1 class=class>{children}</h1> }.into_any(),
        HeadingLevel::H2 => view! { <h2 class=class>{children}</h2> }.into_any(),
        HeadingLevel::H3 => view! { <h3 class=class>{children}</h3> }.into_any(),
        HeadingLevel::H4 => view! { <h4 class=class>{children}</h4> }.into_any(),
        HeadingLevel::H5 => view! { <h5 class=class>{children}</h5> }.into_any(),
        HeadingLevel::H6 => view! { <h6 class=class>{children}</h6> }.into_any(),
    }
}

/// Keyframes shared by the motion components
#[component]
pub fn MotionStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .cycling-text-enter {
                animation: cycling-text-enter 0.5s ease-in-out both;
            }
            @keyframes cycling-text-enter {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes float {
                0%, 100% { transform: translateY(0) rotate(var(--float-rotate, 0deg)); }
                50% { transform: translateY(-16px) rotate(var(--float-rotate, 0deg)); }
            }
            .animate-float { animation: float 6s ease-in-out infinite; }
            .animate-float-delayed { animation: float 7s ease-in-out 1.5s infinite; }
            .animate-float-slow { animation: float 9s ease-in-out infinite; }

            @media (prefers-reduced-motion: reduce) {
                .cycling-text-enter,
                .animate-float,
                .animate-float-delayed,
                .animate-float-slow {
                    animation: none;
                }
            }
            "#
        </style>
    }
}
