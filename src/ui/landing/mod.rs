//! Landing page sections
//!
//! Each section is a self-contained component reading its copy from
//! [`crate::core::content`]. Motion comes from the [`crate::ui::motion`]
//! wrappers only, so every section renders complete markup on the server.

mod cta;
mod features;
mod features_grid;
mod footer;
mod hero;
mod how_it_works;
mod seo;
mod testimonials;
mod use_cases;

pub use cta::CtaSection;
pub use features::Features;
pub use features_grid::FeaturesGrid;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use seo::SeoMeta;
pub use testimonials::Testimonials;
pub use use_cases::UseCaseSection;

use leptos::prelude::*;

use crate::core::content::SectionHeader;
use crate::ui::motion::ViewportReveal;

/// Reveal delay in seconds for the `index`-th item of a staggered list
pub(crate) fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

/// Badge, title and subtitle block shared by the wide sections
#[component]
pub(crate) fn SectionIntro(
    header: &'static SectionHeader,
    /// Text color of the badge label
    #[prop(default = "text-gray-700")]
    badge_class: &'static str,
) -> impl IntoView {
    view! {
        <ViewportReveal root_margin="-100px" class="text-center mb-16 sm:mb-20">
            <div class="inline-flex items-center gap-2 px-4 py-2 mb-6 bg-white/80 backdrop-blur-sm rounded-full border border-gray-200 shadow-sm">
                <span class=format!("text-sm font-semibold tracking-wide uppercase {badge_class}")>
                    {header.badge}
                </span>
            </div>
            <h2 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-gray-900 mb-6 tracking-tight">
                {header.title}
                {header.highlight.map(|highlight| view! {
                    " "
                    <span class="bg-gradient-to-r from-gold via-orange to-blue bg-clip-text text-transparent">
                        {highlight}
                    </span>
                })}
            </h2>
            <p class="text-lg sm:text-xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                {header.subtitle}
            </p>
        </ViewportReveal>
    }
}
