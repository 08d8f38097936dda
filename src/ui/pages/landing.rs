//! Landing page component
//!
//! The public home page: rotating hero headline followed by the feature
//! list, the workflow timeline, use cases, client quotes and a closing call
//! to action.

use leptos::prelude::*;

use crate::ui::landing::{
    CtaSection, Features, Footer, Hero, HowItWorks, SeoMeta, Testimonials, UseCaseSection,
};
use crate::ui::motion::MotionStyles;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <MotionStyles />

        <main class="min-h-screen bg-white overflow-x-hidden">
            <Hero />
            <Features />
            <HowItWorks />
            <UseCaseSection />
            <Testimonials />
            <CtaSection />
            <Footer />
        </main>
    }
}
