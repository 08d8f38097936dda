use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{CTA_LINK, CTA_TITLE};
use crate::ui::motion::ViewportReveal;

/// Closing call to action: one question, one button
#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section role="region" class="relative py-32 md:py-40 px-6 bg-white">
            <div class="max-w-4xl mx-auto flex flex-col items-center text-center">
                <ViewportReveal offset=20.0>
                    <h2 class="text-4xl md:text-5xl font-serif font-semibold text-black mb-12">
                        {CTA_TITLE}
                    </h2>
                </ViewportReveal>
                <ViewportReveal offset=20.0 delay=0.1>
                    <A
                        href=CTA_LINK.href
                        attr:class="inline-flex items-center gap-3 px-10 py-4 bg-black text-white font-sans font-medium
                                    hover:bg-gray-800 transition-colors duration-200"
                    >
                        {CTA_LINK.label}
                        <span aria-hidden="true">"→"</span>
                    </A>
                </ViewportReveal>
            </div>
        </section>
    }
}
