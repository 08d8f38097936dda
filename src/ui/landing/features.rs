use leptos::prelude::*;

use crate::core::content::{FEATURES, FEATURES_TITLE};
use crate::ui::landing::stagger_delay;
use crate::ui::motion::ViewportReveal;

/// Numbered "What You Get" list
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" role="region" aria-labelledby="features-title" class="relative py-20 md:py-28 px-6 bg-white">
            <div class="max-w-4xl mx-auto">
                <ViewportReveal offset=20.0>
                    <h2
                        id="features-title"
                        class="text-3xl md:text-4xl font-serif font-semibold text-black mb-16 text-center md:text-left"
                    >
                        {FEATURES_TITLE}
                    </h2>
                </ViewportReveal>

                <ol class="space-y-24">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! {
                            <li>
                                <ViewportReveal offset=20.0 root_margin="-50px" delay={stagger_delay(index, 0.1)}>
                                    <div class="text-sm font-serif font-semibold text-vermillion mb-3">
                                        {feature.number}
                                    </div>
                                    <h3 class="text-2xl md:text-3xl font-serif font-semibold text-black mb-4">
                                        {feature.title}
                                    </h3>
                                    <p class="text-base md:text-lg font-serif font-light text-gray-600 max-w-prose leading-relaxed">
                                        {feature.description}
                                    </p>
                                </ViewportReveal>
                            </li>
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
