use leptos::prelude::*;

use crate::core::content::{TESTIMONIALS, TESTIMONIALS_TITLE};
use crate::ui::landing::stagger_delay;
use crate::ui::motion::ViewportReveal;

/// Static 2x2 grid of client quotes
#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section role="region" class="relative py-20 md:py-28 px-6 bg-gray-50">
            <div class="max-w-5xl mx-auto">
                <ViewportReveal offset=20.0>
                    <h2 class="text-3xl md:text-4xl font-serif font-semibold text-black mb-16 text-center">
                        {TESTIMONIALS_TITLE}
                    </h2>
                </ViewportReveal>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| view! {
                            <ViewportReveal
                                offset=20.0
                                root_margin="-50px"
                                delay={stagger_delay(index, 0.1)}
                                class="border border-gray-300 p-8"
                            >
                                <figure>
                                    <blockquote class="mb-6">
                                        <p class="text-base font-serif italic text-gray-800 leading-relaxed">
                                            {format!("\u{201c}{}\u{201d}", testimonial.quote)}
                                        </p>
                                    </blockquote>
                                    <figcaption class="text-sm font-sans text-gray-600">
                                        <cite class="not-italic">{testimonial.attribution()}</cite>
                                    </figcaption>
                                </figure>
                            </ViewportReveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
