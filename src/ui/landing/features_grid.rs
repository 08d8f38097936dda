use leptos::prelude::*;

use crate::core::content::{FEATURE_CARDS, FEATURES_GRID_HEADER, FeatureCard};
use crate::ui::icon::Icon;
use crate::ui::landing::{SectionIntro, stagger_delay};
use crate::ui::motion::ViewportReveal;

/// Six-card feature grid
#[component]
pub fn FeaturesGrid() -> impl IntoView {
    view! {
        <section role="region" class="relative py-20 sm:py-28 lg:py-32 px-6 sm:px-8 overflow-hidden bg-white">
            // Soft color blooms
            <div
                class="absolute top-[10%] right-[5%] w-[400px] h-[400px] pointer-events-none rounded-full blur-3xl"
                style="background: radial-gradient(circle, rgba(252, 220, 113, 0.08) 0%, transparent 70%);"
                aria-hidden="true"
            ></div>
            <div
                class="absolute bottom-[10%] left-[8%] w-[350px] h-[350px] pointer-events-none rounded-full blur-3xl"
                style="background: radial-gradient(circle, rgba(96, 124, 170, 0.06) 0%, transparent 70%);"
                aria-hidden="true"
            ></div>

            <div class="relative z-10 max-w-7xl mx-auto">
                <SectionIntro header={&FEATURES_GRID_HEADER} badge_class="text-blue" />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                    {FEATURE_CARDS
                        .iter()
                        .enumerate()
                        .map(|(index, card)| view! {
                            <ViewportReveal
                                offset=30.0
                                root_margin="-100px"
                                delay={0.2 + stagger_delay(index, 0.15)}
                                class="h-full"
                            >
                                <GridCard card=card />
                            </ViewportReveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GridCard(card: &'static FeatureCard) -> impl IntoView {
    view! {
        <div class="group relative h-full p-8 rounded-2xl bg-white/70 backdrop-blur-md border border-gray-900/5
                    shadow-sm hover:-translate-y-2 hover:shadow-xl transition-all duration-300">
            <div
                class="w-14 h-14 mb-6 rounded-xl flex items-center justify-center shadow-md
                       group-hover:scale-110 transition-transform duration-300"
                style=format!("background: {};", card.accent.gradient())
            >
                <Icon name=card.icon class="w-7 h-7 text-white" />
            </div>
            <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 mb-3 tracking-tight">{card.title}</h3>
            <p class="text-base text-gray-600 leading-relaxed">{card.description}</p>
        </div>
    }
}
