use leptos::prelude::*;

use crate::core::content::{HOW_IT_WORKS_HEADER, STEPS, Step};
use crate::ui::icon::Icon;
use crate::ui::landing::{SectionIntro, stagger_delay};
use crate::ui::motion::ViewportReveal;

/// Four-step vertical timeline, cards alternating sides on wide screens
#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section
            role="region"
            class="relative py-20 sm:py-28 lg:py-32 px-6 sm:px-8 overflow-hidden"
            style="background: radial-gradient(ellipse 60% 50% at 50% 0%, rgba(96, 124, 170, 0.08), transparent), linear-gradient(180deg, #fdfbf7 0%, #faf8f3 50%, #f5f3ed 100%);"
        >
            <div class="relative z-10 max-w-6xl mx-auto">
                <SectionIntro header={&HOW_IT_WORKS_HEADER} />

                <div class="relative">
                    // Center line
                    <div
                        class="hidden lg:block absolute left-1/2 top-0 bottom-0 w-0.5 -translate-x-1/2"
                        style="background: linear-gradient(180deg, transparent 0%, rgba(96, 124, 170, 0.2) 10%, rgba(96, 124, 170, 0.2) 90%, transparent 100%);"
                        aria-hidden="true"
                    ></div>

                    <ol class="space-y-16 sm:space-y-24">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(index, step)| view! {
                                <li>
                                    <ViewportReveal
                                        duration=0.7
                                        root_margin="-100px"
                                        delay={0.2 + stagger_delay(index, 0.25)}
                                    >
                                        <TimelineStep step=step flipped={index % 2 == 1} />
                                    </ViewportReveal>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineStep(step: &'static Step, flipped: bool) -> impl IntoView {
    let gradient_text = format!(
        "background: {}; -webkit-background-clip: text; background-clip: text; -webkit-text-fill-color: transparent;",
        step.accent.gradient()
    );
    let (row_class, text_align, icon_align) = if flipped {
        (
            "relative flex flex-col lg:flex-row-reverse items-center gap-8",
            "flex-1 w-full lg:w-auto lg:text-right",
            "flex mb-6 lg:justify-end",
        )
    } else {
        (
            "relative flex flex-col lg:flex-row items-center gap-8",
            "flex-1 w-full lg:w-auto",
            "flex mb-6 lg:justify-start",
        )
    };

    view! {
        <div class=row_class>
            // Large number on the center line
            <div
                class="hidden lg:block absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 z-20 text-8xl font-extrabold tracking-tighter"
                style=gradient_text.clone()
                aria-hidden="true"
            >
                {step.number}
            </div>

            <div class=text_align>
                <div class="group relative p-8 sm:p-10 rounded-3xl bg-white/80 backdrop-blur-lg border-2 border-white/50 shadow-lg
                            hover:-translate-y-1 transition-transform duration-300">
                    <div class="lg:hidden mb-6 inline-block text-6xl font-extrabold tracking-tighter" style=gradient_text>
                        {step.number}
                    </div>
                    <div class=icon_align>
                        <div
                            class="w-16 h-16 rounded-2xl flex items-center justify-center shadow-md group-hover:scale-110 transition-transform duration-300"
                            style=format!("background: {};", step.accent.gradient())
                        >
                            <Icon name=step.icon class="w-8 h-8 text-white" />
                        </div>
                    </div>
                    <h3 class="text-2xl sm:text-3xl font-semibold text-gray-900 mb-4 tracking-tight">{step.title}</h3>
                    <p class="text-lg text-gray-600 leading-relaxed">{step.description}</p>
                </div>
            </div>

            <div class="hidden lg:block flex-1"></div>
        </div>
    }
}
