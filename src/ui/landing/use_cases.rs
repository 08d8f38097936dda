use leptos::prelude::*;

use crate::core::content::{USE_CASES, USE_CASES_HEADER, UseCase};
use crate::ui::landing::SectionIntro;
use crate::ui::motion::ViewportReveal;

/// Three alternating "See It In Action" rows with feature tags
#[component]
pub fn UseCaseSection() -> impl IntoView {
    let last = USE_CASES.len().saturating_sub(1);

    view! {
        <section
            role="region"
            class="relative bg-gradient-to-b from-white via-[#faf8f3] to-white py-24 sm:py-32 lg:py-40 px-4 sm:px-6 lg:px-8 overflow-hidden"
        >
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-20 left-10 w-64 h-64 bg-gold/5 rounded-full blur-3xl"></div>
                <div class="absolute bottom-20 right-10 w-80 h-80 bg-blue/5 rounded-full blur-3xl"></div>
            </div>

            <div class="relative max-w-7xl mx-auto">
                <SectionIntro header={&USE_CASES_HEADER} />

                <div class="space-y-24 sm:space-y-32">
                    {USE_CASES
                        .iter()
                        .enumerate()
                        .map(|(index, use_case)| view! {
                            <ViewportReveal root_margin="-80px">
                                <UseCaseRow
                                    use_case=use_case
                                    flipped={index % 2 == 1}
                                    connector={index < last}
                                />
                            </ViewportReveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn UseCaseRow(use_case: &'static UseCase, flipped: bool, connector: bool) -> impl IntoView {
    let row_class = if flipped {
        "flex flex-col lg:flex-row-reverse items-center gap-12 lg:gap-20"
    } else {
        "flex flex-col lg:flex-row items-center gap-12 lg:gap-20"
    };

    view! {
        <div class=row_class>
            <div class="flex-1 space-y-6">
                <div class="relative flex items-center gap-4">
                    <span
                        class=format!(
                            "inline-flex items-center justify-center w-14 h-14 rounded-2xl text-xl font-bold text-gray-900 {}",
                            use_case.accent.dot_class()
                        )
                    >
                        {use_case.number}
                    </span>
                    {connector.then(|| view! {
                        <div class="hidden lg:block absolute left-7 top-16 w-px h-24 bg-gray-200" aria-hidden="true"></div>
                    })}
                </div>

                <h3 class="text-3xl sm:text-4xl font-bold text-gray-900 leading-tight">{use_case.title}</h3>
                <p class="text-lg text-gray-600 leading-relaxed max-w-xl">{use_case.description}</p>

                <ul class="flex flex-wrap gap-3">
                    {use_case
                        .tags
                        .iter()
                        .map(|tag| view! {
                            <li class="px-4 py-2 bg-white border border-gray-200 rounded-full text-sm font-medium text-gray-700 shadow-sm">
                                {*tag}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>

            // Illustration placeholder
            <div class="flex-1 w-full" aria-hidden="true">
                <div class=format!(
                    "aspect-[4/3] rounded-3xl bg-gradient-to-br {} border border-gray-100 shadow-inner",
                    use_case.accent.wash_class()
                )></div>
            </div>
        </div>
    }
}
