use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::HERO;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::CyclingText;

/// Above-the-fold section with the rotating headline
#[component]
pub fn Hero() -> impl IntoView {
    let headlines: Vec<String> = HERO.headlines.iter().map(|line| line.to_string()).collect();

    view! {
        <section
            role="banner"
            class="relative min-h-[85vh] flex items-center justify-center overflow-hidden
                   bg-gradient-to-br from-[#fdfbf7] via-white to-[#faf8f3] px-4 sm:px-6 lg:px-8"
        >
            // Floating document fragments
            <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
                <div class="absolute top-[15%] right-[10%] w-32 h-32 bg-gold/5 rounded-2xl rotate-12 animate-float"></div>
                <div class="absolute bottom-[20%] left-[8%] w-24 h-24 bg-blue/5 rounded-2xl -rotate-6 animate-float-delayed"></div>
                <div class="absolute top-[40%] left-[15%] w-16 h-16 border-2 border-gold/10 rounded-xl rotate-45 animate-float-slow"></div>
            </div>

            <div class="relative z-10 max-w-5xl mx-auto text-center py-20 sm:py-24 space-y-12">
                <div class="inline-flex items-center gap-2 px-4 py-2 bg-gold/10 backdrop-blur-sm rounded-full border border-gold/20">
                    <div class="w-2 h-2 bg-gold rounded-full animate-pulse"></div>
                    <span class="text-sm font-medium text-gray-700 tracking-wide">{HERO.eyebrow}</span>
                </div>

                <div class="space-y-6">
                    <div class="flex flex-col items-center gap-3">
                        <span class="text-lg sm:text-xl font-semibold text-gray-600">{HERO.lead_in}</span>
                        <CyclingText
                            items=headlines
                            interval_ms=HERO.headline_interval_ms
                            level=1
                            class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl bg-gradient-to-br from-gray-900 via-gray-800 to-gray-700 bg-clip-text text-transparent leading-[1.1] tracking-tight"
                            attr:aria-live="polite"
                        />
                        <span class="text-lg sm:text-xl font-semibold text-gray-600">{HERO.lead_out}</span>
                    </div>

                    <p class="max-w-2xl mx-auto text-lg sm:text-xl text-gray-600 leading-relaxed font-light px-4">
                        {HERO.subtitle}
                    </p>
                </div>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 pt-4">
                    <A
                        href=HERO.primary_cta.href
                        attr:class="group relative px-8 py-4 bg-gold text-gray-900 font-semibold rounded-2xl shadow-lg shadow-gold/20
                                    hover:shadow-xl hover:shadow-gold/30 hover:scale-105 active:scale-100 transition-all duration-200
                                    overflow-hidden w-full sm:w-auto"
                    >
                        <span class="relative z-10 flex items-center justify-center gap-2">
                            {HERO.primary_cta.label}
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                        </span>
                    </A>
                    <a
                        href=HERO.secondary_cta.href
                        class="group px-8 py-4 bg-white/60 backdrop-blur-sm text-gray-700 font-semibold rounded-2xl border-2 border-gray-300
                               hover:border-blue hover:bg-white hover:text-blue transition-all duration-200 w-full sm:w-auto"
                    >
                        <span class="flex items-center justify-center gap-2">
                            {HERO.secondary_cta.label}
                            <Icon name=icons::CHEVRON_DOWN class="w-5 h-5 group-hover:translate-y-1 transition-transform" />
                        </span>
                    </a>
                </div>

                // Social proof
                <div class="pt-8 flex items-center justify-center gap-6 text-sm text-gray-500">
                    <div class="flex items-center gap-2">
                        <div class="flex -space-x-2" aria-hidden="true">
                            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-gold to-orange border-2 border-white"></div>
                            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-blue to-[#4a6b8a] border-2 border-white"></div>
                            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-brown to-[#8a7565] border-2 border-white"></div>
                        </div>
                        <span class="font-medium">{HERO.social_proof}</span>
                    </div>
                    <div class="hidden sm:block w-px h-4 bg-gray-300"></div>
                    <div class="hidden sm:flex items-center gap-1.5">
                        <span class="text-gold" aria-hidden="true">"★"</span>
                        <span class="font-medium">{HERO.quality_badge}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
