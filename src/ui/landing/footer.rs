use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{COPYRIGHT_YEAR, FOOTER_COLUMNS, Link, PRODUCT_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer role="contentinfo" class="relative border-t border-gray-200 bg-white py-16 px-6">
            <div class="max-w-6xl mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| view! {
                            <nav aria-label=column.title>
                                <h3 class="text-sm font-sans font-semibold text-black mb-4">{column.title}</h3>
                                <ul class="space-y-3">
                                    {column.links.iter().map(|link| view! { <li><FooterLink link=*link /></li> }).collect_view()}
                                </ul>
                            </nav>
                        })
                        .collect_view()}
                </div>

                <div class="pt-8 mt-8 border-t border-gray-200">
                    <p class="text-center text-sm text-gray-600">
                        {format!("© {COPYRIGHT_YEAR} ")}
                        <span class="font-serif">{PRODUCT_NAME}</span>
                        ". All rights reserved."
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(link: Link) -> impl IntoView {
    let class = "text-sm font-sans text-gray-600 hover:text-black transition-colors";

    if link.is_external() {
        view! {
            <a href=link.href class=class target="_blank" rel="noopener noreferrer">
                {link.label}
            </a>
        }
        .into_any()
    } else {
        view! { <A href=link.href attr:class=class>{link.label}</A> }.into_any()
    }
}
