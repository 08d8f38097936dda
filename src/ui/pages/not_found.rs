//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::content::{COPYRIGHT_YEAR, PRODUCT_NAME};
use crate::ui::common::{Container, Heading, Paragraph, ParagraphSize, Size};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {PRODUCT_NAME}") />
        <Meta name="robots" content="noindex" />

        <main class="min-h-screen bg-[#fdfbf7] flex flex-col items-center justify-center p-4">
            <Container size=Size::Small class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-gold/10 rounded-full flex items-center justify-center">
                    <Icon name=icons::DOCUMENT class="w-12 h-12 text-brown" />
                </div>

                <Heading level=1 class="text-6xl mb-4">"404"</Heading>
                <Heading level=2 class="mb-2">"Page Not Found"</Heading>
                <Paragraph size=ParagraphSize::Large class="text-gray-600 mb-8">
                    "The page you're looking for doesn't exist or has been moved."
                </Paragraph>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-black hover:bg-gray-800 text-white font-medium transition-colors"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/features"
                        attr:class="px-6 py-3 border border-gray-300 text-gray-900 hover:bg-gray-50 font-medium transition-colors"
                    >
                        "See Features"
                    </A>
                </div>
            </Container>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{format!("© {COPYRIGHT_YEAR} {PRODUCT_NAME}")}</p>
            </div>
        </main>
    }
}
