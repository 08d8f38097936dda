use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{PAGE_DESCRIPTION, PAGE_TITLE, SITE_URL, structured_data};

const KEYWORDS: &str = "feature list generator, feature extraction, technical proposals, proposal analysis, requirements, document review, AI assistant";

/// Search engine and social card metadata for the landing page
#[component]
pub fn SeoMeta() -> impl IntoView {
    let og_image = format!("{SITE_URL}og-image.png");

    let json_ld = match structured_data() {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!("failed to serialize structured data: {err}");
            None
        }
    };

    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content=KEYWORDS />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:image" content=og_image.clone() />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content=SITE_URL />
        <Meta property="twitter:title" content=PAGE_TITLE />
        <Meta property="twitter:description" content=PAGE_DESCRIPTION />
        <Meta property="twitter:image" content=og_image />

        <Link rel="canonical" href=SITE_URL />

        {json_ld.map(|json| view! { <script type="application/ld+json" inner_html=json></script> })}
    }
}
