//! Features page component
//!
//! The full capability overview linked from the footer: the icon card grid,
//! the use case walkthrough and an early access sign-up card.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{PRODUCT_NAME, SITE_URL};
use crate::ui::common::{
    Button, ButtonSize, ButtonType, Card, CardVariant, Container, Heading, Input, Paragraph,
    ParagraphSize, Section, SectionBackground, Size,
};
use crate::ui::landing::{CtaSection, FeaturesGrid, Footer, UseCaseSection};
use crate::ui::motion::{MotionStyles, ViewportReveal};

/// Features page component
#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <Title text=format!("Features | {PRODUCT_NAME}") />
        <Meta
            name="description"
            content="Everything Feature List Generator does: document upload, AI extraction, inline review and export."
        />
        <Link rel="canonical" href=format!("{SITE_URL}features") />
        <MotionStyles />

        <main class="min-h-screen bg-white overflow-x-hidden">
            <FeaturesGrid />
            <UseCaseSection />
            <EarlyAccess />
            <CtaSection />
            <Footer />
        </main>
    }
}

/// Checks an early access address, returning the message shown on rejection
pub(crate) fn validate_email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Please enter your email address.");
    }
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err("That doesn't look like an email address."),
    }
}

#[component]
fn EarlyAccess() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let on_input = Callback::new(move |value: String| {
        email.set(value);
        error.set(None);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get_untracked()) {
            Ok(()) => {
                tracing::debug!("early access sign-up accepted");
                submitted.set(true);
            }
            Err(message) => error.set(Some(message.to_string())),
        }
    };

    view! {
        <Section size=Size::Medium background=SectionBackground::Gray>
            <Container size=Size::Small>
                <ViewportReveal offset=20.0>
                    <Card variant=CardVariant::Elevated class="p-8 sm:p-10">
                        <Heading level=2 class="mb-3">"Get early access"</Heading>
                        <Paragraph size=ParagraphSize::Large class="text-gray-600 mb-8">
                            "Leave your email and we'll let you know when batch processing ships."
                        </Paragraph>

                        <Show
                            when=move || submitted.get()
                            fallback=move || view! {
                                <form class="flex flex-col sm:flex-row gap-4 items-start" on:submit=on_submit novalidate=true>
                                    <div class="flex-1 w-full">
                                        <Input
                                            label="Email"
                                            input_type="email"
                                            name="email"
                                            placeholder="you@company.com"
                                            value=email
                                            on_input=on_input
                                            error=error
                                            helper_text="We only write when there is something to try."
                                            required=true
                                        />
                                    </div>
                                    <Button button_type=ButtonType::Submit size=ButtonSize::Large class="sm:mt-7">
                                        "Notify me"
                                    </Button>
                                </form>
                            }
                        >
                            <p class="text-lg text-gray-900" role="status">
                                "Thanks! You're on the list."
                            </p>
                        </Show>
                    </Card>
                </ViewportReveal>
            </Container>
        </Section>
    }
}
