use leptos::html::Div;
use leptos::prelude::*;

use crate::core::merge_classes;
use crate::core::reveal::{
    DEFAULT_REVEAL_DURATION_SECS, DEFAULT_REVEAL_OFFSET_PX, DEFAULT_REVEAL_THRESHOLD,
    RevealOptions, RevealPhase, reveal_style,
};

/// Wrapper that fades its children in the first time they scroll into view
///
/// Browsers without `IntersectionObserver` get the content shown right away.
#[component]
pub fn ViewportReveal(
    /// Fraction of the wrapper that must be visible, 0.0 to 1.0
    #[prop(default = DEFAULT_REVEAL_THRESHOLD)]
    threshold: f64,
    /// CSS margin shorthand applied to the viewport box
    #[prop(into, default = "0px".to_string())]
    root_margin: String,
    /// Reveal animation length in seconds
    #[prop(default = DEFAULT_REVEAL_DURATION_SECS)]
    duration: f64,
    /// Delay before the animation starts, in seconds
    #[prop(default = 0.0)]
    delay: f64,
    /// Vertical offset of the hidden state in pixels
    #[prop(default = DEFAULT_REVEAL_OFFSET_PX)]
    offset: f64,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let options = RevealOptions::new(threshold, &root_margin, duration)
        .with_delay(delay)
        .with_offset(offset);
    let revealed = RwSignal::new(false);
    let node_ref = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use crate::core::reveal::{BrowserObserver, BrowserSubscription, RevealHandle};

        let handle = StoredValue::new_local(None::<RevealHandle<BrowserSubscription>>);
        let options = options.clone();

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }

            let target: web_sys::Element = element.into();
            let started = RevealHandle::start(Some(&BrowserObserver), &target, &options, move || {
                revealed.try_set(true);
            });
            handle.set_value(Some(started));
        });

        on_cleanup(move || {
            handle.try_update_value(|slot| drop(slot.take()));
        });
    }

    let style = move || reveal_style(RevealPhase::from_revealed(revealed.get()), &options);

    view! {
        <div
            node_ref=node_ref
            class=merge_classes(&["will-change-transform", class.as_str()])
            style=style
            data-revealed=move || revealed.get().to_string()
        >
            {children.map(|children| children())}
        </div>
    }
}
