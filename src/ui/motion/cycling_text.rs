use leptos::prelude::*;

use crate::core::cycle::{DEFAULT_CYCLE_INTERVAL_MS, HeadlineCycle};
use crate::core::{HeadingLevel, merge_classes};
use crate::ui::motion::heading_element;

/// Heading that rotates through `items`, one at a time
///
/// Nothing is rendered for an empty list and a single item never starts a
/// timer. Each change mounts a fresh `<span>` so the enter animation replays.
#[component]
pub fn CyclingText(
    /// Strings to rotate through, in order
    #[prop(into)]
    items: Signal<Vec<String>>,
    /// Delay between rotations in milliseconds (0 means default)
    #[prop(into, default = Signal::stored(DEFAULT_CYCLE_INTERVAL_MS))]
    interval_ms: Signal<u32>,
    /// Heading rank, clamped into 1..=6
    #[prop(default = 1)]
    level: u8,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let level = HeadingLevel::from(level);
    let cycle = RwSignal::new(HeadlineCycle::new(items.get_untracked()));

    Effect::new(move |_| {
        let next = items.get();
        cycle.update(|cycle| cycle.replace_items(next));
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::core::cycle::{CycleInterval, CycleTimer};
        use crate::core::timer::BrowserScheduler;
        use gloo_timers::callback::Interval;

        let timer = StoredValue::new_local(None::<CycleTimer<Interval>>);

        Effect::new(move |_| {
            let len = items.with(Vec::len);
            let interval = CycleInterval::from_millis(interval_ms.get());

            // Cancel before rescheduling so only one tick is ever live
            timer.update_value(|slot| drop(slot.take()));

            let next = CycleTimer::start(&BrowserScheduler, len, interval, move || {
                cycle.try_update(|cycle| {
                    cycle.advance();
                });
            });
            timer.set_value(Some(next));
        });

        on_cleanup(move || {
            timer.try_update_value(|slot| drop(slot.take()));
        });
    }

    // Rotation only runs in the browser
    #[cfg(not(feature = "hydrate"))]
    let _ = interval_ms;

    let heading_class = merge_classes(&[
        "font-bold text-gray-900",
        level.headline_size_class(),
        "leading-tight",
        class.as_str(),
    ]);

    view! {
        <Show when=move || !cycle.with(HeadlineCycle::is_empty)>
            {
                let heading_class = heading_class.clone();
                let text = move || {
                    cycle.with(|cycle| {
                        cycle.current().map(|current| {
                            let current = current.to_string();
                            view! {
                                <span
                                    data-testid="animated-text"
                                    class="inline-block cycling-text-enter"
                                >
                                    {current}
                                </span>
                            }
                        })
                    })
                };
                heading_element(level, heading_class, text)
            }
        </Show>
    }
}
