//! Headline cycling
//!
//! A cycling headline shows one string of a fixed list at a time and moves to
//! the next one on every timer tick, wrapping around at the end.
//!
//! - [`HeadlineCycle`]: the list plus the active index
//! - [`CycleInterval`]: tick period, never zero
//! - [`CycleTimer`]: owns the scheduled tick; dropping it stops the cycle
//!
//! # Example
//! ```
//! use featurelist_landing::core::cycle::HeadlineCycle;
//!
//! let mut cycle = HeadlineCycle::new(["Extract Features", "Analyze Proposals"]);
//! assert_eq!(cycle.current(), Some("Extract Features"));
//!
//! cycle.advance();
//! assert_eq!(cycle.current(), Some("Analyze Proposals"));
//!
//! cycle.advance();
//! assert_eq!(cycle.current(), Some("Extract Features"));
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::timer::Scheduler;

/// Default delay between two headlines (4 seconds)
pub const DEFAULT_CYCLE_INTERVAL_MS: u32 = 4000;

/// Delay between two consecutive headlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleInterval(u32);

impl CycleInterval {
    /// Build an interval from milliseconds. Zero falls back to the default.
    pub fn from_millis(millis: u32) -> Self {
        if millis == 0 {
            tracing::warn!(
                default_ms = DEFAULT_CYCLE_INTERVAL_MS,
                "cycle interval of 0ms rejected, using default"
            );
            Self(DEFAULT_CYCLE_INTERVAL_MS)
        } else {
            Self(millis)
        }
    }

    pub fn as_millis(self) -> u32 {
        self.0
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for CycleInterval {
    fn default() -> Self {
        Self(DEFAULT_CYCLE_INTERVAL_MS)
    }
}

/// Index that follows `current` in a list of `len` items.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Keep `current` if it still points into a list of `len` items, otherwise restart at 0.
pub fn clamp_index(current: usize, len: usize) -> usize {
    if current < len { current } else { 0 }
}

/// Ordered headlines and the one currently shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadlineCycle {
    items: Vec<String>,
    active: usize,
}

impl HeadlineCycle {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            active: 0,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the list is long enough to need a timer
    pub fn needs_timer(&self) -> bool {
        self.items.len() > 1
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Headline currently shown, `None` for an empty list
    pub fn current(&self) -> Option<&str> {
        self.items.get(self.active).map(String::as_str)
    }

    /// Move to the next headline and return its index.
    pub fn advance(&mut self) -> usize {
        self.active = next_index(self.active, self.items.len());
        self.active
    }

    /// Swap the list while mounted. The index survives if it is still valid.
    pub fn replace_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self.active = clamp_index(self.active, self.items.len());
    }
}

/// Scheduled tick of a mounted cycling headline
///
/// Owns the scheduler handle. A timer is only scheduled for more than one
/// item. Once stopped (explicitly or by drop) the advance callback never
/// runs again, even if the platform still delivers a queued tick.
pub struct CycleTimer<H> {
    handle: Option<H>,
    live: Rc<Cell<bool>>,
}

impl<H: 'static> CycleTimer<H> {
    pub fn start<S>(
        scheduler: &S,
        len: usize,
        interval: CycleInterval,
        mut advance: impl FnMut() + 'static,
    ) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let live = Rc::new(Cell::new(true));
        if len <= 1 {
            return Self { handle: None, live };
        }

        let guard = live.clone();
        let handle = scheduler.every(
            interval.duration(),
            Box::new(move || {
                if guard.get() {
                    advance();
                }
            }),
        );

        tracing::debug!(
            items = len,
            interval_ms = interval.as_millis(),
            "headline cycle scheduled"
        );

        Self {
            handle: Some(handle),
            live,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the tick. Idempotent.
    pub fn stop(&mut self) {
        self.live.set(false);
        self.handle.take();
    }
}

impl<H> Drop for CycleTimer<H> {
    fn drop(&mut self) {
        self.live.set(false);
        self.handle.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timer::manual::ManualScheduler;
    use std::cell::RefCell;

    /// Closed-form index after `elapsed`, to check the timer-driven one against
    fn index_at(elapsed: Duration, interval: CycleInterval, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let ticks = elapsed.as_millis() / u128::from(interval.as_millis());
        (ticks % len as u128) as usize
    }

    const HERO: [&str; 3] = ["Extract Features", "Analyze Proposals", "Generate Reports"];

    fn mount(
        scheduler: &ManualScheduler,
        cycle: &Rc<RefCell<HeadlineCycle>>,
        interval_ms: u32,
    ) -> CycleTimer<<ManualScheduler as Scheduler>::Handle> {
        let state = cycle.clone();
        let len = cycle.borrow().len();
        CycleTimer::start(scheduler, len, CycleInterval::from_millis(interval_ms), move || {
            state.borrow_mut().advance();
        })
    }

    #[test]
    fn test_hero_headlines_rotate_and_wrap() {
        let scheduler = ManualScheduler::new();
        let cycle = Rc::new(RefCell::new(HeadlineCycle::new(HERO)));
        let _timer = mount(&scheduler, &cycle, 3500);

        assert_eq!(cycle.borrow().current(), Some("Extract Features"));

        scheduler.advance(Duration::from_millis(3500));
        assert_eq!(cycle.borrow().current(), Some("Analyze Proposals"));

        scheduler.advance(Duration::from_millis(3500));
        assert_eq!(cycle.borrow().current(), Some("Generate Reports"));

        scheduler.advance(Duration::from_millis(3500));
        assert_eq!(cycle.borrow().current(), Some("Extract Features"));
    }

    #[test]
    fn test_single_item_never_schedules() {
        let scheduler = ManualScheduler::new();
        let cycle = Rc::new(RefCell::new(HeadlineCycle::new(["Only One"])));
        let timer = mount(&scheduler, &cycle, DEFAULT_CYCLE_INTERVAL_MS);

        assert!(!timer.is_scheduled());
        assert_eq!(scheduler.scheduled_total(), 0);

        scheduler.advance(Duration::from_millis(100_000));
        assert_eq!(cycle.borrow().current(), Some("Only One"));
    }

    #[test]
    fn test_empty_list_shows_nothing_and_never_schedules() {
        let scheduler = ManualScheduler::new();
        let cycle = Rc::new(RefCell::new(HeadlineCycle::new(Vec::<String>::new())));
        let timer = mount(&scheduler, &cycle, 1000);

        assert!(cycle.borrow().is_empty());
        assert_eq!(cycle.borrow().current(), None);
        assert!(!timer.is_scheduled());
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn test_index_after_k_intervals_is_k_mod_n() {
        for n in 2..=5usize {
            for k in 0..=12u64 {
                let scheduler = ManualScheduler::new();
                let items: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
                let cycle = Rc::new(RefCell::new(HeadlineCycle::new(items)));
                let _timer = mount(&scheduler, &cycle, 250);

                scheduler.advance(Duration::from_millis(250 * k));

                let expected = (k as usize) % n;
                assert_eq!(cycle.borrow().active_index(), expected, "n={n} k={k}");
                assert_eq!(
                    index_at(Duration::from_millis(250 * k), CycleInterval::from_millis(250), n),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_exactly_one_item_shown_at_every_sample() {
        let scheduler = ManualScheduler::new();
        let cycle = Rc::new(RefCell::new(HeadlineCycle::new(HERO)));
        let _timer = mount(&scheduler, &cycle, 700);

        for _ in 0..40 {
            scheduler.advance(Duration::from_millis(133));
            let cycle = cycle.borrow();
            let shown = cycle.current().expect("non-empty list always shows an item");
            assert_eq!(HERO.iter().filter(|item| **item == shown).count(), 1);
            assert!(cycle.active_index() < cycle.len());
        }
    }

    #[test]
    fn test_unmount_before_tick_stops_all_mutation() {
        let scheduler = ManualScheduler::new();
        let mutations = Rc::new(Cell::new(0));
        let counter = mutations.clone();

        let timer = CycleTimer::start(&scheduler, 3, CycleInterval::from_millis(1000), move || {
            counter.set(counter.get() + 1)
        });

        scheduler.advance(Duration::from_millis(999));
        drop(timer);
        scheduler.advance(Duration::from_millis(10_000));

        assert_eq!(mutations.get(), 0);
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let mut timer = CycleTimer::start(&scheduler, 2, CycleInterval::default(), || {});

        assert!(timer.is_scheduled());
        timer.stop();
        timer.stop();

        assert!(!timer.is_scheduled());
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn test_reconfiguration_leaves_a_single_live_timer() {
        let scheduler = ManualScheduler::new();
        let cycle = Rc::new(RefCell::new(HeadlineCycle::new(HERO)));

        let mut timer = mount(&scheduler, &cycle, 1000);
        scheduler.advance(Duration::from_millis(1000));
        assert_eq!(cycle.borrow().active_index(), 1);

        // New interval: old tick cancelled before the new one is scheduled
        timer.stop();
        timer = mount(&scheduler, &cycle, 300);
        assert_eq!(scheduler.live_timers(), 1);
        assert_eq!(scheduler.scheduled_total(), 2);

        scheduler.advance(Duration::from_millis(900));
        assert_eq!(cycle.borrow().active_index(), 1);
        assert!(timer.is_scheduled());
    }

    #[test]
    fn test_replace_items_keeps_or_resets_index() {
        let mut cycle = HeadlineCycle::new(HERO);
        cycle.advance();
        cycle.advance();
        assert_eq!(cycle.active_index(), 2);

        cycle.replace_items(["a", "b", "c", "d"]);
        assert_eq!(cycle.current(), Some("c"));

        cycle.replace_items(["x", "y"]);
        assert_eq!(cycle.active_index(), 0);
        assert_eq!(cycle.current(), Some("x"));
    }

    #[test]
    fn test_zero_interval_uses_default() {
        assert_eq!(CycleInterval::from_millis(0).as_millis(), DEFAULT_CYCLE_INTERVAL_MS);
        assert_eq!(CycleInterval::from_millis(100).as_millis(), 100);
        assert_eq!(CycleInterval::default().duration(), Duration::from_secs(4));
    }

    #[test]
    fn test_default_interval_advances_after_four_seconds() {
        let scheduler = ManualScheduler::new();
        let cycle = Rc::new(RefCell::new(HeadlineCycle::new(["First", "Second"])));
        let _timer = mount(&scheduler, &cycle, DEFAULT_CYCLE_INTERVAL_MS);

        scheduler.advance(Duration::from_millis(3999));
        assert_eq!(cycle.borrow().current(), Some("First"));

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(cycle.borrow().current(), Some("Second"));
    }

    #[test]
    fn test_next_and_clamp_index() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(next_index(1, 3), 2);

        assert_eq!(clamp_index(4, 2), 0);
        assert_eq!(clamp_index(1, 2), 1);
        assert_eq!(clamp_index(0, 0), 0);
    }
}
