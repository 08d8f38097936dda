//! Recurring tick scheduling for time-driven UI behaviors
//!
//! Components never call `setInterval` themselves. They ask a [`Scheduler`]
//! for a recurring tick and keep the returned handle for as long as the tick
//! should run. Dropping the handle cancels the tick.

use std::time::Duration;

/// Capability for scheduling a recurring callback.
pub trait Scheduler {
    /// Owned handle for one scheduled interval. Dropping it cancels the interval.
    type Handle: 'static;

    /// Run `tick` every `period` until the returned handle is dropped.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Self::Handle;
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserScheduler;

#[cfg(feature = "hydrate")]
mod browser {
    use super::Scheduler;
    use gloo_timers::callback::Interval;
    use std::time::Duration;

    /// Scheduler backed by the browser's `setInterval` through `gloo-timers`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserScheduler;

    impl Scheduler for BrowserScheduler {
        type Handle = Interval;

        fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> Interval {
            let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1);
            Interval::new(millis, tick)
        }
    }
}

/// Simulated clock for driving schedulers in tests
#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

    struct Entry {
        period_ms: u64,
        next_due_ms: u64,
        live: Rc<Cell<bool>>,
        tick: Tick,
    }

    #[derive(Default)]
    struct Clock {
        now_ms: u64,
        entries: Vec<Entry>,
        scheduled_total: usize,
    }

    /// Scheduler whose time only moves when [`ManualScheduler::advance`] is called
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub(crate) struct ManualHandle {
        live: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    impl ManualScheduler {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn now_ms(&self) -> u64 {
            self.clock.borrow().now_ms
        }

        /// Number of intervals that have not been cancelled
        pub(crate) fn live_timers(&self) -> usize {
            self.clock
                .borrow()
                .entries
                .iter()
                .filter(|entry| entry.live.get())
                .count()
        }

        /// Number of intervals ever scheduled on this clock
        pub(crate) fn scheduled_total(&self) -> usize {
            self.clock.borrow().scheduled_total
        }

        /// Move time forward, firing every due tick in chronological order.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.now_ms() + by.as_millis() as u64;

            loop {
                let due = {
                    let mut clock = self.clock.borrow_mut();
                    clock.entries.retain(|entry| entry.live.get());
                    clock
                        .entries
                        .iter_mut()
                        .filter(|entry| entry.next_due_ms <= target)
                        .min_by_key(|entry| entry.next_due_ms)
                        .map(|entry| {
                            let at = entry.next_due_ms;
                            entry.next_due_ms += entry.period_ms;
                            (at, entry.tick.clone(), entry.live.clone())
                        })
                };

                let Some((at, tick, live)) = due else {
                    break;
                };

                self.clock.borrow_mut().now_ms = at;
                if live.get() {
                    (&mut *tick.borrow_mut())();
                }
            }

            self.clock.borrow_mut().now_ms = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> ManualHandle {
            let period_ms = (period.as_millis() as u64).max(1);
            let live = Rc::new(Cell::new(true));

            let mut clock = self.clock.borrow_mut();
            let next_due_ms = clock.now_ms + period_ms;
            clock.entries.push(Entry {
                period_ms,
                next_due_ms,
                live: live.clone(),
                tick: Rc::new(RefCell::new(tick)),
            });
            clock.scheduled_total += 1;

            ManualHandle { live }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scheduler;
    use super::manual::ManualScheduler;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn test_tick_fires_once_per_period() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();

        let _handle = scheduler.every(
            Duration::from_millis(100),
            Box::new(move || counter.set(counter.get() + 1)),
        );

        scheduler.advance(Duration::from_millis(99));
        assert_eq!(count.get(), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);

        scheduler.advance(Duration::from_millis(350));
        assert_eq!(count.get(), 4);
        assert_eq!(scheduler.now_ms(), 450);
    }

    #[test]
    fn test_dropping_handle_cancels_tick() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();

        let handle = scheduler.every(
            Duration::from_millis(50),
            Box::new(move || counter.set(counter.get() + 1)),
        );
        assert_eq!(scheduler.live_timers(), 1);

        drop(handle);
        scheduler.advance(Duration::from_millis(500));

        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.live_timers(), 0);
    }

    #[test]
    fn test_ticks_interleave_in_time_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));

        let fast_log = log.clone();
        let _fast = scheduler.every(
            Duration::from_millis(30),
            Box::new(move || fast_log.borrow_mut().push("fast")),
        );
        let slow_log = log.clone();
        let _slow = scheduler.every(
            Duration::from_millis(70),
            Box::new(move || slow_log.borrow_mut().push("slow")),
        );

        scheduler.advance(Duration::from_millis(100));

        assert_eq!(*log.borrow(), vec!["fast", "fast", "slow", "fast"]);
    }
}
