//! One-shot reveal on scroll
//!
//! Content wrapped in a reveal starts hidden (transparent and pushed down) and
//! settles into place the first time it scrolls into view. The reveal is a
//! latch: once visible, the content never hides again.
//!
//! # Overview
//!
//! - [`RevealOptions`]: threshold, root margin and animation timing, sanitized on construction
//! - [`RootMargin`]: CSS margin shorthand adjusting the viewport box
//! - [`VisibilityObserver`]: capability reporting intersection changes for a target
//! - [`RevealHandle`]: mounted reveal; owns the subscription and the latch
//!
//! When no observer is available (or it fails to start) the reveal fails open
//! and the content is shown right away.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Default fraction of the element that must be visible (10%)
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Default reveal animation length in seconds
pub const DEFAULT_REVEAL_DURATION_SECS: f64 = 0.6;

/// Default vertical offset of the hidden state in pixels
pub const DEFAULT_REVEAL_OFFSET_PX: f64 = 40.0;

/// Browsers report ratios with float noise right at the threshold
const RATIO_TOLERANCE: f64 = 1e-3;

/// Errors raised while configuring or starting a reveal
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevealError {
    #[error("Root margin is empty")]
    EmptyMargin,

    #[error("Root margin accepts at most 4 values, got {0}")]
    TooManyMarginValues(usize),

    #[error("Invalid root margin value `{0}` (expected px or %)")]
    InvalidMargin(String),

    #[error("Visibility observation is not supported in this environment")]
    Unsupported,

    #[error("Visibility observer setup failed: {0}")]
    Setup(String),
}

/// One side of a root margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl FromStr for MarginLength {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RevealError::InvalidMargin(s.to_string());

        let (number, build): (&str, fn(f64) -> MarginLength) =
            if let Some(number) = s.strip_suffix("px") {
                (number, MarginLength::Px)
            } else if let Some(number) = s.strip_suffix('%') {
                (number, MarginLength::Percent)
            } else {
                // CSS allows a unitless zero
                (s, MarginLength::Px)
            };

        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        if number == s && value != 0.0 {
            return Err(invalid());
        }

        Ok(build(value))
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(value) => write!(f, "{value}px"),
            MarginLength::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// Margin around the viewport used for the intersection check
///
/// Parsed from the CSS shorthand with 1 to 4 values. Negative values shrink
/// the viewport box, positive values grow it.
///
/// # Example
/// ```
/// # use featurelist_landing::core::reveal::{MarginLength, RootMargin};
/// let margin: RootMargin = "0px 0px -50px".parse().unwrap();
/// assert_eq!(margin.bottom, MarginLength::Px(-50.0));
/// assert_eq!(margin.to_string(), "0px 0px -50px 0px");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    /// Parse `s`, falling back to no margin when it is malformed.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: RevealError| {
            tracing::warn!(margin = s, error = %err, "invalid root margin, using 0px");
            Self::default()
        })
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginLength::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

impl FromStr for RootMargin {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(MarginLength::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [] => Err(RevealError::EmptyMargin),
            [all] => Ok(Self {
                top: *all,
                right: *all,
                bottom: *all,
                left: *all,
            }),
            [vertical, horizontal] => Ok(Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            more => Err(RevealError::TooManyMarginValues(more.len())),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Visibility report for an observed element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    /// Fraction of the element inside the (margin-adjusted) viewport
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Reveal configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    root_margin: RootMargin,
    duration_secs: f64,
    delay_secs: f64,
    offset_px: f64,
}

impl RevealOptions {
    /// Build options from raw component props. Out-of-range values are
    /// clamped or replaced by their defaults.
    pub fn new(threshold: f64, root_margin: &str, duration_secs: f64) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
            root_margin: RootMargin::parse_or_default(root_margin),
            duration_secs: sanitize_duration(duration_secs),
            delay_secs: 0.0,
            offset_px: DEFAULT_REVEAL_OFFSET_PX,
        }
    }

    /// Delay before the reveal animation starts, for staggered lists
    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = if delay_secs.is_finite() && delay_secs > 0.0 {
            delay_secs
        } else {
            0.0
        };
        self
    }

    /// Vertical distance the content travels while revealing
    pub fn with_offset(mut self, offset_px: f64) -> Self {
        self.offset_px = if offset_px.is_finite() {
            offset_px
        } else {
            DEFAULT_REVEAL_OFFSET_PX
        };
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> RootMargin {
        self.root_margin
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn delay_secs(&self) -> f64 {
        self.delay_secs
    }

    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    /// Whether `entry` is visible enough to trigger the reveal
    pub fn is_satisfied_by(&self, entry: IntersectionEntry) -> bool {
        entry.is_intersecting && entry.ratio + RATIO_TOLERANCE >= self.threshold
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD, "0px", DEFAULT_REVEAL_DURATION_SECS)
    }
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        tracing::warn!("reveal threshold is NaN, using default");
        DEFAULT_REVEAL_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

fn sanitize_duration(duration_secs: f64) -> f64 {
    if duration_secs.is_finite() && duration_secs > 0.0 {
        duration_secs
    } else {
        tracing::warn!(duration_secs, "reveal duration must be positive, using default");
        DEFAULT_REVEAL_DURATION_SECS
    }
}

/// Visual state of a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Visible,
}

impl RevealPhase {
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            RevealPhase::Visible
        } else {
            RevealPhase::Hidden
        }
    }
}

/// Inline style for the reveal wrapper in the given phase
pub fn reveal_style(phase: RevealPhase, options: &RevealOptions) -> String {
    let (opacity, offset) = match phase {
        RevealPhase::Hidden => (0, options.offset_px()),
        RevealPhase::Visible => (1, 0.0),
    };
    let timing = format!(
        "{}s cubic-bezier(0.25, 0.46, 0.45, 0.94) {}s",
        options.duration_secs(),
        options.delay_secs()
    );

    format!(
        "opacity: {opacity}; transform: translateY({offset}px); transition: opacity {timing}, transform {timing}"
    )
}

/// A live observation of one target
///
/// `unobserve` stops delivery and may be called from inside the observer's own
/// callback. Dropping the subscription releases the underlying observer.
pub trait Subscription {
    fn unobserve(&self);
}

/// Capability for watching an element's visibility
pub trait VisibilityObserver {
    type Target;
    type Subscription: Subscription + 'static;

    fn observe(
        &self,
        target: &Self::Target,
        options: &RevealOptions,
        on_entry: Box<dyn FnMut(IntersectionEntry)>,
    ) -> Result<Self::Subscription, RevealError>;
}

#[derive(Default)]
struct RevealState {
    revealed: Cell<bool>,
    observing: Cell<bool>,
    released: Cell<bool>,
}

type RevealCallback = Rc<RefCell<Box<dyn FnMut()>>>;

/// Latch the reveal and run the callback, once.
fn fire(state: &RevealState, on_reveal: &RevealCallback) {
    if state.revealed.replace(true) {
        return;
    }
    (&mut *on_reveal.borrow_mut())();
}

/// Mounted reveal
///
/// Holds the visibility subscription until the first qualifying entry or
/// until the handle is released or dropped, whichever comes first.
pub struct RevealHandle<S: Subscription> {
    state: Rc<RevealState>,
    subscription: Rc<RefCell<Option<S>>>,
}

impl<S: Subscription + 'static> RevealHandle<S> {
    /// Start watching `target`. `on_reveal` runs at most once.
    pub fn start<O>(
        observer: Option<&O>,
        target: &O::Target,
        options: &RevealOptions,
        on_reveal: impl FnMut() + 'static,
    ) -> Self
    where
        O: VisibilityObserver<Subscription = S>,
    {
        let state = Rc::new(RevealState::default());
        let subscription: Rc<RefCell<Option<S>>> = Rc::new(RefCell::new(None));
        let on_reveal: RevealCallback = Rc::new(RefCell::new(Box::new(on_reveal)));

        let Some(observer) = observer else {
            tracing::debug!("no visibility observer, revealing immediately");
            fire(&state, &on_reveal);
            return Self {
                state,
                subscription,
            };
        };

        let callback = {
            let state = state.clone();
            let on_reveal = on_reveal.clone();
            let slot = Rc::downgrade(&subscription);
            let options = options.clone();

            Box::new(move |entry: IntersectionEntry| {
                if state.released.get() || state.revealed.get() {
                    return;
                }
                if !options.is_satisfied_by(entry) {
                    return;
                }

                fire(&state, &on_reveal);

                // Empty while `observe` is still running; handled after it returns
                if let Some(slot) = slot.upgrade() {
                    if let Ok(slot) = slot.try_borrow() {
                        if let Some(subscription) = slot.as_ref() {
                            if state.observing.replace(false) {
                                subscription.unobserve();
                            }
                        }
                    }
                }
            })
        };

        match observer.observe(target, options, callback) {
            Ok(active) => {
                if state.revealed.get() {
                    active.unobserve();
                } else {
                    state.observing.set(true);
                }
                *subscription.borrow_mut() = Some(active);
            }
            Err(err) => {
                tracing::warn!(error = %err, "visibility observer unavailable, revealing immediately");
                fire(&state, &on_reveal);
            }
        }

        Self {
            state,
            subscription,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.state.revealed.get()
    }

    /// Whether visibility reports are still being delivered
    pub fn is_observing(&self) -> bool {
        self.state.observing.get()
    }

}

impl<S: Subscription> RevealHandle<S> {
    /// Stop observing and release the subscription. Idempotent.
    pub fn release(&mut self) {
        self.state.released.set(true);
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            if self.state.observing.replace(false) {
                subscription.unobserve();
            }
        }
    }
}

impl<S: Subscription> Drop for RevealHandle<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserObserver, BrowserSubscription};

#[cfg(feature = "hydrate")]
mod browser {
    use super::{IntersectionEntry, RevealError, RevealOptions, Subscription, VisibilityObserver};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    type EntryClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// `IntersectionObserver` binding
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserObserver;

    fn is_supported() -> bool {
        web_sys::window()
            .and_then(|window| js_sys::Reflect::has(&window, &"IntersectionObserver".into()).ok())
            .unwrap_or(false)
    }

    pub struct BrowserSubscription {
        observer: IntersectionObserver,
        target: Element,
        _callback: EntryClosure,
    }

    impl Subscription for BrowserSubscription {
        fn unobserve(&self) {
            self.observer.unobserve(&self.target);
        }
    }

    impl Drop for BrowserSubscription {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    impl VisibilityObserver for BrowserObserver {
        type Target = Element;
        type Subscription = BrowserSubscription;

        fn observe(
            &self,
            target: &Element,
            options: &RevealOptions,
            mut on_entry: Box<dyn FnMut(IntersectionEntry)>,
        ) -> Result<BrowserSubscription, RevealError> {
            if !is_supported() {
                return Err(RevealError::Unsupported);
            }

            let callback: EntryClosure = Closure::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                            on_entry(IntersectionEntry {
                                is_intersecting: entry.is_intersecting(),
                                ratio: entry.intersection_ratio(),
                            });
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&options.threshold().into());
            init.set_root_margin(&options.root_margin().to_string());

            let observer = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            )
            .map_err(|err| RevealError::Setup(format!("{err:?}")))?;

            observer.observe(target);

            Ok(BrowserSubscription {
                observer,
                target: target.clone(),
                _callback: callback,
            })
        }
    }
}

/// Scripted observer for tests
#[cfg(test)]
pub(crate) mod manual {
    use super::{IntersectionEntry, RevealError, RevealOptions, Subscription, VisibilityObserver};
    use std::cell::RefCell;
    use std::rc::Rc;

    type EntryCallback = Rc<RefCell<Box<dyn FnMut(IntersectionEntry)>>>;

    #[derive(Default)]
    struct Log {
        callback: Option<EntryCallback>,
        observing: bool,
        observe_calls: usize,
        unobserve_calls: usize,
        released: bool,
        last_options: Option<RevealOptions>,
    }

    /// Observer whose entries are pushed by the test
    #[derive(Clone, Default)]
    pub(crate) struct ManualObserver {
        log: Rc<RefCell<Log>>,
        fail_with: Option<RevealError>,
        on_observe: Option<IntersectionEntry>,
    }

    pub(crate) struct ManualSubscription {
        log: Rc<RefCell<Log>>,
    }

    impl ManualObserver {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Observer whose setup always fails
        pub(crate) fn failing() -> Self {
            Self {
                fail_with: Some(RevealError::Setup("observer constructor threw".to_string())),
                ..Self::default()
            }
        }

        /// Observer running where the platform has no intersection support
        pub(crate) fn unsupported() -> Self {
            Self {
                fail_with: Some(RevealError::Unsupported),
                ..Self::default()
            }
        }

        /// Observer that reports `entry` synchronously from inside `observe`
        pub(crate) fn reporting_on_observe(entry: IntersectionEntry) -> Self {
            Self {
                on_observe: Some(entry),
                ..Self::default()
            }
        }

        /// Deliver an entry the way a platform would: only while observing
        pub(crate) fn emit(&self, entry: IntersectionEntry) {
            if self.log.borrow().observing {
                self.emit_unchecked(entry);
            }
        }

        /// Deliver an entry even after `unobserve`, like a queued platform callback
        pub(crate) fn emit_unchecked(&self, entry: IntersectionEntry) {
            let callback = self.log.borrow().callback.clone();
            if let Some(callback) = callback {
                (&mut *callback.borrow_mut())(entry);
            }
        }

        pub(crate) fn is_observing(&self) -> bool {
            self.log.borrow().observing
        }

        pub(crate) fn observe_calls(&self) -> usize {
            self.log.borrow().observe_calls
        }

        pub(crate) fn unobserve_calls(&self) -> usize {
            self.log.borrow().unobserve_calls
        }

        pub(crate) fn was_released(&self) -> bool {
            self.log.borrow().released
        }

        pub(crate) fn last_options(&self) -> Option<RevealOptions> {
            self.log.borrow().last_options.clone()
        }
    }

    impl Subscription for ManualSubscription {
        fn unobserve(&self) {
            let mut log = self.log.borrow_mut();
            log.observing = false;
            log.unobserve_calls += 1;
        }
    }

    impl Drop for ManualSubscription {
        fn drop(&mut self) {
            let mut log = self.log.borrow_mut();
            log.observing = false;
            log.released = true;
            log.callback = None;
        }
    }

    impl VisibilityObserver for ManualObserver {
        type Target = ();
        type Subscription = ManualSubscription;

        fn observe(
            &self,
            _target: &(),
            options: &RevealOptions,
            on_entry: Box<dyn FnMut(IntersectionEntry)>,
        ) -> Result<ManualSubscription, RevealError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }

            {
                let mut log = self.log.borrow_mut();
                log.callback = Some(Rc::new(RefCell::new(on_entry)));
                log.observing = true;
                log.observe_calls += 1;
                log.last_options = Some(options.clone());
            }

            if let Some(entry) = self.on_observe {
                self.emit(entry);
            }

            Ok(ManualSubscription {
                log: self.log.clone(),
            })
        }
    }
}
