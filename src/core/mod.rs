//! Platform-independent core of the landing page
//!
//! Motion state machines, their scheduling and observation capabilities,
//! marketing copy and server configuration. Nothing in here touches the DOM;
//! browser bindings are compiled in with the `hydrate` feature.

pub mod classes;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod cycle;
pub mod heading;
pub mod reveal;
pub mod timer;


pub use classes::merge_classes;
pub use cycle::{CycleInterval, CycleTimer, HeadlineCycle};
pub use heading::HeadingLevel;
pub use reveal::{RevealError, RevealHandle, RevealOptions, RevealPhase};
pub use timer::Scheduler;
