//! Common reusable UI components
//!
//! Building blocks shared by the pages: buttons, cards, form inputs,
//! typography and layout wrappers. Each component exposes its class
//! computation as a plain function so it can be tested without a DOM.

pub mod button;
pub mod card;
pub mod input;
pub mod layout;
pub mod typography;

pub use button::{Button, ButtonSize, ButtonType, ButtonVariant};
pub use card::{Card, CardVariant};
pub use input::Input;
pub use layout::{Container, Grid, GridColumns, Section, SectionBackground, Size};
pub use typography::{Heading, Label, Paragraph, ParagraphSize};
