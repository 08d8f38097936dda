pub mod common;
pub mod icon;
pub mod landing;
pub mod motion;
pub mod pages;

pub use icon::{Icon, icons};
pub use motion::{CyclingText, MotionStyles, ViewportReveal};
