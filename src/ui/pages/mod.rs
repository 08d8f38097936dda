//! Application pages module
//!
//! - Landing page (home)
//! - Features page
//! - Not found page

mod features;
mod landing;
mod not_found;

pub use features::FeaturesPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
