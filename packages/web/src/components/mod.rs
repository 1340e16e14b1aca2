//! Reusable UI components

mod horse_card;
mod listing_browser;
mod loading;
mod route_guard;
mod site_header;

pub use horse_card::*;
pub use listing_browser::*;
pub use loading::*;
pub use route_guard::*;
pub use site_header::*;
