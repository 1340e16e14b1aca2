//! Signed-in pages

mod favorites;
mod seller_dashboard;

pub use favorites::*;
pub use seller_dashboard::*;
