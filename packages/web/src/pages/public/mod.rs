//! Public-facing pages

mod home;
mod horse_detail;
mod login;

pub use home::*;
pub use horse_detail::*;
pub use login::*;
