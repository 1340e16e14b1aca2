//! GraphQL client for communicating with the marketplace API

mod client;
mod mutations;
mod queries;

pub use client::*;
pub use mutations::*;
pub use queries::*;
