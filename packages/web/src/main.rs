//! EquiMarket - Dioxus Fullstack Web Application
//!
//! Fullstack SSR web frontend for the EquiMarket horse marketplace. It
//! connects to the existing GraphQL API for data.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod hooks;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
