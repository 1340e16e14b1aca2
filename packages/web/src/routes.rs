//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::account::{Favorites, SellerDashboard};
use crate::pages::public::{Home, HorseDetail, Login};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    #[route("/horses/:id")]
    HorseDetail { id: String },

    // `from` carries the path the visitor came from, so login can return them
    #[route("/login?:from")]
    Login { from: String },

    // Signed-in routes (guarded in the page components)
    #[route("/favorites")]
    Favorites {},

    #[route("/seller")]
    SellerDashboard {},
}
