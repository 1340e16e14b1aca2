//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;
use crate::state::FavoritesProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Auth context wraps the app; the favorites store tracks the
        // signed-in user, so it sits inside
        AuthProvider {
            FavoritesProvider {
                Router::<Route> {}
            }
        }
    }
}
