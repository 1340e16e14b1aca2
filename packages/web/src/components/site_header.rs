//! Site-wide navigation header

use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::routes::Route;
use crate::state::use_favorites;
use crate::types::Role;

/// Top navigation bar with auth-aware links.
#[component]
pub fn SiteHeader() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let favorites = use_favorites();

    let user = auth.user.read().clone();

    let handle_logout = move |_| {
        spawn(async move {
            if let Err(err) = logout().await {
                tracing::warn!("logout failed: {err}");
            }
            auth.clear();
            navigator.push(Route::Home {});
        });
    };

    rsx! {
        header {
            class: "bg-white border-b border-gray-100",
            div {
                class: "max-w-7xl mx-auto px-4 py-4 flex items-center justify-between",

                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-amber-800",
                    "EquiMarket"
                }

                nav {
                    class: "flex items-center gap-6 text-sm",
                    Link {
                        to: Route::Home {},
                        class: "text-gray-600 hover:text-gray-900",
                        "Browse"
                    }

                    if let Some(user) = user {
                        Link {
                            to: Route::Favorites {},
                            class: "text-gray-600 hover:text-gray-900",
                            "Favorites"
                            if favorites.count() > 0 {
                                span {
                                    class: "ml-1 px-2 py-0.5 rounded-full text-xs bg-amber-100 text-amber-800",
                                    "{favorites.count()}"
                                }
                            }
                        }
                        if user.role == Role::Seller {
                            Link {
                                to: Route::SellerDashboard {},
                                class: "text-gray-600 hover:text-gray-900",
                                "My Stable"
                            }
                        }
                        span { class: "text-gray-400", "{user.email}" }
                        button {
                            class: "px-3 py-1.5 bg-gray-100 text-gray-700 rounded-md hover:bg-gray-200 transition-colors",
                            onclick: handle_logout,
                            "Sign Out"
                        }
                    } else {
                        Link {
                            to: Route::Login { from: String::new() },
                            class: "px-4 py-1.5 bg-amber-700 text-white rounded-md hover:bg-amber-800 transition-colors",
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}
