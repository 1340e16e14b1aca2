//! Favorites page

use dioxus::prelude::*;

use crate::api::GET_MY_FAVORITE_HORSES;
use crate::components::{HorseCard, LoadingSpinner, RequireRole, SiteHeader};
use crate::routes::Route;
use crate::state::use_favorites;
use crate::types::{GetMyFavoriteHorsesResponse, Horse};

/// Favorites page, for any signed-in viewer
#[component]
pub fn Favorites() -> Element {
    rsx! {
        RequireRole {
            FavoritesList {}
        }
    }
}

#[component]
fn FavoritesList() -> Element {
    let favorites = use_favorites();

    let horses = use_server_future(fetch_favorite_horses)?;
    let horses_value = horses.value();

    let on_toggle_favorite = move |horse_id: String| {
        spawn(async move {
            favorites.toggle(horse_id).await;
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-stone-50",

            SiteHeader {}

            main {
                class: "max-w-7xl mx-auto px-4 py-8",

                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "My Favorites" }

                match horses_value() {
                    Some(Ok(horses)) if horses.is_empty() => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                            p { class: "text-gray-500 mb-4", "You haven't favorited any horses yet." }
                            Link {
                                to: Route::Home {},
                                class: "inline-block px-6 py-3 bg-amber-700 text-white rounded-md hover:bg-amber-800 transition-colors",
                                "Browse Horses"
                            }
                        }
                    },
                    Some(Ok(horses)) => rsx! {
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for horse in horses {
                                HorseCard {
                                    key: "{horse.id}",
                                    horse: horse.clone(),
                                    is_favorite: favorites.is_favorite(&horse.id),
                                    on_toggle_favorite: on_toggle_favorite,
                                }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Error loading favorites: {err}"
                        }
                    },
                    None => rsx! {
                        div { class: "py-16", LoadingSpinner {} }
                    }
                }
            }
        }
    }
}

/// Fetch the viewer's favorited listings in full
#[server]
async fn fetch_favorite_horses() -> Result<Vec<Horse>, ServerFnError> {
    let Some(token) = crate::auth::session_token().await? else {
        return Ok(Vec::new());
    };

    let client = crate::api::server_client().with_token(token);
    let response: GetMyFavoriteHorsesResponse = client
        .query(GET_MY_FAVORITE_HORSES, None::<()>)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.my_favorite_horses)
}
