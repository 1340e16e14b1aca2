//! Horse detail page

use dioxus::prelude::*;

use crate::api::GET_HORSE;
use crate::auth::use_auth;
use crate::components::{format_price, LoadingSpinner, SiteHeader};
use crate::hooks::current_path;
use crate::routes::Route;
use crate::state::use_favorites;
use crate::types::{GetHorseResponse, Horse};

/// Detail page for a single listing
#[component]
pub fn HorseDetail(id: String) -> Element {
    let horse = use_server_future(move || fetch_horse(id.clone()))?;
    let horse_value = horse.value();

    rsx! {
        div {
            class: "min-h-screen bg-stone-50",

            SiteHeader {}

            main {
                class: "max-w-4xl mx-auto px-4 py-8",

                Link {
                    to: Route::Home {},
                    class: "text-amber-700 hover:text-amber-800 text-sm mb-6 inline-block",
                    "\u{2190} Back to listings"
                }

                match horse_value() {
                    Some(Ok(Some(horse))) => rsx! {
                        HorseProfile { horse: horse.clone() }
                    },
                    Some(Ok(None)) => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-md p-12 text-center",
                            h3 { class: "text-lg font-medium text-gray-900 mb-2", "Listing not found" }
                            p { class: "text-gray-500", "This horse may have been sold or removed." }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Error loading listing: {err}"
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

#[derive(Props, Clone, PartialEq)]
struct HorseProfileProps {
    horse: Horse,
}

#[component]
fn HorseProfile(props: HorseProfileProps) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let favorites = use_favorites();

    let horse = &props.horse;
    let horse_id = horse.id.clone();
    let is_favorite = favorites.is_favorite(&horse.id);

    let handle_toggle = move |_| {
        if !auth.is_authenticated() {
            navigator.push(Route::Login {
                from: current_path(),
            });
            return;
        }
        let horse_id = horse_id.clone();
        spawn(async move {
            favorites.toggle(horse_id).await;
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md overflow-hidden",

            if let Some(image) = &horse.image_url {
                img {
                    src: "{image}",
                    alt: "{horse.name}",
                    class: "w-full aspect-[16/9] object-cover"
                }
            }

            div {
                class: "p-6",

                div {
                    class: "flex items-start justify-between mb-4",
                    div {
                        h1 { class: "text-3xl font-bold text-gray-900", "{horse.name}" }
                        p {
                            class: "text-gray-600 mt-1",
                            "{horse.breed} \u{2022} {horse.age_years} years"
                            if let Some(height) = &horse.height {
                                " \u{2022} {height}"
                            }
                        }
                    }
                    button {
                        class: if is_favorite {
                            "px-4 py-2 rounded-md bg-red-50 text-red-600 border border-red-200 hover:bg-red-100 transition-colors"
                        } else {
                            "px-4 py-2 rounded-md bg-gray-50 text-gray-600 border border-gray-200 hover:bg-gray-100 transition-colors"
                        },
                        onclick: handle_toggle,
                        if is_favorite { "\u{2665} Favorited" } else { "\u{2661} Favorite" }
                    }
                }

                p {
                    class: "text-2xl font-bold text-amber-700 mb-4",
                    "\u{20B9}{format_price(horse.price)}"
                }

                div {
                    class: "flex flex-wrap gap-4 text-sm text-gray-600 mb-6",
                    if let Some(location) = &horse.location {
                        span { "\u{1F4CD} {location}" }
                    }
                    if let Some(seller) = &horse.seller_name {
                        span { "Sold by {seller}" }
                    }
                    if let Some(created_at) = &horse.created_at {
                        span { class: "text-gray-400", "Listed {listed_ago(created_at)}" }
                    }
                }

                if let Some(description) = &horse.description {
                    p { class: "text-gray-700 leading-relaxed", "{description}" }
                }
            }
        }
    }
}

fn listed_ago(date_string: &str) -> String {
    if let Ok(date) = chrono::DateTime::parse_from_rfc3339(date_string) {
        let now = chrono::Utc::now();
        let diff = now.signed_duration_since(date);

        let days = diff.num_days();
        if days == 0 {
            "today".to_string()
        } else if days == 1 {
            "yesterday".to_string()
        } else if days < 7 {
            format!("{} days ago", days)
        } else if days < 30 {
            format!("{} weeks ago", days / 7)
        } else {
            format!("{} months ago", days / 30)
        }
    } else {
        "recently".to_string()
    }
}

#[server]
async fn fetch_horse(id: String) -> Result<Option<Horse>, ServerFnError> {
    let client = crate::api::server_client();

    #[derive(serde::Serialize)]
    struct Variables {
        id: String,
    }

    let response: GetHorseResponse = client
        .query(GET_HORSE, Some(Variables { id }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.horse)
}
