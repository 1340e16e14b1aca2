//! Seller dashboard page

use dioxus::prelude::*;

use crate::api::GET_SELLER_HORSES;
use crate::components::{format_price, LoadingSpinner, RequireRole, SiteHeader};
use crate::types::{GetSellerHorsesResponse, Horse, Role};

/// Seller dashboard, restricted to the seller role
#[component]
pub fn SellerDashboard() -> Element {
    rsx! {
        RequireRole {
            role: Some(Role::Seller),
            SellerListings {}
        }
    }
}

#[component]
fn SellerListings() -> Element {
    let horses = use_server_future(fetch_seller_horses)?;
    let horses_value = horses.value();

    rsx! {
        div {
            class: "min-h-screen bg-stone-50",

            SiteHeader {}

            main {
                class: "max-w-4xl mx-auto px-4 py-8",

                h1 { class: "text-2xl font-bold text-gray-900 mb-6", "My Stable" }

                match horses_value() {
                    Some(Ok(horses)) if horses.is_empty() => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                            p { class: "text-gray-500", "You have no active listings." }
                        }
                    },
                    Some(Ok(horses)) => rsx! {
                        p {
                            class: "text-sm text-gray-500 mb-4",
                            "{horses.len()} active listing"
                            if horses.len() != 1 { "s" }
                        }
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                            for horse in horses.iter() {
                                ListingRow { key: "{horse.id}", horse: horse.clone() }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Error loading listings: {err}"
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
struct ListingRowProps {
    horse: Horse,
}

#[component]
fn ListingRow(props: ListingRowProps) -> Element {
    let horse = &props.horse;

    rsx! {
        div {
            class: "p-4 hover:bg-gray-50 flex items-center justify-between",
            div {
                class: "min-w-0",
                h3 { class: "text-sm font-medium text-gray-900 truncate", "{horse.name}" }
                p {
                    class: "text-sm text-gray-500",
                    "{horse.breed} \u{2022} {horse.age_years} years"
                }
            }
            div {
                class: "text-right ml-4",
                p { class: "text-sm font-semibold text-amber-700", "\u{20B9}{format_price(horse.price)}" }
                if let Some(location) = &horse.location {
                    p { class: "text-xs text-gray-400", "{location}" }
                }
            }
        }
    }
}

/// Fetch the signed-in seller's own listings
#[server]
async fn fetch_seller_horses() -> Result<Vec<Horse>, ServerFnError> {
    let Some(user) = crate::auth::get_current_user().await? else {
        return Ok(Vec::new());
    };

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        seller_id: uuid::Uuid,
    }

    let client = crate::api::server_client();
    let response: GetSellerHorsesResponse = client
        .query(
            GET_SELLER_HORSES,
            Some(Variables {
                seller_id: user.user_id,
            }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.seller_horses)
}
