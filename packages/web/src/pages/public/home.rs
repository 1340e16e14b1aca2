//! Home page component

use dioxus::prelude::*;

use crate::api::GET_FEATURED_HORSES;
use crate::components::{HorseCardSkeleton, ListingBrowser, SiteHeader};
use crate::state::available_breeds;
use crate::types::{GetFeaturedHorsesResponse, Horse};

/// Home page - hero plus the featured-listings browser
#[component]
pub fn Home() -> Element {
    // Fetch listings on server and client
    let horses = use_server_future(fetch_featured_horses)?;
    let horses_value = horses.value();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-amber-50 to-white",

            SiteHeader {}

            // Hero
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 py-12 text-center",
                    h1 {
                        class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                        "Find Your Next Horse"
                    }
                    p {
                        class: "text-lg text-gray-600 max-w-2xl mx-auto",
                        "Browse premium horses from trusted sellers across the country."
                    }
                }
            }

            match horses_value() {
                Some(Ok(horses)) => rsx! {
                    ListingBrowser {
                        breeds: available_breeds(&horses),
                        horses: horses,
                    }
                },
                Some(Err(err)) => rsx! {
                    div {
                        class: "max-w-7xl mx-auto px-4 py-16 text-center",
                        h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load listings" }
                        p { class: "text-gray-500", "{err}" }
                    }
                },
                None => rsx! {
                    div {
                        class: "max-w-7xl mx-auto px-4 py-16",
                        div {
                            class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                            for i in 0..6 {
                                HorseCardSkeleton { key: "{i}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Server function to fetch the featured listings
#[server]
async fn fetch_featured_horses() -> Result<Vec<Horse>, ServerFnError> {
    let client = crate::api::server_client();

    #[derive(serde::Serialize)]
    struct Variables {
        limit: i32,
    }

    let response: GetFeaturedHorsesResponse = client
        .query(GET_FEATURED_HORSES, Some(Variables { limit: 100 }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.featured_horses)
}
