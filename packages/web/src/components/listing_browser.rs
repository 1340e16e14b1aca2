//! Featured-listings browser: search, breed/price filters, grid, pagination

use dioxus::prelude::*;

use super::{HorseCard, LoadingSpinner};
use crate::auth::use_auth;
use crate::hooks::{current_path, use_debounced, QUERY_DEBOUNCE_MS};
use crate::routes::Route;
use crate::state::{
    filter_listings, paginate, total_pages, use_favorites, BrowseIntent, BrowseState, PriceBand,
    PAGE_SIZE,
};
use crate::types::Horse;

/// Props for ListingBrowser
#[derive(Props, Clone, PartialEq)]
pub struct ListingBrowserProps {
    pub horses: Vec<Horse>,
    pub breeds: Vec<String>,
}

/// Featured listings with search, breed and price filters, favorites and
/// pagination. The visible page is a pure derivation of the listing array
/// and the browse state, recomputed on each state change; the free-text
/// query is debounced upstream.
#[component]
pub fn ListingBrowser(props: ListingBrowserProps) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let favorites = use_favorites();

    let mut search_input = use_signal(String::new);
    let debounced_query = use_debounced(search_input, QUERY_DEBOUNCE_MS);
    let browse = use_signal(BrowseState::default);

    let state = browse.read().clone();

    // Derivation pipeline: filter, then slice the current page.
    let filtered = filter_listings(&props.horses, &state.filter);
    let page_count = total_pages(filtered.len(), PAGE_SIZE);
    let page_horses = paginate(&filtered, state.page, PAGE_SIZE);

    let total_count = props.horses.len();
    let filtered_count = filtered.len();
    let breed_value = state.filter.breed.clone().unwrap_or_default();

    // Synchronous intent dispatch; page moves clamp against the page count
    // as of this render.
    let dispatch = move |intent: BrowseIntent| {
        let mut browse = browse;
        browse.write().apply(intent, page_count);
    };

    // Feed the debounced query into the filter.
    use_effect(move || {
        let query = debounced_query();
        dispatch(BrowseIntent::QueryChanged(query));
    });

    let on_toggle_favorite = move |horse_id: String| {
        // Signed-out viewers go to login, keeping the path they came from.
        if !auth.is_authenticated() {
            navigator.push(Route::Login {
                from: current_path(),
            });
            return;
        }

        spawn(async move {
            favorites.toggle(horse_id).await;
        });
    };

    rsx! {
        section {
            class: "py-16 bg-white",
            div {
                class: "max-w-7xl mx-auto px-4",

                // Section header
                div {
                    class: "flex justify-between items-center mb-8",
                    div {
                        h2 { class: "text-2xl font-bold text-gray-900", "Featured Horses" }
                        p {
                            class: "text-gray-500 mt-1",
                            "Discover our handpicked selection of premium horses"
                        }
                    }
                    div {
                        class: "text-sm text-gray-600",
                        "Showing {filtered_count} of {total_count} horses"
                    }
                }

                // Filters
                div {
                    class: "flex flex-col md:flex-row gap-4 mb-8",

                    // Search
                    div {
                        class: "relative flex-1",
                        input {
                            r#type: "text",
                            placeholder: "Search horses...",
                            value: "{search_input}",
                            oninput: move |e| search_input.set(e.value()),
                            class: "w-full pl-10 pr-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:border-amber-600"
                        }
                        svg {
                            class: "absolute left-3 top-2.5 h-5 w-5 text-gray-400",
                            fill: "none",
                            stroke: "currentColor",
                            view_box: "0 0 24 24",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                            }
                        }
                    }

                    // Breed filter
                    select {
                        value: "{breed_value}",
                        onchange: move |e| {
                            let value = e.value();
                            let breed = if value.is_empty() { None } else { Some(value) };
                            dispatch(BrowseIntent::BreedSelected(breed));
                        },
                        class: "px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:border-amber-600 min-w-[200px]",
                        option { value: "", "All Breeds" }
                        for breed in props.breeds.clone() {
                            option { key: "{breed}", value: "{breed}", "{breed}" }
                        }
                    }

                    // Price filter
                    select {
                        value: "{state.filter.price.id()}",
                        onchange: move |e| {
                            dispatch(BrowseIntent::PriceSelected(PriceBand::from_id(&e.value())));
                        },
                        class: "px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:border-amber-600 min-w-[200px]",
                        for band in PriceBand::variants() {
                            option { key: "{band.id()}", value: "{band.id()}", "{band.label()}" }
                        }
                    }
                }

                // Grid
                if favorites.is_loading() {
                    div {
                        class: "flex justify-center items-center py-12",
                        LoadingSpinner {}
                    }
                } else if page_horses.is_empty() {
                    div {
                        class: "text-center py-16",
                        h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No horses found" }
                        p {
                            class: "text-gray-500 mb-6 max-w-md mx-auto",
                            "Try adjusting your search or filters."
                        }
                        button {
                            class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
                            onclick: move |_| {
                                search_input.set(String::new());
                                dispatch(BrowseIntent::FiltersCleared);
                            },
                            "Clear Filters"
                        }
                    }
                } else {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for horse in page_horses {
                            HorseCard {
                                key: "{horse.id}",
                                horse: horse.clone(),
                                is_favorite: favorites.is_favorite(&horse.id),
                                on_toggle_favorite: on_toggle_favorite,
                            }
                        }
                    }

                    // Pagination controls
                    if page_count > 1 {
                        div {
                            class: "mt-8 flex justify-center gap-2",
                            button {
                                class: "px-4 py-2 border border-amber-700 rounded-md disabled:opacity-50 disabled:cursor-not-allowed hover:bg-amber-700 hover:text-white transition-colors",
                                disabled: state.page == 1,
                                onclick: move |_| dispatch(BrowseIntent::PrevPage),
                                "Previous"
                            }
                            div {
                                class: "flex items-center gap-2",
                                for number in 1..=page_count {
                                    button {
                                        key: "{number}",
                                        class: if state.page == number {
                                            "w-10 h-10 rounded-md bg-amber-700 text-white transition-colors"
                                        } else {
                                            "w-10 h-10 rounded-md border border-amber-700 hover:bg-amber-700 hover:text-white transition-colors"
                                        },
                                        onclick: move |_| dispatch(BrowseIntent::PageSelected(number)),
                                        "{number}"
                                    }
                                }
                            }
                            button {
                                class: "px-4 py-2 border border-amber-700 rounded-md disabled:opacity-50 disabled:cursor-not-allowed hover:bg-amber-700 hover:text-white transition-colors",
                                disabled: state.page == page_count,
                                onclick: move |_| dispatch(BrowseIntent::NextPage),
                                "Next"
                            }
                        }
                    }
                }
            }
        }
    }
}
