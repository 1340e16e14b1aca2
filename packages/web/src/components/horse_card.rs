//! Horse listing card

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::Horse;

/// Shown when a listing has no photos.
const PLACEHOLDER_IMAGE: &str = "/images/placeholder-horse.jpg";

/// Props for HorseCard
#[derive(Props, Clone, PartialEq)]
pub struct HorseCardProps {
    pub horse: Horse,
    pub is_favorite: bool,
    pub on_toggle_favorite: EventHandler<String>,
}

/// Card for a single listing. The whole card links to the detail page; the
/// heart button toggles the favorite without following the link.
#[component]
pub fn HorseCard(props: HorseCardProps) -> Element {
    let horse = &props.horse;

    let image = horse
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let location = horse
        .location
        .clone()
        .unwrap_or_else(|| "Location N/A".to_string());
    let horse_id = horse.id.clone();

    rsx! {
        Link {
            to: Route::HorseDetail { id: horse.id.clone() },
            class: "group bg-white rounded-lg shadow-md overflow-hidden hover:shadow-xl transition-shadow",

            div {
                class: "relative aspect-[4/3] overflow-hidden",
                img {
                    src: "{image}",
                    alt: "{horse.name}",
                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                    loading: "lazy"
                }

                // Favorite heart
                button {
                    class: "absolute top-2 right-2 p-2 bg-white/90 rounded-full hover:bg-white transition-colors",
                    onclick: move |evt| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        props.on_toggle_favorite.call(horse_id.clone());
                    },
                    svg {
                        class: if props.is_favorite {
                            "w-5 h-5 fill-red-500 text-red-500"
                        } else {
                            "w-5 h-5 text-gray-600"
                        },
                        fill: if props.is_favorite { "currentColor" } else { "none" },
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z"
                        }
                    }
                }

                // Name + breed overlay
                div {
                    class: "absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/60 to-transparent p-4",
                    p { class: "text-white font-semibold", "{horse.name}" }
                    p {
                        class: "text-white/90 text-sm",
                        "{horse.breed} \u{2022} {horse.age_years} years"
                    }
                }
            }

            div {
                class: "p-4",
                div {
                    class: "flex justify-between items-center",
                    p {
                        class: "text-amber-700 font-bold",
                        "\u{20B9}{format_price(horse.price)}"
                    }
                    p { class: "text-sm text-gray-500", "{location}" }
                }
            }
        }
    }
}

/// Skeleton loader for listing cards
#[component]
pub fn HorseCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md overflow-hidden animate-pulse",
            div { class: "aspect-[4/3] bg-gray-200" }
            div {
                class: "p-4",
                div {
                    class: "flex justify-between items-center",
                    div { class: "h-5 w-24 bg-gray-200 rounded" }
                    div { class: "h-4 w-16 bg-gray-200 rounded" }
                }
            }
        }
    }
}

/// Group digits in threes for display.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
