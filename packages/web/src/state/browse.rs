//! Browse state for the listing grid.
//!
//! Filtering and pagination are pure synchronous recomputation over the
//! listing array; the UI dispatches [`BrowseIntent`] values into
//! [`BrowseState::apply`] and re-derives the visible page from the result.

use std::collections::HashSet;

use crate::types::Horse;

/// Listings shown per page.
pub const PAGE_SIZE: usize = 12;

/// Fixed price buckets offered by the price filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PriceBand {
    #[default]
    All,
    Under100k,
    From100kTo300k,
    Above300k,
}

impl PriceBand {
    /// Stable identifier used as the `<select>` option value.
    pub fn id(&self) -> &'static str {
        match self {
            PriceBand::All => "all",
            PriceBand::Under100k => "under100k",
            PriceBand::From100kTo300k => "100k-300k",
            PriceBand::Above300k => "above300k",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::All => "All Prices",
            PriceBand::Under100k => "Under \u{20B9}1,00,000",
            PriceBand::From100kTo300k => "\u{20B9}1,00,000 - \u{20B9}3,00,000",
            PriceBand::Above300k => "Above \u{20B9}3,00,000",
        }
    }

    /// Inclusive lower bound and, where bounded, inclusive upper bound.
    pub fn bounds(&self) -> (u64, Option<u64>) {
        match self {
            PriceBand::All => (0, None),
            PriceBand::Under100k => (0, Some(100_000)),
            PriceBand::From100kTo300k => (100_000, Some(300_000)),
            PriceBand::Above300k => (300_000, None),
        }
    }

    pub fn matches(&self, price: u64) -> bool {
        let (min, max) = self.bounds();
        price >= min && max.map_or(true, |max| price <= max)
    }

    /// Parse a `<select>` option value. Unknown ids fall back to `All`.
    pub fn from_id(id: &str) -> PriceBand {
        PriceBand::variants()
            .iter()
            .copied()
            .find(|band| band.id() == id)
            .unwrap_or_default()
    }

    pub fn variants() -> &'static [PriceBand] {
        &[
            PriceBand::All,
            PriceBand::Under100k,
            PriceBand::From100kTo300k,
            PriceBand::Above300k,
        ]
    }
}

/// The three filter fields. A fixed listing set plus a `FilterState` fully
/// determines the visible subset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub breed: Option<String>,
    pub price: PriceBand,
}

impl FilterState {
    /// Case-insensitive substring match on name or breed, exact breed match,
    /// and price-band containment.
    pub fn matches(&self, horse: &Horse) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = horse.name.to_lowercase().contains(&query)
            || horse.breed.to_lowercase().contains(&query);

        let matches_breed = self
            .breed
            .as_deref()
            .map_or(true, |breed| horse.breed == breed);

        matches_query && matches_breed && self.price.matches(horse.price)
    }
}

/// Filter a listing set, preserving input order.
pub fn filter_listings(horses: &[Horse], filter: &FilterState) -> Vec<Horse> {
    horses
        .iter()
        .filter(|horse| filter.matches(horse))
        .cloned()
        .collect()
}

/// Number of pages the filtered set occupies. Zero when empty.
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size)
}

/// Slice one fixed-size page out of the filtered sequence. The last page may
/// be short; out-of-range pages yield an empty slice.
pub fn paginate(horses: &[Horse], page: usize, page_size: usize) -> Vec<Horse> {
    let start = page.saturating_sub(1) * page_size;
    horses.iter().skip(start).take(page_size).cloned().collect()
}

/// Distinct breeds present in the listing set, in first-seen order. Feeds the
/// breed `<select>`.
pub fn available_breeds(horses: &[Horse]) -> Vec<String> {
    let mut seen = HashSet::new();
    horses
        .iter()
        .filter(|horse| seen.insert(horse.breed.clone()))
        .map(|horse| horse.breed.clone())
        .collect()
}

/// User interactions with the browser, dispatched synchronously into
/// [`BrowseState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum BrowseIntent {
    QueryChanged(String),
    BreedSelected(Option<String>),
    PriceSelected(PriceBand),
    PageSelected(usize),
    NextPage,
    PrevPage,
    FiltersCleared,
}

/// Filter fields plus the current page.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseState {
    pub filter: FilterState,
    pub page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            page: 1,
        }
    }
}

impl BrowseState {
    /// Apply one intent. Changing any filter field resets the page to 1;
    /// page moves clamp into `[1, max(1, total_pages)]`.
    pub fn apply(&mut self, intent: BrowseIntent, total_pages: usize) {
        let last = total_pages.max(1);
        match intent {
            BrowseIntent::QueryChanged(query) => {
                // The debounced query re-emits on mount; only a real change
                // resets pagination.
                if self.filter.query != query {
                    self.filter.query = query;
                    self.page = 1;
                }
            }
            BrowseIntent::BreedSelected(breed) => {
                self.filter.breed = breed;
                self.page = 1;
            }
            BrowseIntent::PriceSelected(band) => {
                self.filter.price = band;
                self.page = 1;
            }
            BrowseIntent::PageSelected(page) => {
                self.page = page.clamp(1, last);
            }
            BrowseIntent::NextPage => {
                self.page = (self.page + 1).min(last);
            }
            BrowseIntent::PrevPage => {
                self.page = self.page.saturating_sub(1).max(1);
            }
            BrowseIntent::FiltersCleared => {
                self.filter = FilterState::default();
                self.page = 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horse(id: &str, name: &str, breed: &str, price: u64) -> Horse {
        Horse {
            id: id.to_string(),
            name: name.to_string(),
            breed: breed.to_string(),
            price,
            age_years: 8,
            location: Some("Surrey".to_string()),
            image_url: None,
            seller_name: None,
            height: None,
            featured: None,
            description: None,
            created_at: None,
        }
    }

    fn stable() -> Vec<Horse> {
        vec![
            horse("1", "Bella", "Gelding", 5_000),
            horse("2", "Rex", "Mare", 40_000),
            horse("3", "Storm", "Warmblood", 120_000),
            horse("4", "Misty", "Warmblood", 300_000),
            horse("5", "Duke", "Thoroughbred", 450_000),
        ]
    }

    #[test]
    fn test_filter_is_subset_and_order_preserving() {
        let horses = stable();
        let filter = FilterState {
            query: "o".to_string(),
            ..Default::default()
        };

        let filtered = filter_listings(&horses, &filter);
        assert!(filtered.len() <= horses.len());

        // Every survivor appears in the input, and in input order.
        let input_ids: Vec<&str> = horses.iter().map(|h| h.id.as_str()).collect();
        let mut last_pos = 0;
        for survivor in &filtered {
            let pos = input_ids
                .iter()
                .position(|id| *id == survivor.id)
                .expect("filtered horse must come from the input");
            assert!(pos >= last_pos);
            last_pos = pos;
        }
    }

    #[test]
    fn test_query_matches_name_or_breed_substring() {
        let horses = vec![
            horse("1", "Bella", "Gelding", 5_000),
            horse("2", "Rex", "Mare", 40_000),
        ];
        let filter = FilterState {
            query: "re".to_string(),
            ..Default::default()
        };

        let filtered = filter_listings(&horses, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Rex");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let horses = stable();
        let filter = FilterState {
            query: "WARMBLOOD".to_string(),
            ..Default::default()
        };

        let filtered = filter_listings(&horses, &filter);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_breed_filter_is_exact() {
        let horses = stable();
        let filter = FilterState {
            breed: Some("Warmblood".to_string()),
            ..Default::default()
        };

        let filtered = filter_listings(&horses, &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|h| h.breed == "Warmblood"));
    }

    #[test]
    fn test_price_band_upper_bound_is_inclusive() {
        assert!(PriceBand::Under100k.matches(100_000));
        assert!(!PriceBand::Under100k.matches(100_001));
    }

    #[test]
    fn test_price_band_boundaries() {
        assert!(PriceBand::All.matches(0));
        assert!(PriceBand::All.matches(u64::MAX));
        assert!(PriceBand::From100kTo300k.matches(100_000));
        assert!(PriceBand::From100kTo300k.matches(300_000));
        assert!(!PriceBand::From100kTo300k.matches(99_999));
        assert!(PriceBand::Above300k.matches(300_000));
        assert!(!PriceBand::Above300k.matches(299_999));
    }

    #[test]
    fn test_price_band_from_id_falls_back_to_all() {
        assert_eq!(PriceBand::from_id("under100k"), PriceBand::Under100k);
        assert_eq!(PriceBand::from_id("100k-300k"), PriceBand::From100kTo300k);
        assert_eq!(PriceBand::from_id("nonsense"), PriceBand::All);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let filtered = filter_listings(&[], &FilterState::default());
        assert!(filtered.is_empty());
        assert!(paginate(&filtered, 1, PAGE_SIZE).is_empty());
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
    }

    #[test]
    fn test_paginate_page_length_and_reconstruction() {
        let horses: Vec<Horse> = (0..30)
            .map(|i| horse(&i.to_string(), &format!("Horse {i}"), "Cob", 10_000))
            .collect();
        let filtered = filter_listings(&horses, &FilterState::default());

        let pages = total_pages(filtered.len(), PAGE_SIZE);
        assert_eq!(pages, 3);

        let mut reassembled = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&filtered, page, PAGE_SIZE);
            assert!(slice.len() <= PAGE_SIZE);
            reassembled.extend(slice);
        }
        assert_eq!(reassembled, filtered);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = BrowseState::default();
        state.apply(BrowseIntent::PageSelected(3), 5);
        assert_eq!(state.page, 3);

        state.apply(BrowseIntent::QueryChanged("rex".to_string()), 5);
        assert_eq!(state.page, 1);

        state.apply(BrowseIntent::PageSelected(4), 5);
        state.apply(
            BrowseIntent::BreedSelected(Some("Mare".to_string())),
            5,
        );
        assert_eq!(state.page, 1);

        state.apply(BrowseIntent::PageSelected(2), 5);
        state.apply(BrowseIntent::PriceSelected(PriceBand::Above300k), 5);
        assert_eq!(state.page, 1);

        state.apply(BrowseIntent::PageSelected(5), 5);
        state.apply(BrowseIntent::FiltersCleared, 5);
        assert_eq!(state.page, 1);
        assert_eq!(state.filter, FilterState::default());
    }

    #[test]
    fn test_repeated_query_value_keeps_page() {
        let mut state = BrowseState::default();
        state.apply(BrowseIntent::QueryChanged("rex".to_string()), 5);
        state.apply(BrowseIntent::PageSelected(2), 5);

        // Debounce re-emitting the same value is not a filter change.
        state.apply(BrowseIntent::QueryChanged("rex".to_string()), 5);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_page_moves_clamp_to_bounds() {
        let mut state = BrowseState::default();

        state.apply(BrowseIntent::PrevPage, 3);
        assert_eq!(state.page, 1);

        state.apply(BrowseIntent::PageSelected(99), 3);
        assert_eq!(state.page, 3);

        state.apply(BrowseIntent::NextPage, 3);
        assert_eq!(state.page, 3);

        state.apply(BrowseIntent::PrevPage, 3);
        assert_eq!(state.page, 2);

        // An empty result set still pins the page to 1.
        state.apply(BrowseIntent::PageSelected(7), 0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_available_breeds_first_seen_order() {
        let horses = stable();
        assert_eq!(
            available_breeds(&horses),
            vec!["Gelding", "Mare", "Warmblood", "Thoroughbred"]
        );
    }
}
