//! Viewer-scoped favorites.
//!
//! A single-writer store owns the set of favorited listing ids; everything
//! else reads through pure projections. Membership only changes after the
//! server acknowledges a toggle, so a failed call leaves state untouched.

use std::collections::HashSet;

use dioxus::prelude::*;
use serde::Serialize;

use crate::api::{GET_MY_FAVORITES, TOGGLE_FAVORITE};
use crate::auth::use_auth;
use crate::types::{GetMyFavoritesResponse, ToggleFavoriteResponse};

/// Plain set of favorited listing ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Context-provided store holding the viewer's favorites.
#[derive(Clone, Copy)]
pub struct FavoritesStore {
    set: Signal<FavoriteSet>,
    loading: Signal<bool>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self {
            set: Signal::new(FavoriteSet::default()),
            loading: Signal::new(true),
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.set.read().contains(id)
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn count(&self) -> usize {
        self.set.read().len()
    }

    /// Reload the set from the server. Signed-out viewers get an empty set.
    /// A fetch failure is logged and keeps the prior (empty) state.
    pub async fn refresh(self, authenticated: bool) {
        let mut set = self.set;
        let mut loading = self.loading;

        if !authenticated {
            set.set(FavoriteSet::default());
            loading.set(false);
            return;
        }

        match fetch_favorites().await {
            Ok(ids) => set.set(FavoriteSet::from_ids(ids)),
            Err(err) => tracing::error!("failed to fetch favorites: {err}"),
        }
        loading.set(false);
    }

    /// Toggle one listing. Local membership flips only on an explicit success
    /// acknowledgement from the server.
    pub async fn toggle(self, horse_id: String) {
        match toggle_favorite(horse_id.clone()).await {
            Ok(true) => {
                let mut set = self.set;
                set.write().toggle(&horse_id);
            }
            Ok(false) => {
                tracing::warn!("favorite toggle not acknowledged for {horse_id}");
            }
            Err(err) => tracing::error!("failed to toggle favorite {horse_id}: {err}"),
        }
    }
}

/// Provides the favorites store to the app and keeps it in sync with the
/// signed-in user. The fetch fires once per mount and again on every auth
/// change; in-flight tasks are dropped with the scope, so a late result never
/// touches disposed state.
#[component]
pub fn FavoritesProvider(children: Element) -> Element {
    let auth = use_auth();
    let store = use_context_provider(FavoritesStore::new);

    let user = auth.user;
    use_effect(move || {
        let authenticated = user.read().is_some();
        spawn(async move {
            store.refresh(authenticated).await;
        });
    });

    children
}

/// Hook to access the favorites store.
pub fn use_favorites() -> FavoritesStore {
    use_context::<FavoritesStore>()
}

/// Fetch the viewer's favorited listing ids.
#[server]
async fn fetch_favorites() -> Result<Vec<String>, ServerFnError> {
    let Some(token) = crate::auth::session_token().await? else {
        return Ok(Vec::new());
    };

    let client = crate::api::server_client().with_token(token);
    let response: GetMyFavoritesResponse = client
        .query(GET_MY_FAVORITES, None::<()>)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.my_favorites)
}

/// Toggle a favorite for the signed-in viewer. Returns the server's success
/// flag; `false` without a session.
#[server]
async fn toggle_favorite(horse_id: String) -> Result<bool, ServerFnError> {
    let Some(token) = crate::auth::session_token().await? else {
        return Ok(false);
    };

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        horse_id: String,
    }

    let client = crate::api::server_client().with_token(token);
    let response: ToggleFavoriteResponse = client
        .mutate(TOGGLE_FAVORITE, Some(Variables { horse_id }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.toggle_favorite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut set = FavoriteSet::default();
        assert!(!set.contains("h1"));

        set.toggle("h1");
        assert!(set.contains("h1"));
        assert_eq!(set.len(), 1);

        set.toggle("h1");
        assert!(!set.contains("h1"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original_membership() {
        let mut set = FavoriteSet::from_ids(["h1".to_string(), "h2".to_string()]);
        let before = set.clone();

        set.toggle("h2");
        set.toggle("h2");
        assert_eq!(set, before);

        set.toggle("h3");
        set.toggle("h3");
        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_is_per_id() {
        let mut set = FavoriteSet::default();
        set.toggle("h1");
        set.toggle("h2");
        assert!(set.contains("h1"));
        assert!(set.contains("h2"));

        set.toggle("h1");
        assert!(!set.contains("h1"));
        assert!(set.contains("h2"));
    }
}
