//! Type definitions for GraphQL API responses
//!
//! These mirror the marketplace API schema field-for-field.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Listing Types
// ============================================================================

/// A single horse listing as returned by the API.
///
/// Favorite status is never part of the entity; it is derived from the
/// viewer's favorites set at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    pub id: String,
    pub name: String,
    pub breed: String,
    /// Asking price in whole rupees.
    pub price: u64,
    pub age_years: u32,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub seller_name: Option<String>,
    pub height: Option<String>,
    pub featured: Option<bool>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

// ============================================================================
// Auth Types
// ============================================================================

/// Account role, as carried in the JWT issued by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

// ============================================================================
// GraphQL Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFeaturedHorsesResponse {
    pub featured_horses: Vec<Horse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHorseResponse {
    pub horse: Option<Horse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMyFavoritesResponse {
    pub my_favorites: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMyFavoriteHorsesResponse {
    pub my_favorite_horses: Vec<Horse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSellerHorsesResponse {
    pub seller_horses: Vec<Horse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    pub toggle_favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub login: Option<String>,
}
