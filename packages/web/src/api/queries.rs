//! GraphQL query definitions

// ============================================================================
// LISTING QUERIES
// ============================================================================

pub const GET_FEATURED_HORSES: &str = r#"
  query GetFeaturedHorses($limit: Int) {
    featuredHorses(limit: $limit) {
      id
      name
      breed
      price
      ageYears
      location
      imageUrl
      sellerName
      height
      featured
      description
      createdAt
    }
  }
"#;

pub const GET_HORSE: &str = r#"
  query GetHorse($id: Uuid!) {
    horse(id: $id) {
      id
      name
      breed
      price
      ageYears
      location
      imageUrl
      sellerName
      height
      featured
      description
      createdAt
    }
  }
"#;

pub const GET_SELLER_HORSES: &str = r#"
  query GetSellerHorses($sellerId: Uuid!) {
    sellerHorses(sellerId: $sellerId) {
      id
      name
      breed
      price
      ageYears
      location
      imageUrl
      sellerName
      height
      featured
      description
      createdAt
    }
  }
"#;

// ============================================================================
// FAVORITES QUERIES
// ============================================================================

pub const GET_MY_FAVORITES: &str = r#"
  query GetMyFavorites {
    myFavorites
  }
"#;

pub const GET_MY_FAVORITE_HORSES: &str = r#"
  query GetMyFavoriteHorses {
    myFavoriteHorses {
      id
      name
      breed
      price
      ageYears
      location
      imageUrl
      sellerName
      height
      featured
      description
      createdAt
    }
  }
"#;
