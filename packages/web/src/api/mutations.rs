//! GraphQL mutation definitions

// ============================================================================
// AUTHENTICATION MUTATIONS
// ============================================================================

pub const LOGIN: &str = r#"
  mutation Login($email: String!, $password: String!) {
    login(email: $email, password: $password)
  }
"#;

// ============================================================================
// FAVORITES MUTATIONS
// ============================================================================

pub const TOGGLE_FAVORITE: &str = r#"
  mutation ToggleFavorite($horseId: Uuid!) {
    toggleFavorite(horseId: $horseId)
  }
"#;
