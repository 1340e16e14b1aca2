//! Server functions for authentication
//!
//! These run on the server and handle session management.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api::LOGIN;
use crate::types::{AuthUser, LoginResponse, Role};

/// Exchange credentials for a session. Returns `false` when the API rejects
/// the login.
#[server]
pub async fn login(email: String, password: String) -> Result<bool, ServerFnError> {
    let client = crate::api::server_client();

    #[derive(Serialize)]
    struct Variables {
        email: String,
        password: String,
    }

    let response: LoginResponse = client
        .mutate(LOGIN, Some(Variables { email, password }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // The API hands back a JWT on success; decode the claims and persist
    // them in the session alongside the raw token.
    let Some(token) = response.login else {
        return Ok(false);
    };

    let user = decode_jwt_to_user(&token)?;
    set_session(&user, &token).await?;

    Ok(true)
}

/// Get the current authenticated user from the session
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    get_session_user().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn decode_jwt_to_user(token: &str) -> Result<AuthUser, ServerFnError> {
    // Simple JWT decoding (just base64 decode the payload); the API verified
    // the signature before issuing it.
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ServerFnError::new("Invalid JWT format"));
    }

    use base64::Engine;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| ServerFnError::new(format!("Failed to decode JWT: {}", e)))?;

    #[derive(Deserialize)]
    struct JwtClaims {
        user_id: uuid::Uuid,
        email: String,
        role: Role,
    }

    let claims: JwtClaims = serde_json::from_slice(&payload)
        .map_err(|e| ServerFnError::new(format!("Failed to parse JWT claims: {}", e)))?;

    Ok(AuthUser {
        user_id: claims.user_id,
        email: claims.email,
        role: claims.role,
    })
}

#[cfg(feature = "server")]
async fn session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))
}

#[cfg(feature = "server")]
async fn set_session(user: &AuthUser, token: &str) -> Result<(), ServerFnError> {
    let session = session().await?;

    session
        .insert("user", user)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;
    session
        .insert("token", token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session_user() -> Result<Option<AuthUser>, ServerFnError> {
    let session = session().await?;

    session
        .get("user")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get user from session: {}", e)))
}

/// API token of the signed-in viewer, for viewer-scoped GraphQL calls.
#[cfg(feature = "server")]
pub(crate) async fn session_token() -> Result<Option<String>, ServerFnError> {
    let session = session().await?;

    session
        .get("token")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get token from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    let session = session().await?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}
