//! Role-based route guarding

use dioxus::prelude::*;

use super::LoadingSpinner;
use crate::auth::use_auth;
use crate::hooks::current_path;
use crate::routes::Route;
use crate::types::{AuthUser, Role};

/// What a guarded page should do for a given viewer.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    Render,
    RedirectLogin,
    RedirectHome(Role),
}

/// Guard decision for a viewer against an optionally required role.
/// Synchronous and side-effect free; the component turns the outcome into a
/// redirect or renders its children.
pub fn guard_outcome(user: Option<&AuthUser>, required: Option<Role>) -> GuardOutcome {
    match user {
        None => GuardOutcome::RedirectLogin,
        Some(user) => match required {
            Some(role) if user.role != role => GuardOutcome::RedirectHome(user.role),
            _ => GuardOutcome::Render,
        },
    }
}

/// Home route for a role, used when a guarded page turns a viewer away.
pub fn role_home(role: Role) -> Route {
    match role {
        Role::Seller => Route::SellerDashboard {},
        Role::Buyer | Role::Admin => Route::Home {},
    }
}

/// Declarative redirect: replaces the current history entry once mounted.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(to.clone());
    });

    rsx! {}
}

/// Wraps page content that requires a signed-in user, optionally with a
/// specific role.
#[component]
pub fn RequireRole(role: Option<Role>, children: Element) -> Element {
    let auth = use_auth();

    // Don't redirect while the initial auth fetch is still in flight.
    if *auth.loading.read() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-stone-50",
                LoadingSpinner {}
            }
        };
    }

    let user = auth.user.read();
    match guard_outcome(user.as_ref(), role) {
        GuardOutcome::Render => children,
        GuardOutcome::RedirectLogin => rsx! {
            Redirect { to: Route::Login { from: current_path() } }
        },
        GuardOutcome::RedirectHome(role) => rsx! {
            Redirect { to: role_home(role) }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthUser {
        AuthUser {
            user_id: uuid::Uuid::new_v4(),
            email: "rider@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_signed_out_viewer_is_sent_to_login() {
        assert_eq!(guard_outcome(None, None), GuardOutcome::RedirectLogin);
        assert_eq!(
            guard_outcome(None, Some(Role::Seller)),
            GuardOutcome::RedirectLogin
        );
    }

    #[test]
    fn test_role_mismatch_redirects_to_viewer_home() {
        let buyer = user(Role::Buyer);
        assert_eq!(
            guard_outcome(Some(&buyer), Some(Role::Seller)),
            GuardOutcome::RedirectHome(Role::Buyer)
        );

        let seller = user(Role::Seller);
        assert_eq!(
            guard_outcome(Some(&seller), Some(Role::Admin)),
            GuardOutcome::RedirectHome(Role::Seller)
        );
    }

    #[test]
    fn test_matching_or_absent_role_renders() {
        let seller = user(Role::Seller);
        assert_eq!(
            guard_outcome(Some(&seller), Some(Role::Seller)),
            GuardOutcome::Render
        );
        assert_eq!(guard_outcome(Some(&seller), None), GuardOutcome::Render);
    }

    #[test]
    fn test_role_homes() {
        assert_eq!(role_home(Role::Seller), Route::SellerDashboard {});
        assert_eq!(role_home(Role::Buyer), Route::Home {});
        assert_eq!(role_home(Role::Admin), Route::Home {});
    }
}
