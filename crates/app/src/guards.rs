use dioxus::prelude::*;
use shared_types::UserRole;

use crate::routes::Route;
use crate::session::{use_admin_session, use_user_session, UserSnapshot};

/// Where a guarded navigation ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectLogIn,
    RedirectHome(UserRole),
}

/// Gate for end-user routes.
///
/// `required_role` is the role the route's path prefix demands
/// (`/client/*`, `/freelancer/*`); `None` for routes any signed-in user may
/// visit. Blocked accounts are treated the same as signed-out ones.
pub fn guard_user(snapshot: UserSnapshot, required_role: Option<UserRole>) -> GuardOutcome {
    match snapshot {
        UserSnapshot::SignedOut => GuardOutcome::RedirectLogIn,
        UserSnapshot::SignedIn { blocked: true, .. } => GuardOutcome::RedirectLogIn,
        UserSnapshot::SignedIn { role, .. } => match required_role {
            Some(required) if role != required => GuardOutcome::RedirectHome(role),
            _ => GuardOutcome::Allow,
        },
    }
}

/// Gate for admin routes. The admin slice has no role or block dimensions,
/// so the only question is whether it resolved.
pub fn guard_admin(signed_in: bool) -> GuardOutcome {
    if signed_in {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectLogIn
    }
}

/// Public pages (`/logIn`, `/signUp`) bounce authenticated, non-blocked
/// users to their role home.
pub fn public_redirect(snapshot: UserSnapshot) -> Option<UserRole> {
    match snapshot {
        UserSnapshot::SignedIn {
            role,
            blocked: false,
        } => Some(role),
        _ => None,
    }
}

/// Landing route for a role, used by login success and mismatch redirects.
pub fn home_route(role: UserRole) -> Route {
    match role {
        UserRole::Client => Route::ClientProfile {},
        UserRole::Freelancer => Route::FreelancerProfile {},
    }
}

/// Role a route's path prefix demands, if any.
fn required_role(route: &Route) -> Option<UserRole> {
    match route {
        Route::ClientProfile {} => Some(UserRole::Client),
        Route::FreelancerProfile {} => Some(UserRole::Freelancer),
        _ => None,
    }
}

/// Layout guard for the end-user tree.
///
/// Resolves the session against the backend on entry, stores it in the
/// user slice, then applies [`guard_user`] for the matched route. While the
/// check is in flight a neutral placeholder renders instead of the outlet.
#[component]
pub fn UserGuard() -> Element {
    let mut session = use_user_session();
    let route: Route = use_route();

    let resource = use_resource(move || async move { api_client::auth::verify_user().await });
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(user)) => {
            if !session.is_authenticated() {
                session.set_user(user);
            }
            match guard_user(session.snapshot(), required_role(&route)) {
                GuardOutcome::Allow => rsx! { Outlet::<Route> {} },
                GuardOutcome::RedirectLogIn => {
                    session.clear();
                    navigator().push(Route::LogIn {});
                    rsx! {
                        div { class: "guard-loading",
                            p { "Redirecting to sign in..." }
                        }
                    }
                }
                GuardOutcome::RedirectHome(role) => {
                    navigator().push(home_route(role));
                    rsx! {
                        div { class: "guard-loading",
                            p { "Redirecting..." }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => {
            tracing::warn!(%err, "session check failed");
            session.clear();
            navigator().push(Route::LogIn {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        None => rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Layout guard for the admin tree, backed by the admin slice.
#[component]
pub fn AdminGuard() -> Element {
    let mut session = use_admin_session();

    let resource = use_resource(move || async move { api_client::auth::verify_admin().await });
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(admin)) => {
            if !session.is_authenticated() {
                session.set_admin(admin);
            }
            match guard_admin(session.is_authenticated()) {
                GuardOutcome::Allow => rsx! { Outlet::<Route> {} },
                _ => {
                    navigator().push(Route::AdminLogIn {});
                    rsx! {
                        div { class: "guard-loading",
                            p { "Redirecting to sign in..." }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => {
            tracing::warn!(%err, "admin session check failed");
            session.clear();
            navigator().push(Route::AdminLogIn {});
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        None => rsx! {
            div { class: "guard-loading",
                p { "Loading..." }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(role: UserRole, blocked: bool) -> UserSnapshot {
        UserSnapshot::SignedIn { role, blocked }
    }

    #[test]
    fn signed_out_user_is_sent_to_login() {
        // e.g. an unauthenticated request for /client/profile
        assert_eq!(
            guard_user(UserSnapshot::SignedOut, Some(UserRole::Client)),
            GuardOutcome::RedirectLogIn
        );
        assert_eq!(
            guard_user(UserSnapshot::SignedOut, None),
            GuardOutcome::RedirectLogIn
        );
    }

    #[test]
    fn blocked_account_is_sent_to_login_everywhere() {
        for required in [None, Some(UserRole::Client), Some(UserRole::Freelancer)] {
            assert_eq!(
                guard_user(signed_in(UserRole::Client, true), required),
                GuardOutcome::RedirectLogIn
            );
            assert_eq!(
                guard_user(signed_in(UserRole::Freelancer, true), required),
                GuardOutcome::RedirectLogIn
            );
        }
    }

    #[test]
    fn role_mismatch_redirects_to_own_home() {
        assert_eq!(
            guard_user(signed_in(UserRole::Freelancer, false), Some(UserRole::Client)),
            GuardOutcome::RedirectHome(UserRole::Freelancer)
        );
        assert_eq!(
            guard_user(signed_in(UserRole::Client, false), Some(UserRole::Freelancer)),
            GuardOutcome::RedirectHome(UserRole::Client)
        );
    }

    #[test]
    fn matching_role_is_allowed_through() {
        assert_eq!(
            guard_user(signed_in(UserRole::Client, false), Some(UserRole::Client)),
            GuardOutcome::Allow
        );
        assert_eq!(
            guard_user(signed_in(UserRole::Freelancer, false), None),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn admin_guard_only_checks_resolution() {
        assert_eq!(guard_admin(true), GuardOutcome::Allow);
        assert_eq!(guard_admin(false), GuardOutcome::RedirectLogIn);
    }

    #[test]
    fn public_pages_bounce_active_accounts_only() {
        assert_eq!(
            public_redirect(signed_in(UserRole::Client, false)),
            Some(UserRole::Client)
        );
        assert_eq!(public_redirect(signed_in(UserRole::Client, true)), None);
        assert_eq!(public_redirect(UserSnapshot::SignedOut), None);
    }
}
