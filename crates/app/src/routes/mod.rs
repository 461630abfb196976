pub mod admin;
pub mod admin_log_in;
pub mod client_profile;
pub mod freelancer_profile;
pub mod log_in;
pub mod not_found;
pub mod projects;
pub mod sign_up;

use dioxus::prelude::*;
use shared_ui::Navbar;

use crate::guards::{home_route, AdminGuard, UserGuard};
use crate::session::use_user_session;

/// Application routes. Two guarded trees, the end-user shell and the admin
/// dashboard, each gated by its own session slice.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/logIn")]
    LogIn {},
    #[route("/signUp")]
    SignUp {},
    #[route("/admin/logIn")]
    AdminLogIn {},
    #[layout(UserGuard)]
    #[layout(UserShell)]
    #[route("/")]
    ProjectBrowse {},
    #[route("/client/profile")]
    ClientProfile {},
    #[route("/freelancer/profile")]
    FreelancerProfile {},
    #[end_layout]
    #[end_layout]
    #[layout(AdminGuard)]
    #[route("/admin/dashboard/:tab")]
    AdminDashboard { tab: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Shell layout for the end-user tree: top navbar with brand, route links,
/// and sign-out.
#[component]
fn UserShell() -> Element {
    let route: Route = use_route();
    let mut session = use_user_session();

    let role = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.role)
        .unwrap_or_default();
    let display_name = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    let page_title = match &route {
        Route::ProjectBrowse {} => "Projects",
        Route::ClientProfile {} | Route::FreelancerProfile {} => "Profile",
        _ => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shell.css") }
        Navbar {
            div { class: "shell-bar",
                span { class: "shell-brand", "GigWire" }
                span { class: "shell-title", "{page_title}" }
                div { class: "shell-links",
                    Link { class: "shell-link", to: Route::ProjectBrowse {}, "Projects" }
                    Link { class: "shell-link", to: home_route(role), "Profile" }
                }
                div { class: "shell-spacer" }
                span { class: "shell-user", "{display_name}" }
                button {
                    class: "shell-signout",
                    onclick: move |_| {
                        spawn(async move {
                            if let Err(err) = api_client::auth::logout(role.as_str()).await {
                                tracing::warn!(%err, "logout failed");
                            }
                        });
                        session.clear();
                        navigator().push(Route::LogIn {});
                    },
                    "Sign Out"
                }
            }
        }
        div { class: "shell-content",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn LogIn() -> Element {
    log_in::LogInPage()
}

#[component]
fn SignUp() -> Element {
    sign_up::SignUpPage()
}

#[component]
fn AdminLogIn() -> Element {
    admin_log_in::AdminLogInPage()
}

#[component]
fn ProjectBrowse() -> Element {
    projects::ProjectBrowsePage()
}

#[component]
fn ClientProfile() -> Element {
    client_profile::ClientProfilePage()
}

#[component]
fn FreelancerProfile() -> Element {
    freelancer_profile::FreelancerProfilePage()
}

#[component]
fn AdminDashboard(tab: String) -> Element {
    rsx! { admin::AdminDashboardPage { tab: tab } }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    rsx! { not_found::NotFoundPage { route: route } }
}
