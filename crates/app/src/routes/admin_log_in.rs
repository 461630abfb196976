use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};

use crate::routes::admin::DashboardTab;
use crate::routes::Route;
use crate::session::use_admin_session;

/// Admin sign-in page, backed by the admin session slice.
#[component]
pub fn AdminLogInPage() -> Element {
    let mut session = use_admin_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.is_authenticated() {
        navigator().push(Route::AdminDashboard {
            tab: DashboardTab::DEFAULT.as_param().to_string(),
        });
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if email.read().trim().is_empty() || password.read().is_empty() {
            error_msg.set(Some("Email and password are required.".to_string()));
            return;
        }
        loading.set(true);
        error_msg.set(None);

        let payload = api_client::auth::LoginPayload {
            email: email(),
            password: password(),
        };
        match api_client::auth::login_admin(&payload).await {
            Ok(admin) => {
                session.set_admin(admin);
                navigator().push(Route::AdminDashboard {
                    tab: DashboardTab::DEFAULT.as_param().to_string(),
                });
            }
            Err(err) => {
                tracing::warn!(%err, "admin login failed");
                error_msg.set(Some(err.user_message()));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Admin Sign In" }
                    CardDescription { "Moderation dashboard access" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "admin-email", "Email" }
                            Input {
                                input_type: "email",
                                id: "admin-email",
                                placeholder: "admin@gigwire.dev",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "admin-password", "Password" }
                            Input {
                                input_type: "password",
                                id: "admin-password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
