use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};

use crate::guards::{home_route, public_redirect};
use crate::routes::Route;
use crate::session::use_user_session;

/// End-user sign-in page. Already-authenticated, non-blocked visitors are
/// bounced to their role home.
#[component]
pub fn LogInPage() -> Element {
    let mut session = use_user_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(role) = public_redirect(session.snapshot()) {
        navigator().push(home_route(role));
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
        match api_client::auth::login_user(&payload).await {
            Ok(user) => {
                let role = user.role;
                session.set_user(user);
                navigator().push(home_route(role));
            }
            Err(err) => {
                tracing::warn!(%err, "login failed");
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
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
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

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::SignUp {}, "Create one" }
                    }
                }
            }
        }
    }
}
