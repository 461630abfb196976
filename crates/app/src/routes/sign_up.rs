use dioxus::prelude::*;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect, Input, Label,
};

use crate::guards::{home_route, public_redirect};
use crate::routes::Route;
use crate::session::use_user_session;

/// New-account page for clients and freelancers.
#[component]
pub fn SignUpPage() -> Element {
    let mut session = use_user_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| "client".to_string());
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if let Some(active_role) = public_redirect(session.snapshot()) {
        navigator().push(home_route(active_role));
    }

    let handle_signup = move |evt: FormEvent| async move {
        evt.prevent_default();
        if name.read().trim().is_empty() || email.read().trim().is_empty() {
            error_msg.set(Some("Name and email are required.".to_string()));
            return;
        }
        if password.read().len() < 8 {
            error_msg.set(Some("Password must be at least 8 characters.".to_string()));
            return;
        }
        loading.set(true);
        error_msg.set(None);

        let payload = api_client::auth::SignupPayload {
            name: name(),
            email: email(),
            password: password(),
            role: role(),
        };
        match api_client::auth::signup(&payload).await {
            Ok(user) => {
                let user_role = user.role;
                session.set_user(user);
                navigator().push(home_route(user_role));
            }
            Err(err) => {
                tracing::warn!(%err, "signup failed");
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
                    CardTitle { "Create Account" }
                    CardDescription { "Join as a client or a freelancer" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_signup,
                        div { class: "auth-field",
                            Label { html_for: "name", "Name" }
                            Input {
                                id: "name",
                                placeholder: "Your full name",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
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
                                placeholder: "At least 8 characters",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            FormSelect {
                                label: "I am a...".to_string(),
                                value: role(),
                                onchange: move |evt: Event<FormData>| role.set(evt.value()),
                                option { value: "client", "Client — I post projects" }
                                option { value: "freelancer", "Freelancer — I bid on projects" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::LogIn {}, "Sign in" }
                    }
                }
            }
        }
    }
}
