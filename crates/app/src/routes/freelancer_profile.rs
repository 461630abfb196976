use dioxus::prelude::*;
use shared_ui::{
    Badge, Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, PageHeader, PageTitle,
};

use super::client_profile::verification_badge;
use crate::session::use_user_session;

/// Freelancer profile view, rendered from the session slice.
#[component]
pub fn FreelancerProfilePage() -> Element {
    let session = use_user_session();
    let user = session.current_user.read().clone();

    let Some(user) = user else {
        return rsx! {
            Card {
                CardContent {
                    p { "Loading profile..." }
                }
            }
        };
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{user.name}" }
            }

            Card {
                CardHeader {
                    CardTitle { "Account" }
                }
                CardContent {
                    DetailList {
                        DetailItem { label: "Email", value: user.email.clone() }
                        DetailItem { label: "Role", value: "Freelancer".to_string() }
                        DetailItem { label: "Verification",
                            Badge {
                                variant: verification_badge(user.verification_status),
                                "{user.verification_status.as_str()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
