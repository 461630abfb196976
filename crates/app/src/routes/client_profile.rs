use dioxus::prelude::*;
use shared_types::VerificationStatus;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList,
    PageHeader, PageTitle,
};

use crate::session::use_user_session;

/// Client profile view, rendered from the session slice.
#[component]
pub fn ClientProfilePage() -> Element {
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
                        DetailItem { label: "Role", value: "Client".to_string() }
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

pub fn verification_badge(status: VerificationStatus) -> BadgeVariant {
    match status {
        VerificationStatus::Verified => BadgeVariant::Primary,
        VerificationStatus::Pending => BadgeVariant::Secondary,
        VerificationStatus::Rejected => BadgeVariant::Destructive,
        VerificationStatus::Incomplete => BadgeVariant::Outline,
    }
}
