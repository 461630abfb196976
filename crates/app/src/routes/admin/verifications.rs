use dioxus::prelude::*;
use shared_types::{VerificationDecision, VerificationRequest, VerificationStatus};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DetailItem,
    DetailList, PageActions, PageHeader, PageTitle, Pagination, SearchBar, SearchInput, Skeleton,
    ToastOptions,
};

use super::DetailNav;
use crate::routes::client_profile::verification_badge;
use crate::table::use_paged_fetch;

#[component]
pub fn VerificationPanel(nav: Signal<DetailNav>) -> Element {
    let mut state = use_paged_fetch(|page, search| async move {
        api_client::verification::list_verifications(page, &search).await
    });

    let selected_id = nav.read().selected().map(str::to_string);
    let page_view = state.data.read().clone();

    rsx! {
        if let Some(id) = selected_id {
            VerificationDetail {
                id: id,
                on_back: move |_| nav.write().back(),
                on_changed: move |_| state.refresh(),
            }
        } else {
            SearchBar {
                SearchInput {
                    placeholder: "Search requests by applicant name...",
                    on_search: move |term: String| state.commit_search(term),
                }
            }

            match (*state.loading.read(), page_view) {
                (true, _) => rsx! {
                    div { class: "dashboard-loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
                (_, Some(pg)) if !pg.is_empty() => rsx! {
                    VerificationTable {
                        requests: pg.items.clone(),
                        on_open: move |id: String| nav.write().open_detail(id),
                    }
                    Pagination { page: state.page, total_pages: pg.total_pages }
                },
                _ => rsx! {
                    Card {
                        CardContent {
                            p { "No verification requests matched." }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn VerificationTable(requests: Vec<VerificationRequest>, on_open: EventHandler<String>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Applicant" }
                DataTableColumn { "Submitted" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for request in requests {
                    VerificationRow { request: request, on_open: on_open }
                }
            }
        }
    }
}

#[component]
fn VerificationRow(request: VerificationRequest, on_open: EventHandler<String>) -> Element {
    let id = request.id.clone();
    let submitted = request
        .submitted_at
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "--".to_string());

    rsx! {
        DataTableRow {
            onclick: move |_| on_open.call(id.clone()),
            DataTableCell { "{request.user.name}" }
            DataTableCell { "{submitted}" }
            DataTableCell {
                Badge {
                    variant: verification_badge(request.status),
                    "{request.status.as_str()}"
                }
            }
        }
    }
}

/// Detail view fetches its own record via the client-request endpoint so
/// the admin always decides on the latest submission.
#[component]
fn VerificationDetail(id: String, on_back: EventHandler<()>, on_changed: EventHandler<()>) -> Element {
    let toast = use_toast();
    let fetch_id = id.clone();
    let mut data = use_resource(move || {
        let rid = fetch_id.clone();
        async move { api_client::verification::get_client_request(&rid).await }
    });

    let mut submitting = use_signal(|| false);

    let decision_id = id.clone();
    let decide = use_callback(move |status: VerificationStatus| {
        let rid = decision_id.clone();
        spawn(async move {
            submitting.set(true);
            let decision = VerificationDecision {
                request_id: rid.clone(),
                status,
            };
            match api_client::verification::update_verification(&decision).await {
                Ok(msg) => {
                    toast.success(
                        msg.unwrap_or_else(|| "Verification updated".to_string()),
                        ToastOptions::new(),
                    );
                    data.restart();
                    on_changed.call(());
                }
                Err(err) => {
                    tracing::warn!(%err, request_id = %rid, "verification update failed");
                    toast.error(err.user_message(), ToastOptions::new());
                }
            }
            submitting.set(false);
        });
    });

    let view = data.read().as_ref().cloned();

    match view {
        Some(Ok(request)) => {
            let submitted = request
                .submitted_at
                .map(|d| d.format("%b %e, %Y").to_string())
                .unwrap_or_else(|| "--".to_string());

            rsx! {
                PageHeader {
                    PageTitle { "{request.user.name}" }
                    PageActions {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_back.call(()),
                            "Back to List"
                        }
                    }
                }

                Card {
                    CardContent {
                        DetailList {
                            DetailItem { label: "Applicant",
                                span { "{request.user.name}" }
                                " "
                                Badge { variant: BadgeVariant::Outline, "{request.user.role.as_str()}" }
                            }
                            DetailItem { label: "Submitted", value: submitted }
                            DetailItem { label: "Status",
                                Badge {
                                    variant: verification_badge(request.status),
                                    "{request.status.as_str()}"
                                }
                            }
                            if let Some(url) = request.document_url.as_ref() {
                                DetailItem { label: "Document",
                                    a { href: "{url}", target: "_blank", "View submitted document" }
                                }
                            }
                        }

                        if request.status == VerificationStatus::Pending {
                            div { class: "detail-actions",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: submitting(),
                                    onclick: move |_| decide.call(VerificationStatus::Verified),
                                    "Verify"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    disabled: submitting(),
                                    onclick: move |_| decide.call(VerificationStatus::Rejected),
                                    "Reject"
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            Card {
                CardContent {
                    div { class: "empty-state",
                        h2 { "Request Unavailable" }
                        p { "{err.user_message()}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_back.call(()),
                            "Back to List"
                        }
                    }
                }
            }
        },
        None => rsx! {
            div { class: "dashboard-loading",
                Skeleton {}
                Skeleton {}
            }
        },
    }
}
