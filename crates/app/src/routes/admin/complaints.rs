use dioxus::prelude::*;
use shared_types::{Complaint, ComplaintAction, ComplaintStatus};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DetailItem,
    DetailList, PageActions, PageHeader, PageTitle, Pagination, SearchBar, SearchInput, Skeleton,
    Textarea, ToastOptions,
};

use super::DetailNav;
use crate::table::use_paged_fetch;

#[component]
pub fn ComplaintPanel(nav: Signal<DetailNav>) -> Element {
    let mut state = use_paged_fetch(|page, search| async move {
        api_client::complaints::list_complaints(page, &search).await
    });

    let selected_id = nav.read().selected().map(str::to_string);
    let page_view = state.data.read().clone();

    rsx! {
        if let Some(id) = selected_id {
            ComplaintDetail {
                id: id,
                on_back: move |_| nav.write().back(),
                on_changed: move |_| state.refresh(),
            }
        } else {
            SearchBar {
                SearchInput {
                    placeholder: "Search complaints by subject...",
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
                    ComplaintTable {
                        complaints: pg.items.clone(),
                        on_open: move |id: String| nav.write().open_detail(id),
                    }
                    Pagination { page: state.page, total_pages: pg.total_pages }
                },
                _ => rsx! {
                    Card {
                        CardContent {
                            p { "No complaints matched." }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ComplaintTable(complaints: Vec<Complaint>, on_open: EventHandler<String>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Subject" }
                DataTableColumn { "Filed By" }
                DataTableColumn { "Against" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for complaint in complaints {
                    ComplaintRow { complaint: complaint, on_open: on_open }
                }
            }
        }
    }
}

#[component]
fn ComplaintRow(complaint: Complaint, on_open: EventHandler<String>) -> Element {
    let id = complaint.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| on_open.call(id.clone()),
            DataTableCell { "{complaint.subject}" }
            DataTableCell { "{complaint.complainant.name}" }
            DataTableCell { "{complaint.against.name}" }
            DataTableCell {
                Badge {
                    variant: complaint_status_badge(complaint.status),
                    "{complaint.status.as_str()}"
                }
            }
        }
    }
}

/// Detail view fetches its own record: the listing row omits the full
/// description and any admin message.
#[component]
fn ComplaintDetail(id: String, on_back: EventHandler<()>, on_changed: EventHandler<()>) -> Element {
    let toast = use_toast();
    let fetch_id = id.clone();
    let mut data = use_resource(move || {
        let cid = fetch_id.clone();
        async move { api_client::complaints::get_complaint(&cid).await }
    });

    let mut admin_message = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let action_id = id.clone();
    let submit = use_callback(move |status: ComplaintStatus| {
        let message = admin_message.peek().clone();
        if message.trim().is_empty() {
            toast.error("An admin message is required.".to_string(), ToastOptions::new());
            return;
        }
        let cid = action_id.clone();
        spawn(async move {
            submitting.set(true);
            let action = ComplaintAction {
                status,
                admin_message: message,
            };
            match api_client::complaints::resolve_complaint(&cid, &action).await {
                Ok(msg) => {
                    toast.success(
                        msg.unwrap_or_else(|| "Complaint updated".to_string()),
                        ToastOptions::new(),
                    );
                    admin_message.set(String::new());
                    data.restart();
                    on_changed.call(());
                }
                Err(err) => {
                    tracing::warn!(%err, complaint_id = %cid, "complaint update failed");
                    toast.error(err.user_message(), ToastOptions::new());
                }
            }
            submitting.set(false);
        });
    });

    let view = data.read().as_ref().cloned();

    match view {
        Some(Ok(complaint)) => {
            let filed = complaint
                .filed_at
                .map(|d| d.format("%b %e, %Y").to_string())
                .unwrap_or_else(|| "--".to_string());

            rsx! {
                PageHeader {
                    PageTitle { "{complaint.subject}" }
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
                        p { class: "complaint-description", "{complaint.description}" }
                        DetailList {
                            DetailItem { label: "Filed By",
                                span { "{complaint.complainant.name}" }
                                " "
                                Badge { variant: BadgeVariant::Outline, "{complaint.complainant.role.as_str()}" }
                            }
                            DetailItem { label: "Against",
                                span { "{complaint.against.name}" }
                                " "
                                Badge { variant: BadgeVariant::Outline, "{complaint.against.role.as_str()}" }
                            }
                            DetailItem { label: "Filed", value: filed }
                            DetailItem { label: "Status",
                                Badge {
                                    variant: complaint_status_badge(complaint.status),
                                    "{complaint.status.as_str()}"
                                }
                            }
                            if let Some(message) = complaint.admin_message.as_ref() {
                                DetailItem { label: "Admin Message", value: message.clone() }
                            }
                        }
                    }
                }

                if complaint.status == ComplaintStatus::Pending {
                    Card {
                        CardContent {
                            Textarea {
                                label: "Admin message",
                                placeholder: "Explain the decision to both parties...",
                                value: admin_message(),
                                on_input: move |e: FormEvent| admin_message.set(e.value()),
                            }
                            div { class: "detail-actions",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: submitting(),
                                    onclick: move |_| submit.call(ComplaintStatus::Resolved),
                                    "Resolve"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    disabled: submitting(),
                                    onclick: move |_| submit.call(ComplaintStatus::Rejected),
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
                        h2 { "Complaint Unavailable" }
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

fn complaint_status_badge(status: ComplaintStatus) -> BadgeVariant {
    match status {
        ComplaintStatus::Pending => BadgeVariant::Secondary,
        ComplaintStatus::Resolved => BadgeVariant::Primary,
        ComplaintStatus::Rejected => BadgeVariant::Destructive,
    }
}
