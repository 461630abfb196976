use dioxus::prelude::*;
use shared_types::User;
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DetailItem, DetailList, PageActions, PageHeader, PageTitle,
    Pagination, SearchBar, SearchInput, Skeleton, ToastOptions,
};

use super::DetailNav;
use crate::routes::client_profile::verification_badge;
use crate::table::use_paged_fetch;

#[component]
pub fn FreelancerPanel(nav: Signal<DetailNav>) -> Element {
    let toast = use_toast();
    let mut state = use_paged_fetch(|page, search| async move {
        api_client::admin::list_freelancers(page, &search).await
    });

    let mut confirm_block: Signal<Option<User>> = use_signal(|| None);

    // Detail renders from the row already fetched for the table.
    let selected_id = nav.read().selected().map(str::to_string);
    let selected_user: Option<User> = selected_id.and_then(|id| {
        state
            .data
            .read()
            .as_ref()
            .and_then(|pg| pg.items.iter().find(|u| u.id == id).cloned())
    });

    let page_view = state.data.read().clone();

    let handle_block = move |_: MouseEvent| {
        let Some(user) = confirm_block.peek().clone() else {
            return;
        };
        spawn(async move {
            match api_client::admin::toggle_block(&user.id).await {
                Ok(msg) => {
                    toast.success(
                        msg.unwrap_or_else(|| "Account updated".to_string()),
                        ToastOptions::new(),
                    );
                    state.refresh();
                }
                Err(err) => {
                    tracing::warn!(%err, user_id = %user.id, "block toggle failed");
                    toast.error(err.user_message(), ToastOptions::new());
                }
            }
            confirm_block.set(None);
        });
    };

    let confirm_title = confirm_block
        .read()
        .as_ref()
        .map(|u| if u.blocked { "Unblock Account" } else { "Block Account" })
        .unwrap_or("Block Account");
    let confirm_text = confirm_block
        .read()
        .as_ref()
        .map(|u| {
            if u.blocked {
                format!("{} will regain access to the marketplace.", u.name)
            } else {
                format!("{} will lose access to the marketplace until unblocked.", u.name)
            }
        })
        .unwrap_or_default();

    rsx! {
        if let Some(user) = selected_user {
            FreelancerDetail {
                user: user,
                on_back: move |_| nav.write().back(),
                on_block: move |u: User| confirm_block.set(Some(u)),
            }
        } else {
            SearchBar {
                SearchInput {
                    placeholder: "Search freelancers by name or email...",
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
                    FreelancerTable {
                        users: pg.items.clone(),
                        on_open: move |id: String| nav.write().open_detail(id),
                    }
                    Pagination { page: state.page, total_pages: pg.total_pages }
                },
                _ => rsx! {
                    Card {
                        CardContent {
                            p { "No freelancers matched." }
                        }
                    }
                },
            }
        }

        AlertDialogRoot {
            open: confirm_block.read().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    confirm_block.set(None);
                }
            },
            AlertDialogContent {
                AlertDialogTitle { "{confirm_title}" }
                AlertDialogDescription { "{confirm_text}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction { on_click: handle_block, "Confirm" }
                }
            }
        }
    }
}

#[component]
fn FreelancerTable(users: Vec<User>, on_open: EventHandler<String>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Verification" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for user in users {
                    FreelancerRow { user: user, on_open: on_open }
                }
            }
        }
    }
}

#[component]
fn FreelancerRow(user: User, on_open: EventHandler<String>) -> Element {
    let id = user.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| on_open.call(id.clone()),
            DataTableCell { "{user.name}" }
            DataTableCell { "{user.email}" }
            DataTableCell {
                Badge {
                    variant: verification_badge(user.verification_status),
                    "{user.verification_status.as_str()}"
                }
            }
            DataTableCell {
                if user.blocked {
                    Badge { variant: BadgeVariant::Destructive, "Blocked" }
                } else {
                    Badge { variant: BadgeVariant::Primary, "Active" }
                }
            }
        }
    }
}

#[component]
fn FreelancerDetail(
    user: User,
    on_back: EventHandler<()>,
    on_block: EventHandler<User>,
) -> Element {
    let joined = user
        .joined_at
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "--".to_string());
    let block_label = if user.blocked { "Unblock" } else { "Block" };
    let user_for_block = user.clone();

    rsx! {
        PageHeader {
            PageTitle { "{user.name}" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_back.call(()),
                    "Back to List"
                }
                Button {
                    variant: if user.blocked { ButtonVariant::Secondary } else { ButtonVariant::Destructive },
                    onclick: move |_| on_block.call(user_for_block.clone()),
                    "{block_label}"
                }
            }
        }

        Card {
            CardContent {
                DetailList {
                    DetailItem { label: "Email", value: user.email.clone() }
                    DetailItem { label: "Joined", value: joined }
                    DetailItem { label: "Verification",
                        Badge {
                            variant: verification_badge(user.verification_status),
                            "{user.verification_status.as_str()}"
                        }
                    }
                    DetailItem { label: "Account",
                        if user.blocked {
                            Badge { variant: BadgeVariant::Destructive, "Blocked" }
                        } else {
                            Badge { variant: BadgeVariant::Primary, "Active" }
                        }
                    }
                }
            }
        }
    }
}
