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
pub fn ClientPanel(nav: Signal<DetailNav>) -> Element {
    let toast = use_toast();
    let mut state = use_paged_fetch(|page, search| async move {
        api_client::admin::list_clients(page, &search).await
    });

    let mut confirm_block: Signal<Option<User>> = use_signal(|| None);

    let selected_id = nav.read().selected().map(str::to_string);
    let selected_client: Option<User> = selected_id.and_then(|id| {
        state
            .data
            .read()
            .as_ref()
            .and_then(|pg| pg.items.iter().find(|u| u.id == id).cloned())
    });

    let page_view = state.data.read().clone();

    let handle_block = move |_: MouseEvent| {
        let Some(client) = confirm_block.peek().clone() else {
            return;
        };
        spawn(async move {
            match api_client::admin::toggle_block(&client.id).await {
                Ok(msg) => {
                    toast.success(
                        msg.unwrap_or_else(|| "Account updated".to_string()),
                        ToastOptions::new(),
                    );
                    state.refresh();
                }
                Err(err) => {
                    tracing::warn!(%err, user_id = %client.id, "block toggle failed");
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
                format!("{} will be able to post projects again.", u.name)
            } else {
                format!("{} will no longer be able to post projects or hire.", u.name)
            }
        })
        .unwrap_or_default();

    rsx! {
        if let Some(client) = selected_client {
            ClientDetail {
                client: client,
                on_back: move |_| nav.write().back(),
                on_block: move |u: User| confirm_block.set(Some(u)),
            }
        } else {
            SearchBar {
                SearchInput {
                    placeholder: "Search clients by name or email...",
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
                    ClientTable {
                        clients: pg.items.clone(),
                        on_open: move |id: String| nav.write().open_detail(id),
                    }
                    Pagination { page: state.page, total_pages: pg.total_pages }
                },
                _ => rsx! {
                    Card {
                        CardContent {
                            p { "No clients matched." }
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
fn ClientTable(clients: Vec<User>, on_open: EventHandler<String>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Verification" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for client in clients {
                    ClientRow { client: client, on_open: on_open }
                }
            }
        }
    }
}

#[component]
fn ClientRow(client: User, on_open: EventHandler<String>) -> Element {
    let id = client.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| on_open.call(id.clone()),
            DataTableCell { "{client.name}" }
            DataTableCell { "{client.email}" }
            DataTableCell {
                Badge {
                    variant: verification_badge(client.verification_status),
                    "{client.verification_status.as_str()}"
                }
            }
            DataTableCell {
                if client.blocked {
                    Badge { variant: BadgeVariant::Destructive, "Blocked" }
                } else {
                    Badge { variant: BadgeVariant::Primary, "Active" }
                }
            }
        }
    }
}

#[component]
fn ClientDetail(client: User, on_back: EventHandler<()>, on_block: EventHandler<User>) -> Element {
    let block_label = if client.blocked { "Unblock" } else { "Block" };
    let client_for_block = client.clone();

    rsx! {
        PageHeader {
            PageTitle { "{client.name}" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_back.call(()),
                    "Back to List"
                }
                Button {
                    variant: if client.blocked { ButtonVariant::Secondary } else { ButtonVariant::Destructive },
                    onclick: move |_| on_block.call(client_for_block.clone()),
                    "{block_label}"
                }
            }
        }

        Card {
            CardContent {
                DetailList {
                    DetailItem { label: "Email", value: client.email.clone() }
                    DetailItem { label: "Verification",
                        Badge {
                            variant: verification_badge(client.verification_status),
                            "{client.verification_status.as_str()}"
                        }
                    }
                    DetailItem { label: "Account",
                        if client.blocked {
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
