use dioxus::prelude::*;
use shared_types::{Project, ProjectStatus};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle, Pagination, SearchBar,
    SearchInput, Skeleton,
};

use crate::table::use_paged_fetch;

/// User-facing project listing: the same paginated table pattern the admin
/// dashboard uses, over `GET /api/project/projects`.
#[component]
pub fn ProjectBrowsePage() -> Element {
    let mut state = use_paged_fetch(|page, search| async move {
        api_client::projects::list_projects(page, &search).await
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Projects" }
            }

            SearchBar {
                SearchInput {
                    placeholder: "Search projects by title...",
                    on_search: move |term: String| state.commit_search(term),
                }
            }

            match (*state.loading.read(), state.data.read().clone()) {
                (true, _) => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
                (_, Some(pg)) if !pg.is_empty() => rsx! {
                    ProjectTable { projects: pg.items.clone() }
                    Pagination { page: state.page, total_pages: pg.total_pages }
                },
                _ => rsx! {
                    Card {
                        CardContent {
                            p { "No projects matched your search." }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProjectTable(projects: Vec<Project>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Title" }
                DataTableColumn { "Budget" }
                DataTableColumn { "Timeline" }
                DataTableColumn { "Applicants" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for project in projects {
                    DataTableRow {
                        DataTableCell { "{project.title}" }
                        DataTableCell { "${project.budget}" }
                        DataTableCell { "{project.timeline}" }
                        DataTableCell { "{project.applied_users.len()}" }
                        DataTableCell {
                            Badge {
                                variant: project_status_badge(project.status),
                                "{project.status.as_str()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn project_status_badge(status: ProjectStatus) -> BadgeVariant {
    match status {
        ProjectStatus::Open => BadgeVariant::Primary,
        ProjectStatus::Committed => BadgeVariant::Secondary,
        ProjectStatus::Completed => BadgeVariant::Outline,
        ProjectStatus::Cancelled => BadgeVariant::Destructive,
    }
}
