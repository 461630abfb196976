use dioxus::prelude::*;
use shared_types::Project;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DetailItem, DetailList,
    PageActions, PageHeader, PageTitle, Pagination, SearchBar, SearchInput, Skeleton, TabContent,
    TabList, TabTrigger, Tabs,
};

use super::DetailNav;
use crate::routes::projects::project_status_badge;
use crate::table::use_paged_fetch;

#[component]
pub fn ProjectPanel(nav: Signal<DetailNav>) -> Element {
    let mut state = use_paged_fetch(|page, search| async move {
        api_client::projects::list_projects(page, &search).await
    });

    let selected_id = nav.read().selected().map(str::to_string);
    let selected_project: Option<Project> = selected_id.and_then(|id| {
        state
            .data
            .read()
            .as_ref()
            .and_then(|pg| pg.items.iter().find(|p| p.id == id).cloned())
    });

    let page_view = state.data.read().clone();

    rsx! {
        if let Some(project) = selected_project {
            ProjectDetail {
                project: project,
                on_back: move |_| nav.write().back(),
            }
        } else {
            SearchBar {
                SearchInput {
                    placeholder: "Search projects by title...",
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
                    ProjectTable {
                        projects: pg.items.clone(),
                        on_open: move |id: String| nav.write().open_detail(id),
                    }
                    Pagination { page: state.page, total_pages: pg.total_pages }
                },
                _ => rsx! {
                    Card {
                        CardContent {
                            p { "No projects matched." }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ProjectTable(projects: Vec<Project>, on_open: EventHandler<String>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Title" }
                DataTableColumn { "Budget" }
                DataTableColumn { "Applicants" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                for project in projects {
                    ProjectRow { project: project, on_open: on_open }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project, on_open: EventHandler<String>) -> Element {
    let id = project.id.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| on_open.call(id.clone()),
            DataTableCell { "{project.title}" }
            DataTableCell { "${project.budget}" }
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

#[component]
fn ProjectDetail(project: Project, on_back: EventHandler<()>) -> Element {
    let posted_by = project
        .posted_by
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "--".to_string());
    let posted = project
        .created_at
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_else(|| "--".to_string());

    rsx! {
        PageHeader {
            PageTitle { "{project.title}" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_back.call(()),
                    "Back to List"
                }
            }
        }

        Tabs { default_value: "overview", horizontal: true,
            TabList {
                TabTrigger { value: "overview", index: 0usize, "Overview" }
                TabTrigger { value: "applicants", index: 1usize, "Applicants" }
                TabTrigger { value: "attachments", index: 2usize, "Attachments" }
            }
            TabContent { value: "overview", index: 0usize,
                Card {
                    CardContent {
                        p { class: "project-description", "{project.description}" }
                        DetailList {
                            DetailItem { label: "Budget", value: format!("${}", project.budget) }
                            DetailItem { label: "Timeline", value: project.timeline.clone() }
                            DetailItem { label: "Posted By", value: posted_by }
                            DetailItem { label: "Posted", value: posted }
                            DetailItem { label: "Status",
                                Badge {
                                    variant: project_status_badge(project.status),
                                    "{project.status.as_str()}"
                                }
                            }
                        }
                    }
                }
            }
            TabContent { value: "applicants", index: 1usize,
                Card {
                    CardContent {
                        if project.applied_users.is_empty() {
                            p { "No freelancers have applied yet." }
                        } else {
                            DetailList {
                                for applicant in project.applied_users.iter() {
                                    DetailItem { label: "Applicant",
                                        span { "{applicant.name}" }
                                        " "
                                        Badge { variant: BadgeVariant::Outline, "{applicant.role.as_str()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            TabContent { value: "attachments", index: 2usize,
                Card {
                    CardContent {
                        if project.attachments.is_empty() {
                            p { "No attachments were uploaded." }
                        } else {
                            ul { class: "attachment-list",
                                for url in project.attachments.iter() {
                                    li {
                                        a { href: "{url}", target: "_blank", "{url}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
