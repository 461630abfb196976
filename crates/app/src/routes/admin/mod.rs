pub mod clients;
pub mod complaints;
pub mod freelancers;
pub mod projects;
pub mod verifications;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdFileText, LdShield, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;

use crate::routes::Route;
use crate::session::use_admin_session;

/// Admin dashboard tabs. The active tab lives in the URL
/// (`/admin/dashboard/:tab`); anything outside this set redirects to the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Freelancers,
    Clients,
    Projects,
    Complaints,
    Verifications,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Freelancers,
        DashboardTab::Clients,
        DashboardTab::Projects,
        DashboardTab::Complaints,
        DashboardTab::Verifications,
    ];

    pub const DEFAULT: DashboardTab = DashboardTab::Freelancers;

    /// Parse the URL tab parameter. `None` for anything outside the set.
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "freelancers" => Some(DashboardTab::Freelancers),
            "clients" => Some(DashboardTab::Clients),
            "projects" => Some(DashboardTab::Projects),
            "complaints" => Some(DashboardTab::Complaints),
            "verifications" => Some(DashboardTab::Verifications),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            DashboardTab::Freelancers => "freelancers",
            DashboardTab::Clients => "clients",
            DashboardTab::Projects => "projects",
            DashboardTab::Complaints => "complaints",
            DashboardTab::Verifications => "verifications",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Freelancers => "Freelancers",
            DashboardTab::Clients => "Clients",
            DashboardTab::Projects => "Projects",
            DashboardTab::Complaints => "Complaints",
            DashboardTab::Verifications => "Verifications",
        }
    }
}

/// List/detail navigation state for the dashboard.
///
/// Two states per tab, list and detail, with no history stack. Switching
/// tabs always drops an open detail view; "back" drops it without changing
/// the tab (and without touching the list's page/search, so no refetch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailNav {
    tab: DashboardTab,
    selected: Option<String>,
}

impl DetailNav {
    pub fn new(tab: DashboardTab) -> Self {
        Self { tab, selected: None }
    }

    pub fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn detail_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn enter_tab(&mut self, tab: DashboardTab) {
        if tab != self.tab {
            self.tab = tab;
            self.selected = None;
        }
    }

    pub fn open_detail(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn back(&mut self) {
        self.selected = None;
    }
}

/// The moderation dashboard: one URL-synced tab bar, one panel per tab,
/// each panel toggling between its paginated table and an in-place detail
/// view.
#[component]
pub fn AdminDashboardPage(tab: String) -> Element {
    let session = use_admin_session();
    let mut nav = use_signal(|| DetailNav::new(DashboardTab::DEFAULT));

    let Some(active) = DashboardTab::from_param(&tab) else {
        navigator().replace(Route::AdminDashboard {
            tab: DashboardTab::DEFAULT.as_param().to_string(),
        });
        return rsx! {
            div { class: "guard-loading",
                p { "Redirecting..." }
            }
        };
    };

    // The URL is the source of truth for the active tab; entering a new tab
    // resets any open detail view.
    if nav.peek().tab() != active {
        nav.write().enter_tab(active);
    }

    let admin_email = session
        .current_admin
        .read()
        .as_ref()
        .map(|a| a.email.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { class: "dashboard-title", "Moderation" }
                span { class: "dashboard-admin", "{admin_email}" }
            }

            div { class: "dashboard-tabs",
                for t in DashboardTab::ALL {
                    button {
                        class: if t == active { "toggle-tab active" } else { "toggle-tab" },
                        onclick: move |_| {
                            navigator().push(Route::AdminDashboard {
                                tab: t.as_param().to_string(),
                            });
                        },
                        {tab_icon(t)}
                        "{t.title()}"
                    }
                }
            }

            div { class: "dashboard-panel",
                match active {
                    DashboardTab::Freelancers => rsx! { freelancers::FreelancerPanel { nav } },
                    DashboardTab::Clients => rsx! { clients::ClientPanel { nav } },
                    DashboardTab::Projects => rsx! { projects::ProjectPanel { nav } },
                    DashboardTab::Complaints => rsx! { complaints::ComplaintPanel { nav } },
                    DashboardTab::Verifications => rsx! { verifications::VerificationPanel { nav } },
                }
            }
        }
    }
}

fn tab_icon(tab: DashboardTab) -> Element {
    match tab {
        DashboardTab::Freelancers => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
        },
        DashboardTab::Clients => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 }
        },
        DashboardTab::Projects => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
        },
        DashboardTab::Complaints => rsx! {
            Icon::<LdShield> { icon: LdShield, width: 16, height: 16 }
        },
        DashboardTab::Verifications => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_params_round_trip() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_param(tab.as_param()), Some(tab));
        }
    }

    #[test]
    fn unknown_tab_param_is_rejected() {
        assert_eq!(DashboardTab::from_param("billing"), None);
        assert_eq!(DashboardTab::from_param(""), None);
        assert_eq!(DashboardTab::from_param("Freelancers"), None);
    }

    #[test]
    fn opening_a_detail_makes_it_visible() {
        let mut nav = DetailNav::new(DashboardTab::Clients);
        assert!(!nav.detail_visible());
        nav.open_detail("c42");
        assert!(nav.detail_visible());
        assert_eq!(nav.selected(), Some("c42"));
    }

    #[test]
    fn back_clears_selection_without_changing_tab() {
        let mut nav = DetailNav::new(DashboardTab::Complaints);
        nav.open_detail("cm7");
        nav.back();
        assert_eq!(nav.selected(), None);
        assert!(!nav.detail_visible());
        assert_eq!(nav.tab(), DashboardTab::Complaints);
    }

    #[test]
    fn switching_tabs_forcibly_resets_detail() {
        let mut nav = DetailNav::new(DashboardTab::Freelancers);
        nav.open_detail("f1");
        nav.enter_tab(DashboardTab::Projects);
        assert_eq!(nav.tab(), DashboardTab::Projects);
        assert!(!nav.detail_visible());
    }

    #[test]
    fn reentering_the_same_tab_keeps_detail() {
        let mut nav = DetailNav::new(DashboardTab::Verifications);
        nav.open_detail("v3");
        nav.enter_tab(DashboardTab::Verifications);
        assert_eq!(nav.selected(), Some("v3"));
    }
}
