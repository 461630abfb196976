use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent};

use crate::routes::Route;

#[component]
pub fn NotFoundPage(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "container",
            Card {
                CardContent {
                    div { class: "empty-state",
                        h2 { "Page Not Found" }
                        p { "No page exists at \"/{path}\"." }
                        Link { to: Route::ProjectBrowse {},
                            Button { "Back to Projects" }
                        }
                    }
                }
            }
        }
    }
}
