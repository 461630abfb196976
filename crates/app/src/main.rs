use dioxus::prelude::*;

mod guards;
mod routes;
mod session;
mod table;

use routes::Route;
use session::{AdminSession, UserSession};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Two independent auth slices: the end-user shell and the admin
    // dashboard never share a session.
    use_context_provider(UserSession::new);
    use_context_provider(AdminSession::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
