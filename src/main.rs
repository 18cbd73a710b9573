use dioxus::prelude::*;
use themed_navbar::config::MenuDocument;
use themed_navbar::DEMO_MENU;

// Module Declarations
mod pages;

use pages::{Home, Section, Shell};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        Section { segments: Vec<String> },
}

const NAVBAR_CSS: Asset = asset!("/assets/navbar.css");

fn main() {
    // The bundled menu carries the demo's log level; a host-provided menu is
    // only known after launch.
    let level = MenuDocument::from_json(DEMO_MENU)
        .map(|doc| doc.config.tracing_level())
        .unwrap_or(tracing::Level::INFO);

    if let Err(err) = dioxus::logger::init(level) {
        tracing::warn!(%err, "logger already initialised");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        Router::<Route> {}
    }
}
