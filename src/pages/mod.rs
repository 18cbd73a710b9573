use dioxus::prelude::*;
use themed_navbar::prelude::*;

use crate::Route;

/// Loads the menu document, then lays the navbar over the routed page.
#[component]
pub fn Shell() -> Element {
    let menu = use_resource(|| async move { MenuSource::detect().load().await });

    let content = match &*menu.read() {
        Some(Ok(document)) => rsx! {
            ThemeProvider { config: document.theme.clone(),
                ThemedPage { document: document.clone() }
            }
        },
        Some(Err(err)) => {
            tracing::error!(%err, "failed to load menu");
            rsx! {
                div { class: "menu-status", role: "alert", "Could not load the menu: {err}" }
            }
        }
        None => rsx! {
            div { class: "menu-status", "Loading menu..." }
        },
    };

    rsx! {
        {content}
    }
}

#[component]
fn ThemedPage(document: MenuDocument) -> Element {
    let theme = use_theme();
    let page_style = format!(
        "color: {}; background: {}; font-family: {}, sans-serif;",
        theme.text_color,
        theme.background_color,
        theme.font.css_name()
    );

    rsx! {
        Navbar {
            brand: document.brand.clone(),
            items: document.items.clone(),
            config: document.config.clone(),
        }
        main { class: "page", style: page_style,
            Outlet::<Route> {}
        }
        ThemeSwitcher {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        h1 { "Welcome" }
        p { "Hover a menu entry to open its dropdown, or resize the window below the breakpoint to get the mobile accordion." }
        ul {
            li { "Enter and Space toggle any entry with a submenu" }
            li { "Clicking outside the menu closes open dropdowns" }
            li { "The button in the corner switches between light and dark" }
        }
    }
}

#[component]
pub fn Section(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let title = segments.last().cloned().unwrap_or_default();

    rsx! {
        h1 { "{title}" }
        p { "You navigated to " code { "{path}" } "." }
        Link { to: Route::Home {}, "Back home" }
    }
}
