use dioxus::prelude::*;

use crate::components::navigation::{Glyph, NavEntry};
use crate::config::NavbarConfig;
use crate::hooks::{use_navbar_listeners, use_navbar_state, use_theme};
use crate::style::navbar_css_vars;
use crate::types::{Brand, ExpandRequest, IconKind, NavIcon, NavItem};

/// Brand plus the top level of the menu tree.
///
/// Owns all interaction state. Entries only read the expansion snapshot and
/// send toggle requests back up. `initial_width` seeds the layout mode before
/// the first resize event; without it the window width is measured.
#[component]
pub fn Navbar(
    brand: Brand,
    items: Vec<NavItem>,
    #[props(default)] config: NavbarConfig,
    initial_width: Option<f64>,
) -> Element {
    let theme = use_theme();
    let mut state = use_navbar_state(config, initial_width);
    let mut menubar = use_signal(|| None::<web_sys::Element>);
    use_navbar_listeners(state, menubar);

    let handle_expand_item = EventHandler::new(move |request: ExpandRequest| {
        state.write().handle_expand_item(&request);
    });
    let handle_nav_close = EventHandler::new(move |_: ()| {
        state.write().handle_nav_close();
    });

    let snapshot = state.read().clone();
    let is_mobile = snapshot.is_mobile;
    let is_open = snapshot.is_open;

    let mut items_class = String::from("nav-items");
    if is_mobile {
        items_class.push_str(" mobile");
    }
    if is_open {
        items_class.push_str(" open");
    }

    let logo = brand.logo.clone().map(|icon| rsx! { Glyph { icon, class: "brand-logo".to_string() } });
    let toggle_icon = if is_open { IconKind::Close } else { IconKind::Menu };

    rsx! {
        nav {
            class: "navbar",
            role: "navigation",
            aria_label: "Main navigation",
            "data-theme": "{theme.theme}",
            style: navbar_css_vars(&theme),

            div { class: "brand",
                a { href: "{brand.href}", class: "brand-link",
                    {logo}
                    span { class: "brand-name", "{brand.name}" }
                }

                if is_mobile {
                    button {
                        class: "menu-toggle",
                        aria_expanded: "{is_open}",
                        aria_label: "Toggle navigation menu",
                        onclick: move |_| state.write().toggle_menu(),
                        Glyph { icon: NavIcon::Builtin(toggle_icon) }
                    }
                }
            }

            div {
                class: "{items_class}",
                role: "menubar",
                aria_label: "Main menu",
                onmounted: move |event| {
                    if let Some(element) = event.data().downcast::<web_sys::Element>() {
                        menubar.set(Some(element.clone()));
                    }
                },
                for item in items.iter() {
                    NavEntry {
                        key: "{item.id}",
                        item: item.clone(),
                        is_mobile,
                        on_expand: handle_expand_item,
                        expansion: snapshot.expansion.clone(),
                        on_nav_close: handle_nav_close,
                        overrides: item.style_overrides(),
                    }
                }
            }
        }
    }
}
