use dioxus::prelude::*;

use crate::components::navigation::Glyph;
use crate::hooks::use_theme_context;
use crate::types::{IconKind, NavIcon, Theme};

/// Floating light/dark toggle. Renders nothing without a toggleable provider.
#[component]
pub fn ThemeSwitcher() -> Element {
    let Some(mut ctx) = use_theme_context().filter(|ctx| ctx.is_toggleable()) else {
        return rsx! {};
    };

    let theme = ctx.config().theme;
    let (icon, label, target) = match theme {
        Theme::Light => (IconKind::Moon, "Dark Mode", Theme::Dark),
        Theme::Dark => (IconKind::Sun, "Light Mode", Theme::Light),
    };

    rsx! {
        button {
            class: "theme-switcher",
            "data-theme": "{theme}",
            aria_label: "Switch to {target} mode",
            onclick: move |_| {
                ctx.toggle_theme();
            },
            Glyph { icon: NavIcon::Builtin(icon) }
            " {label}"
        }
    }
}
