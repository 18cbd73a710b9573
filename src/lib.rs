//! themed-navbar - a responsive, themeable navigation bar for Dioxus
//!
//! The navbar renders a brand link and a tree of nested menu entries:
//! - Dropdowns open on hover (desktop) or tap (mobile accordion)
//! - Enter / Space toggle any entry that has a submenu
//! - Clicking outside the menu collapses it on desktop
//! - Colours and font come from a shared theme, overridable per entry
//!
//! ## Example
//! ```rust,ignore
//! use dioxus::prelude::*;
//! use themed_navbar::prelude::*;
//!
//! #[component]
//! fn App() -> Element {
//!     let brand = Brand { logo: Some(IconKind::Grid.into()), name: "TechMart".into(), href: "/".into() };
//!     let items = vec![
//!         NavItem::new("home", "Home").with_href("/"),
//!         NavItem::new("support", "Support").with_sub_items(vec![
//!             NavItem::new("support-docs", "Documentation").with_href("/support/docs"),
//!         ]),
//!     ];
//!
//!     rsx! {
//!         ThemeProvider {
//!             Navbar { brand, items }
//!         }
//!     }
//! }
//! ```

pub mod browser;
pub mod components;
pub mod config;
pub mod error;
pub mod expansion;
pub mod hooks;
pub mod interaction;
pub mod style;
pub mod types;

/// Menu used by the demo app when the host page supplies none.
pub const DEMO_MENU: &str = include_str!("../assets/menu.json");

pub mod prelude {
    pub use crate::components::navigation::{Glyph, NavEntry, Navbar, ThemeSwitcher};
    pub use crate::config::{MenuDocument, MenuSource, NavbarConfig};
    pub use crate::error::{NavError, NavResult};
    pub use crate::expansion::{ExpansionModel, ExpansionState};
    pub use crate::hooks::{use_theme, use_theme_context, ThemeConfig, ThemeContext, ThemeProvider};
    pub use crate::types::{
        Brand, DisplayMode, ExpandRequest, FontFamily, IconKind, NavIcon, NavItem, StyleOverrides, Theme,
    };
}
