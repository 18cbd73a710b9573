//! Navbar configuration and menu documents
//!
//! A menu document bundles the brand, the item tree and optional navbar and
//! theme settings. It can come from bundled JSON, a global set by the host
//! page, or a remote URL.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::browser;
use crate::error::{NavError, NavResult};
use crate::expansion::{ExpansionModel, ID_SEPARATOR};
use crate::hooks::use_theme::ThemeConfig;
use crate::types::{Brand, NavItem};

/// Widths at or below this are treated as mobile.
pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;

/// Global the host page may set to inject a menu document.
pub const MENU_GLOBAL: &str = "NAVBAR_MENU";

/// Global naming a URL to fetch the menu document from.
pub const MENU_URL_GLOBAL: &str = "NAVBAR_MENU_URL";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub breakpoint_px: f64,
    pub expansion_model: ExpansionModel,
    pub close_on_outside_click: bool,
    /// Log level for the demo app (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            expansion_model: ExpansionModel::IdSet,
            close_on_outside_click: true,
            log_level: "info".to_string(),
        }
    }
}

impl NavbarConfig {
    pub fn is_mobile_width(&self, width: f64) -> bool {
        width <= self.breakpoint_px
    }

    /// Parsed `log_level`, falling back to INFO for unknown names.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    pub brand: Brand,
    pub items: Vec<NavItem>,
    #[serde(default)]
    pub config: NavbarConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl MenuDocument {
    pub fn from_json(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a document handed over from JavaScript.
    pub fn from_js(value: wasm_bindgen::JsValue) -> NavResult<Self> {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }

    pub async fn fetch(url: &str) -> NavResult<Self> {
        let document = reqwest::get(url)
            .await?
            .error_for_status()?
            .json::<MenuDocument>()
            .await?;
        Ok(document)
    }

    /// Check the item tree, returning every problem found.
    ///
    /// Problems never stop rendering; they point at ids that will expand or
    /// collapse together unexpectedly.
    pub fn validate(&self) -> Vec<NavError> {
        validate_items(&self.items, self.config.expansion_model)
    }
}

/// Where the menu document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuSource {
    /// The JSON shipped in `assets/menu.json`
    Bundled,
    /// An object the host page stored in `window.NAVBAR_MENU`
    HostGlobal,
    /// A URL the host page stored in `window.NAVBAR_MENU_URL`
    Remote(String),
}

impl MenuSource {
    /// Prefer what the host page provides, falling back to the bundled menu.
    pub fn detect() -> Self {
        if browser::window_global(MENU_GLOBAL).is_some() {
            return MenuSource::HostGlobal;
        }
        if let Some(url) = browser::window_global(MENU_URL_GLOBAL).and_then(|value| value.as_string()) {
            return MenuSource::Remote(url);
        }
        MenuSource::Bundled
    }

    /// Load the document and log any validation problems. Problems are not
    /// fatal; the menu still renders.
    pub async fn load(&self) -> NavResult<MenuDocument> {
        let document = match self {
            MenuSource::Bundled => MenuDocument::from_json(crate::DEMO_MENU)?,
            MenuSource::HostGlobal => {
                let value = browser::window_global(MENU_GLOBAL).ok_or(NavError::NoBrowser("window.NAVBAR_MENU"))?;
                MenuDocument::from_js(value)?
            }
            MenuSource::Remote(url) => MenuDocument::fetch(url).await?,
        };

        for problem in document.validate() {
            tracing::warn!(source = ?self, %problem, "menu document problem");
        }
        tracing::info!(source = ?self, items = document.items.len(), "menu loaded");
        Ok(document)
    }
}

pub fn validate_items(items: &[NavItem], model: ExpansionModel) -> Vec<NavError> {
    let mut problems = Vec::new();
    check_level(items, None, "root", model, &mut problems);
    problems
}

fn check_level(
    items: &[NavItem],
    parent: Option<&str>,
    path: &str,
    model: ExpansionModel,
    problems: &mut Vec<NavError>,
) {
    let mut seen = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        let item_path = format!("{path}/{idx}");

        if item.id.is_empty() {
            problems.push(NavError::EmptyId { path: item_path.clone() });
        } else if !seen.insert(item.id.as_str()) {
            problems.push(NavError::DuplicateId {
                id: item.id.clone(),
                parent: parent.unwrap_or("root").to_string(),
            });
        }

        if model == ExpansionModel::IdSet && !item.id.is_empty() {
            match parent {
                None if item.id.contains(ID_SEPARATOR) => {
                    problems.push(NavError::NestedTopLevelId(item.id.clone()));
                }
                Some(parent_id) if !is_scoped_under(&item.id, parent_id) => {
                    problems.push(NavError::UnscopedId {
                        id: item.id.clone(),
                        parent: parent_id.to_string(),
                    });
                }
                _ => {}
            }
        }

        if item.has_sub_items() {
            check_level(&item.sub_items, Some(&item.id), &item_path, model, problems);
        }
    }
}

fn is_scoped_under(id: &str, parent: &str) -> bool {
    id.strip_prefix(parent)
        .and_then(|rest| rest.strip_prefix(ID_SEPARATOR))
        .is_some_and(|suffix| !suffix.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DisplayMode, FontFamily, Theme};

    const DOC: &str = r##"{
        "brand": { "name": "TechMart", "href": "/", "logo": "grid" },
        "items": [
            { "id": "home", "label": "Home", "href": "/", "icon": "home" },
            {
                "id": "products",
                "label": "Products",
                "sub_items": [
                    { "id": "products-laptops", "label": "Laptops", "href": "/laptops", "display_mode": "text" }
                ]
            }
        ],
        "config": { "breakpoint_px": 600 },
        "theme": { "theme": "dark", "font": "Georgia", "text_color": "#ffffff", "background_color": "#1a1a1a" }
    }"##;

    #[test]
    fn test_parse_document() {
        let doc = MenuDocument::from_json(DOC).unwrap();
        assert_eq!(doc.brand.name, "TechMart");
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[1].sub_items[0].display_mode, DisplayMode::Text);
        assert_eq!(doc.config.breakpoint_px, 600.0);
        // unspecified fields keep their defaults
        assert!(doc.config.close_on_outside_click);
        assert_eq!(doc.config.expansion_model, ExpansionModel::IdSet);
        assert_eq!(doc.theme.theme, Theme::Dark);
        assert_eq!(doc.theme.font, FontFamily::Georgia);
        assert!(doc.validate().is_empty());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = MenuDocument::from_json("{ \"items\": 3 }").unwrap_err();
        assert!(matches!(err, NavError::SerializationError(_)));
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let config = NavbarConfig::default();
        assert!(config.is_mobile_width(768.0));
        assert!(!config.is_mobile_width(769.0));
    }

    #[test]
    fn test_tracing_level() {
        let mut config = NavbarConfig::default();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
        config.log_level = "debug".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
        config.log_level = "chatty".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_validate_reports_duplicates_and_empty_ids() {
        let items = vec![
            NavItem::new("home", "Home"),
            NavItem::new("home", "Home again"),
            NavItem::new("", "Nameless"),
        ];

        let problems = validate_items(&items, ExpansionModel::LevelMap);

        assert_eq!(problems.len(), 2);
        assert!(matches!(&problems[0], NavError::DuplicateId { id, .. } if id == "home"));
        assert!(matches!(&problems[1], NavError::EmptyId { path } if path == "root/2"));
    }

    #[test]
    fn test_validate_checks_id_scoping_for_id_set() {
        let items = vec![
            NavItem::new("products", "Products").with_sub_items(vec![
                NavItem::new("hardware", "Hardware"),
                NavItem::new("products-software", "Software"),
            ]),
            NavItem::new("top-level", "Oops"),
        ];

        let problems = validate_items(&items, ExpansionModel::IdSet);
        assert_eq!(problems.len(), 2);
        assert!(matches!(&problems[0], NavError::UnscopedId { id, parent } if id == "hardware" && parent == "products"));
        assert!(matches!(&problems[1], NavError::NestedTopLevelId(id) if id == "top-level"));

        // the level map does not care about id shape
        assert!(validate_items(&items, ExpansionModel::LevelMap).is_empty());
    }

    #[test]
    fn test_detect_falls_back_to_bundled_outside_browser() {
        assert_eq!(MenuSource::detect(), MenuSource::Bundled);
    }

    #[test]
    fn test_bundled_demo_menu_is_clean() {
        let doc = MenuDocument::from_json(crate::DEMO_MENU).unwrap();
        assert!(doc.validate().is_empty(), "{:?}", doc.validate());
        assert_eq!(doc.brand.name, "TechMart");
    }
}
