use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Helvetica,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Georgia,
    Verdana,
}

impl FontFamily {
    /// CSS `font-family` value
    pub fn css_name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Georgia => "Georgia",
            FontFamily::Verdana => "Verdana",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Text,
    Icon,
    #[default]
    Mixed,
}

/// Built-in glyphs shipped with the crate (Feather icon set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Home,
    ShoppingBag,
    Monitor,
    Smartphone,
    HardDrive,
    Code,
    Server,
    Layers,
    Grid,
    LifeBuoy,
    User,
    Settings,
    Sun,
    Moon,
    Menu,
    Close,
    ChevronDown,
    ChevronRight,
}

/// Icon for a menu entry or the brand logo.
///
/// In a menu document this is either a built-in glyph name (`"home"`) or raw
/// SVG markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavIcon {
    Builtin(IconKind),
    Svg(String),
}

impl From<IconKind> for NavIcon {
    fn from(kind: IconKind) -> Self {
        NavIcon::Builtin(kind)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub logo: Option<NavIcon>,
    pub name: String,
    pub href: String,
}

/// One node of the menu tree. Owned, so the tree is finite and acyclic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub icon: Option<NavIcon>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<NavItem>,
    #[serde(default)]
    pub text_color_override: Option<String>,
    #[serde(default)]
    pub background_color_override: Option<String>,
    #[serde(default)]
    pub font_override: Option<FontFamily>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<NavIcon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_sub_items(mut self, sub_items: Vec<NavItem>) -> Self {
        self.sub_items = sub_items;
        self
    }

    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// The item's own style overrides, ignoring any ancestor.
    pub fn style_overrides(&self) -> StyleOverrides {
        StyleOverrides {
            text_color: self.text_color_override.clone(),
            background_color: self.background_color_override.clone(),
            font: self.font_override,
        }
    }
}

/// Per-entry style overrides; any `None` falls back to the theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleOverrides {
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub font: Option<FontFamily>,
}

/// Request sent from an entry to the navbar to toggle its expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandRequest {
    pub id: String,
    pub level: usize,
}

impl ExpandRequest {
    pub fn new(id: impl Into<String>, level: usize) -> Self {
        Self {
            id: id.into(),
            level,
        }
    }
}
