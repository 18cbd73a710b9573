use crate::hooks::use_theme::ThemeConfig;
use crate::types::{FontFamily, StyleOverrides};

/// Fully resolved colours and font for one menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStyle {
    pub text_color: String,
    pub background_color: String,
    pub font: FontFamily,
}

impl ItemStyle {
    /// Explicit override wins; anything missing comes from the theme.
    pub fn resolve(overrides: &StyleOverrides, theme: &ThemeConfig) -> Self {
        Self {
            text_color: overrides
                .text_color
                .clone()
                .unwrap_or_else(|| theme.text_color.clone()),
            background_color: overrides
                .background_color
                .clone()
                .unwrap_or_else(|| theme.background_color.clone()),
            font: overrides.font.unwrap_or(theme.font),
        }
    }

    /// CSS custom properties consumed by the stylesheet.
    pub fn css_vars(&self) -> String {
        format!(
            "--item-text-color: {}; --item-bg-color: {}; --item-font: {};",
            self.text_color,
            self.background_color,
            self.font.css_name()
        )
    }
}

/// Custom properties on the navbar root.
pub fn navbar_css_vars(theme: &ThemeConfig) -> String {
    format!(
        "--nav-font-family: {}; --nav-text-color: {}; --nav-bg-color: {};",
        theme.font.css_name(),
        theme.text_color,
        theme.background_color
    )
}
