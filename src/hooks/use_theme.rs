use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{FontFamily, Theme};

pub const LIGHT_TEXT_COLOR: &str = "#333333";
pub const LIGHT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DARK_TEXT_COLOR: &str = "#ffffff";
pub const DARK_BACKGROUND_COLOR: &str = "#1a1a1a";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub font: FontFamily,
    pub text_color: String,
    pub background_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::for_theme(Theme::Light, FontFamily::Arial)
    }
}

impl ThemeConfig {
    /// Stock palette for a theme
    pub fn for_theme(theme: Theme, font: FontFamily) -> Self {
        let (text_color, background_color) = match theme {
            Theme::Light => (LIGHT_TEXT_COLOR, LIGHT_BACKGROUND_COLOR),
            Theme::Dark => (DARK_TEXT_COLOR, DARK_BACKGROUND_COLOR),
        };
        Self {
            theme,
            font,
            text_color: text_color.to_string(),
            background_color: background_color.to_string(),
        }
    }

    /// Switch light/dark, swapping in the stock palette and keeping the font.
    pub fn toggle(&mut self) {
        *self = Self::for_theme(self.theme.toggled(), self.font);
    }
}

/// Theme shared through context. Only the provider's owner may toggle it.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    config: Signal<ThemeConfig>,
    toggleable: bool,
}

impl ThemeContext {
    pub fn new(config: ThemeConfig, toggleable: bool) -> Self {
        Self {
            config: Signal::new(config),
            toggleable,
        }
    }

    pub fn config(&self) -> ThemeConfig {
        self.config.read().clone()
    }

    pub fn is_toggleable(&self) -> bool {
        self.toggleable
    }

    /// Flip light/dark. Returns false when the provider was created fixed.
    pub fn toggle_theme(&mut self) -> bool {
        if !self.toggleable {
            return false;
        }
        self.config.write().toggle();
        tracing::debug!(theme = %self.config.peek().theme, "theme toggled");
        true
    }

    /// Adopt a config passed down by the provider's parent. Returns false
    /// when it matches what is already shown.
    pub fn sync_config(&mut self, config: ThemeConfig) -> bool {
        if *self.config.peek() == config {
            return false;
        }
        self.config.set(config);
        true
    }
}

pub fn use_theme_context() -> Option<ThemeContext> {
    try_use_context::<ThemeContext>()
}

/// Current theme, or the default light theme when no provider is mounted.
pub fn use_theme() -> ThemeConfig {
    use_theme_context()
        .map(|ctx| ctx.config())
        .unwrap_or_default()
}

#[component]
pub fn ThemeProvider(
    #[props(default)] config: ThemeConfig,
    #[props(default = true)] toggleable: bool,
    children: Element,
) -> Element {
    let mut ctx = use_context_provider(|| ThemeContext::new(config.clone(), toggleable));

    // A toggle sticks until the parent hands down a different config.
    use_effect(use_reactive!(|config| {
        ctx.sync_config(config);
    }));

    rsx! {
        {children}
    }
}
