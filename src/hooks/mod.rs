pub mod use_navbar_state;
pub mod use_theme;

pub use use_navbar_state::{use_navbar_listeners, use_navbar_state, NavbarState};
pub use use_theme::{use_theme, use_theme_context, ThemeConfig, ThemeContext, ThemeProvider};
