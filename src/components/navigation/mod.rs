pub mod icons;
pub mod nav_entry;
pub mod navbar;
pub mod theme_switcher;

pub use icons::Glyph;
pub use nav_entry::NavEntry;
pub use navbar::Navbar;
pub use theme_switcher::ThemeSwitcher;
