//! Error types for menu loading and validation

use thiserror::Error;

/// Errors raised while loading or checking a menu document.
///
/// The components themselves never fail; these only surface from the
/// loaders in [`crate::config`] and from browser listener setup.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Menu item at {path} has an empty id")]
    EmptyId { path: String },

    #[error("Duplicate id '{id}' under {parent}")]
    DuplicateId { id: String, parent: String },

    #[error("Item '{id}' is not scoped under its parent '{parent}' (expected '{parent}-...')")]
    UnscopedId { id: String, parent: String },

    #[error("Top-level item '{0}' contains '-' and would be treated as nested")]
    NestedTopLevelId(String),

    #[error("Browser API unavailable: {0}")]
    NoBrowser(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Failed to fetch menu: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl NavError {
    /// Wrap a thrown JS value, keeping its string form when it has one.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        NavError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_wasm_bindgen::Error> for NavError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        NavError::Js(err.to_string())
    }
}

/// Result type for menu operations
pub type NavResult<T> = Result<T, NavError>;
