//! Browser capabilities the auth flows depend on. The wasm build binds them to
//! `web-sys` in [`super::browser`]; tests use the fakes in `testing`.

use crate::app_lib::AppError;

/// `localStorage`-style key/value store plus the other script-visible state the
/// flows wipe on sign-out.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
    /// Clears per-tab storage (`sessionStorage`).
    fn clear_session(&self) -> Result<(), AppError>;
    /// Expires every cookie readable from script. `HttpOnly` cookies are out of reach.
    fn expire_cookies(&self) -> Result<(), AppError>;
}

/// Page location and top-level navigation.
pub trait Navigator {
    /// Current query string, with or without the leading `?`.
    fn search(&self) -> String;
    /// Replaces the current history entry with the bare path so a refresh cannot
    /// replay the query.
    fn strip_query(&self) -> Result<(), AppError>;
    /// Leaves the app for `url`.
    fn assign(&self, url: &str) -> Result<(), AppError>;
}
