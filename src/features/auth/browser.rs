//! `web-sys` bindings for the auth ports.

use crate::{
    app_lib::AppError,
    features::auth::{
        ports::{Navigator, SessionStorage},
        session::expired_cookie_assignments,
    },
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Storage, Window};

fn window() -> Result<Window, AppError> {
    web_sys::window().ok_or_else(|| AppError::Browser("No window available.".to_string()))
}

fn js_error(context: &str, err: &JsValue) -> AppError {
    AppError::Browser(format!("{context}: {err:?}"))
}

fn local_storage() -> Result<Storage, AppError> {
    window()?
        .local_storage()
        .map_err(|err| js_error("localStorage unavailable", &err))?
        .ok_or_else(|| AppError::Browser("localStorage unavailable.".to_string()))
}

fn html_document() -> Result<HtmlDocument, AppError> {
    window()?
        .document()
        .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
        .ok_or_else(|| AppError::Browser("No HTML document available.".to_string()))
}

/// `localStorage`, `sessionStorage` and `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| js_error("Failed to read storage", &err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| js_error("Failed to write storage", &err))
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| js_error("Failed to remove storage item", &err))
    }

    fn clear_session(&self) -> Result<(), AppError> {
        let Some(storage) = window()?
            .session_storage()
            .map_err(|err| js_error("sessionStorage unavailable", &err))?
        else {
            return Ok(());
        };
        storage
            .clear()
            .map_err(|err| js_error("Failed to clear sessionStorage", &err))
    }

    fn expire_cookies(&self) -> Result<(), AppError> {
        let document = html_document()?;
        let cookies = document
            .cookie()
            .map_err(|err| js_error("Failed to read cookies", &err))?;
        for assignment in expired_cookie_assignments(&cookies) {
            document
                .set_cookie(&assignment)
                .map_err(|err| js_error("Failed to expire cookie", &err))?;
        }
        Ok(())
    }
}

/// `window.location` and `window.history`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn strip_query(&self) -> Result<(), AppError> {
        let window = window()?;
        let path = window
            .location()
            .pathname()
            .map_err(|err| js_error("Failed to read location", &err))?;
        window
            .history()
            .map_err(|err| js_error("History unavailable", &err))?
            .replace_state_with_url(&JsValue::NULL, "", Some(&path))
            .map_err(|err| js_error("Failed to replace history entry", &err))
    }

    fn assign(&self, url: &str) -> Result<(), AppError> {
        window()?
            .location()
            .set_href(url)
            .map_err(|err| js_error("Failed to navigate", &err))
    }
}
