//! Build-time configuration for the backend and Keycloak endpoints with an
//! optional runtime override. The runtime config is read from
//! `window.OAUTH_LAB_CONFIG` (if present) so static deployments can change
//! endpoints without rebuilding. Configuration values are public; do not store
//! secrets here.

use crate::app_lib::AppError;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";
const DEFAULT_REALM_URL: &str = "http://localhost:7000/realms/oauth-demo";
const DEFAULT_CLIENT_ID: &str = "Spring-Client";
const DEFAULT_POST_LOGOUT_REDIRECT_URI: &str = "http://localhost:5173";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Keycloak realm URL, e.g. `https://sso.example.com/realms/oauth-demo`.
    pub realm_url: String,
    pub client_id: String,
    pub post_logout_redirect_uri: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            realm_url: DEFAULT_REALM_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            post_logout_redirect_uri: DEFAULT_POST_LOGOUT_REDIRECT_URI.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("OAUTH_LAB_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            realm_url: option_env!("OAUTH_LAB_REALM_URL")
                .unwrap_or(DEFAULT_REALM_URL)
                .to_string(),
            client_id: option_env!("OAUTH_LAB_CLIENT_ID")
                .unwrap_or(DEFAULT_CLIENT_ID)
                .to_string(),
            post_logout_redirect_uri: option_env!("OAUTH_LAB_POST_LOGOUT_REDIRECT_URI")
                .unwrap_or(DEFAULT_POST_LOGOUT_REDIRECT_URI)
                .to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Builds the Keycloak end-session URL that also terminates the provider-side
    /// session, so the next sign-in prompts for credentials again.
    pub fn logout_url(&self) -> Result<String, AppError> {
        let endpoint = format!(
            "{}/protocol/openid-connect/logout",
            self.realm_url.trim().trim_end_matches('/')
        );
        let url = Url::parse_with_params(
            &endpoint,
            &[
                ("client_id", self.client_id.trim()),
                (
                    "post_logout_redirect_uri",
                    self.post_logout_redirect_uri.trim(),
                ),
            ],
        )
        .map_err(|err| AppError::Config(format!("Invalid Keycloak realm URL: {err}")))?;

        Ok(url.into())
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    realm_url: Option<String>,
    client_id: Option<String>,
    post_logout_redirect_uri: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.realm_url {
        config.realm_url = value;
    }
    if let Some(value) = runtime.client_id {
        config.client_id = value;
    }
    if let Some(value) = runtime.post_logout_redirect_uri {
        config.post_logout_redirect_uri = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("OAUTH_LAB_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        realm_url: read_runtime_value(&object, "realm_url"),
        client_id: read_runtime_value(&object, "client_id"),
        post_logout_redirect_uri: read_runtime_value(&object, "post_logout_redirect_uri"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
