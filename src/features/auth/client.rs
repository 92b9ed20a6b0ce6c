//! Client wrappers for the OAuth Lab auth endpoints. The [`AuthApi`] trait is the
//! seam the controller drives; [`HttpAuthApi`] is the browser implementation.
//! Response decoding lives in plain functions so it runs without a browser.

use crate::{
    app_lib::{AppError, api::RawResponse},
    features::auth::types::{LoginRequest, RegisterRequest, SessionUser, UserEnvelope},
};
use url::{Url, form_urlencoded};

pub(crate) mod paths {
    pub const LOGIN: &str = "/api/users/login";
    pub const REGISTER: &str = "/api/users/register";
    pub const OAUTH_AUTHORIZE: &str = "/oauth/authorize";
    pub const OAUTH_CALLBACK: &str = "/oauth/callback";
    pub const OAUTH_HEALTH: &str = "/oauth/health";
}

/// Fallback shown when a rejected login carries no `error` message.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback shown when a rejected registration carries no `error` message.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Backend operations used by the auth flows. Each call is sent once.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Must never log the password.
    async fn login(&self, request: &LoginRequest) -> Result<SessionUser, AppError>;
    /// Must never log the password.
    async fn register(&self, request: &RegisterRequest) -> Result<SessionUser, AppError>;
    /// Returns the Keycloak authorization URL prepared by the backend.
    async fn authorization_url(&self) -> Result<String, AppError>;
    /// Hands the authorization code to the backend, which performs the token exchange.
    async fn exchange_code(&self, code: &str) -> Result<SessionUser, AppError>;
}

/// Path of the code exchange endpoint with the code form-encoded in the query.
pub fn callback_path(code: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("code", code)
        .finish();
    format!("{}?{query}", paths::OAUTH_CALLBACK)
}

/// Decodes the `{user}` / `{error}` envelope of login and registration.
/// The body is decoded before the status is looked at, so a non-JSON body is a
/// `Parse` error whatever the status. A rejection without a message uses `fallback`.
pub fn decode_user_envelope(response: RawResponse, fallback: &str) -> Result<SessionUser, AppError> {
    let envelope: UserEnvelope = serde_json::from_str(&response.body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))?;

    if response.ok() {
        envelope
            .user
            .ok_or_else(|| AppError::Parse("Response is missing the user.".to_string()))
    } else {
        let message = envelope
            .error
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(AppError::Rejected(message))
    }
}

/// Decodes the code exchange response; any non-2xx status is a failure.
pub fn decode_exchange(response: RawResponse) -> Result<SessionUser, AppError> {
    if !response.ok() {
        return Err(response.into_http_error());
    }
    let envelope: UserEnvelope = serde_json::from_str(&response.body)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))?;
    envelope
        .user
        .ok_or_else(|| AppError::Parse("Response is missing the user.".to_string()))
}

/// Validates the plain-text authorization URL returned by the backend.
pub fn decode_authorization_url(response: RawResponse) -> Result<String, AppError> {
    if !response.ok() {
        return Err(response.into_http_error());
    }
    let candidate = response.body.trim();
    Url::parse(candidate)
        .map_err(|err| AppError::Parse(format!("Invalid authorization URL: {err}")))?;
    Ok(candidate.to_string())
}

/// Browser implementation backed by `fetch`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<SessionUser, AppError> {
        let response = crate::app_lib::api::post_json(&self.base_url, paths::LOGIN, request).await?;
        decode_user_envelope(response, LOGIN_FAILED)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<SessionUser, AppError> {
        let response =
            crate::app_lib::api::post_json(&self.base_url, paths::REGISTER, request).await?;
        decode_user_envelope(response, REGISTRATION_FAILED)
    }

    async fn authorization_url(&self) -> Result<String, AppError> {
        let response =
            crate::app_lib::api::get_text(&self.base_url, paths::OAUTH_AUTHORIZE).await?;
        decode_authorization_url(response)
    }

    async fn exchange_code(&self, code: &str) -> Result<SessionUser, AppError> {
        let response =
            crate::app_lib::api::post_empty(&self.base_url, &callback_path(code)).await?;
        decode_exchange(response)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LOGIN_FAILED, callback_path, decode_authorization_url, decode_exchange,
        decode_user_envelope,
    };
    use crate::app_lib::{AppError, api::RawResponse};

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn callback_path_encodes_code() {
        assert_eq!(callback_path("abc"), "/oauth/callback?code=abc");
        assert_eq!(
            callback_path("a b&c=d"),
            "/oauth/callback?code=a+b%26c%3Dd"
        );
    }

    #[test]
    fn successful_login_yields_user() {
        let user = decode_user_envelope(
            response(
                200,
                r#"{"message":"Login successful","user":{"id":3,"name":"Ada","email":"ada@example.com"}}"#,
            ),
            LOGIN_FAILED,
        )
        .expect("user");

        assert_eq!(user.id, 3);
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn rejection_surfaces_backend_message_verbatim() {
        let err = decode_user_envelope(
            response(400, r#"{"error":"Invalid email or password"}"#),
            LOGIN_FAILED,
        )
        .expect_err("rejected");

        assert_eq!(err, AppError::Rejected("Invalid email or password".to_string()));
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        for body in [r"{}", r#"{"error":""}"#] {
            let err = decode_user_envelope(response(400, body), LOGIN_FAILED).expect_err("rejected");
            assert_eq!(err, AppError::Rejected(LOGIN_FAILED.to_string()));
        }
    }

    #[test]
    fn non_json_body_is_a_parse_error_even_on_error_status() {
        let err = decode_user_envelope(response(502, "<html>Bad Gateway</html>"), LOGIN_FAILED)
            .expect_err("parse");
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn success_without_user_is_a_parse_error() {
        let err = decode_user_envelope(response(200, r#"{"message":"ok"}"#), LOGIN_FAILED)
            .expect_err("parse");
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn exchange_requires_success_status() {
        let err = decode_exchange(response(
            500,
            r#"{"error":"Failed to exchange code for tokens: 400 Bad Request"}"#,
        ))
        .expect_err("http");
        assert!(matches!(err, AppError::Http { status: 500, .. }));

        let user = decode_exchange(response(
            200,
            r#"{"tokens":{},"user":{"id":9,"name":"Kc","email":"kc@example.com","authProvider":"KEYCLOAK"}}"#,
        ))
        .expect("user");
        assert_eq!(user.auth_provider.as_deref(), Some("KEYCLOAK"));
    }

    #[test]
    fn authorization_url_must_be_absolute() {
        let url = decode_authorization_url(response(
            200,
            " http://sso/realms/oauth-demo/protocol/openid-connect/auth?response_type=code\n",
        ))
        .expect("url");
        assert_eq!(
            url,
            "http://sso/realms/oauth-demo/protocol/openid-connect/auth?response_type=code"
        );

        assert!(matches!(
            decode_authorization_url(response(200, "")),
            Err(AppError::Parse(_))
        ));
        assert!(matches!(
            decode_authorization_url(response(503, "down")),
            Err(AppError::Http { status: 503, .. })
        ));
    }
}
