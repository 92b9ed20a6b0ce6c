use crate::app_lib::{AppError, api::RawResponse};
#[cfg(target_arch = "wasm32")]
use crate::{app_lib::config::AppConfig, features::auth::client::paths};

/// Fetches the backend status line from `/oauth/health`.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_health() -> Result<String, AppError> {
    let config = AppConfig::load();
    let response = crate::app_lib::api::get_text(&config.api_base_url, paths::OAUTH_HEALTH).await?;
    decode_health(response)
}

pub fn decode_health(response: RawResponse) -> Result<String, AppError> {
    if !response.ok() {
        return Err(response.into_http_error());
    }
    let status = response.body.trim();
    if status.is_empty() {
        return Err(AppError::Parse("Empty health response.".to_string()));
    }
    Ok(status.to_string())
}

#[cfg(test)]
mod tests {
    use super::decode_health;
    use crate::app_lib::{AppError, api::RawResponse};

    #[test]
    fn healthy_backend_returns_status_line() {
        let status = decode_health(RawResponse {
            status: 200,
            body: "OAuth Backend is running!\n".to_string(),
        })
        .expect("status");
        assert_eq!(status, "OAuth Backend is running!");
    }

    #[test]
    fn unhealthy_or_empty_responses_fail() {
        assert!(matches!(
            decode_health(RawResponse {
                status: 503,
                body: String::new(),
            }),
            Err(AppError::Http { status: 503, .. })
        ));
        assert!(matches!(
            decode_health(RawResponse {
                status: 200,
                body: "  ".to_string(),
            }),
            Err(AppError::Parse(_))
        ));
    }
}
