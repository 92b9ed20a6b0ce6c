//! Helpers for the Keycloak round trip: reading the `code`/`error` parameters
//! the provider appends on return, and cache-busting the authorization URL.

use url::form_urlencoded;

/// Cosmetic pause between showing the processing view and exchanging the code.
pub const CODE_EXCHANGE_DELAY_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthCallback {
    /// The provider reported a failure such as `access_denied`.
    Error(String),
    Code(String),
    Absent,
}

/// Reads the callback parameters from a query string. `error` wins over `code`;
/// empty values count as absent and only the first occurrence of a key is used.
pub fn parse_callback(search: &str) -> OAuthCallback {
    let query = search.trim().trim_start_matches('?');
    let first_value = |key: &str| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    };

    if let Some(error) = first_value("error") {
        OAuthCallback::Error(error)
    } else if let Some(code) = first_value("code") {
        OAuthCallback::Code(code)
    } else {
        OAuthCallback::Absent
    }
}

/// Appends `_t=<timestamp>` so the browser never serves a cached authorization page.
pub fn cache_busted(url: &str, timestamp_ms: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}_t={timestamp_ms}")
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{OAuthCallback, cache_busted, parse_callback};

    #[test]
    fn code_is_read_with_or_without_question_mark() {
        assert_eq!(
            parse_callback("?code=abc&state=random-state-value"),
            OAuthCallback::Code("abc".to_string())
        );
        assert_eq!(
            parse_callback("session_state=s1&code=abc"),
            OAuthCallback::Code("abc".to_string())
        );
    }

    #[test]
    fn error_takes_precedence_over_code() {
        assert_eq!(
            parse_callback("?code=abc&error=access_denied"),
            OAuthCallback::Error("access_denied".to_string())
        );
    }

    #[test]
    fn empty_values_count_as_absent() {
        assert_eq!(parse_callback("?code=&error="), OAuthCallback::Absent);
        assert_eq!(parse_callback(""), OAuthCallback::Absent);
        assert_eq!(parse_callback("?state=x"), OAuthCallback::Absent);
        assert_eq!(
            parse_callback("?error=&code=abc"),
            OAuthCallback::Code("abc".to_string())
        );
    }

    #[test]
    fn values_are_percent_decoded() {
        assert_eq!(
            parse_callback("?error=temporarily%20unavailable"),
            OAuthCallback::Error("temporarily unavailable".to_string())
        );
        assert_eq!(
            parse_callback("?code=a%2Bb.c"),
            OAuthCallback::Code("a+b.c".to_string())
        );
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(
            parse_callback("?code=first&code=second"),
            OAuthCallback::Code("first".to_string())
        );
    }

    #[test]
    fn cache_buster_picks_separator() {
        assert_eq!(
            cache_busted("http://sso/auth?client_id=x", 42),
            "http://sso/auth?client_id=x&_t=42"
        );
        assert_eq!(cache_busted("http://sso/auth", 42), "http://sso/auth?_t=42");
    }
}
