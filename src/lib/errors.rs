use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    /// Rejected locally before any request was sent.
    Validation(String),
    /// The backend answered with an `{error}` envelope; the message is shown verbatim.
    Rejected(String),
    Network(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    /// A browser API (storage, cookies, history, location) refused the call.
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Validation(message) | AppError::Rejected(message) => {
                write!(formatter, "{message}")
            }
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Browser(message) => write!(formatter, "Browser error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn backend_messages_display_verbatim() {
        let err = AppError::Rejected("Invalid email or password".to_string());
        assert_eq!(err.to_string(), "Invalid email or password");

        let err = AppError::Validation("Passwords do not match".to_string());
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn http_errors_include_status() {
        let err = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (500): boom");
    }
}
