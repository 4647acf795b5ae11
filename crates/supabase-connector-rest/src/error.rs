use std::fmt;

use serde_json::Value as JsonValue;

/// Which of the three failure modes an [`ApiError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    NotConfigured,
    TransportFailure,
    HttpError,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "api_not_configured"),
            Self::TransportFailure => write!(f, "transport_failure"),
            Self::HttpError => write!(f, "api_error"),
        }
    }
}

/// Errors returned by every [`RestClient`](crate::RestClient) operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// URL or key missing. No request was attempted.
    #[error("The Supabase API is not configured")]
    NotConfigured,

    /// The request never produced an HTTP response (DNS, connect, timeout, bad URL).
    #[error("Supabase request failed: {message}")]
    TransportFailure {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The backend answered with a status outside 2xx.
    #[error("Supabase API error: {message}")]
    HttpError {
        status_code: u16,
        message: String,
        body: Option<JsonValue>,
    },
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            message: message.into(),
            source: None,
        }
    }

    /// Build an `HttpError`, taking the message from the body's `message`
    /// field when present and falling back to the numeric status.
    pub fn http(status_code: u16, body: Option<JsonValue>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(message_text)
            .unwrap_or_else(|| status_code.to_string());
        Self::HttpError {
            status_code,
            message,
            body,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::NotConfigured => ApiErrorKind::NotConfigured,
            Self::TransportFailure { .. } => ApiErrorKind::TransportFailure,
            Self::HttpError { .. } => ApiErrorKind::HttpError,
        }
    }

    /// The bare message, without the display prefix.
    pub fn message(&self) -> String {
        match self {
            Self::NotConfigured => self.to_string(),
            Self::TransportFailure { message, .. } | Self::HttpError { message, .. } => {
                message.clone()
            }
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&JsonValue> {
        match self {
            Self::HttpError { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else {
            err.to_string()
        };
        Self::TransportFailure {
            message,
            source: Some(err),
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::transport(format!("invalid API URL: {}", err))
    }
}

fn message_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn http_error_uses_body_message() {
        let err = ApiError::http(404, Some(json!({"message": "no table"})));
        assert_eq!(err.kind(), ApiErrorKind::HttpError);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.message(), "no table");
        assert_eq!(err.to_string(), "Supabase API error: no table");
    }

    #[test]
    fn http_error_falls_back_to_status() {
        let err = ApiError::http(500, None);
        assert_eq!(err.message(), "500");
        assert!(err.body().is_none());

        let err = ApiError::http(400, Some(json!({"code": "PGRST100"})));
        assert_eq!(err.message(), "400");
        assert_eq!(err.body(), Some(&json!({"code": "PGRST100"})));
    }

    #[test]
    fn http_error_null_message_falls_back() {
        let err = ApiError::http(409, Some(json!({"message": null})));
        assert_eq!(err.message(), "409");
    }

    #[test]
    fn not_configured_display() {
        let err = ApiError::NotConfigured;
        assert_eq!(err.kind(), ApiErrorKind::NotConfigured);
        assert_eq!(err.message(), "The Supabase API is not configured");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn transport_display() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.kind(), ApiErrorKind::TransportFailure);
        assert_eq!(err.to_string(), "Supabase request failed: connection refused");
    }

    #[test]
    fn url_parse_error_is_transport() {
        let err: ApiError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.kind(), ApiErrorKind::TransportFailure);
        assert!(err.message().starts_with("invalid API URL"));
    }

    #[test]
    fn kind_display() {
        assert_eq!(ApiErrorKind::HttpError.to_string(), "api_error");
        assert_eq!(ApiErrorKind::NotConfigured.to_string(), "api_not_configured");
    }
}
