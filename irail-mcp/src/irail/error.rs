//! iRail client error types.

/// Errors from the iRail HTTP client.
///
/// The status-code variants carry the messages shown to tool users, so
/// their `Display` output is deliberately phrased for people.
#[derive(Debug, thiserror::Error)]
pub enum IrailError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the API (HTTP 429)
    #[error("Rate limit exceeded. iRail API allows 3 requests/second.")]
    RateLimited,

    /// Unknown station, vehicle or route (HTTP 404)
    #[error("Station or resource not found.")]
    NotFound,

    /// The API failed on its side (HTTP 5xx)
    #[error("iRail API server error ({status}). Please try again later.")]
    Server { status: u16 },

    /// Any other non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client configuration is unusable
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl IrailError {
    /// Map a non-success HTTP status to an error.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            429 => IrailError::RateLimited,
            404 => IrailError::NotFound,
            s if s >= 500 => IrailError::Server { status: s },
            s => IrailError::Api {
                status: s,
                message: body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            IrailError::from_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            IrailError::RateLimited
        ));
        assert!(matches!(
            IrailError::from_status(StatusCode::NOT_FOUND, String::new()),
            IrailError::NotFound
        ));
        assert!(matches!(
            IrailError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            IrailError::Server { status: 502 }
        ));
        assert!(matches!(
            IrailError::from_status(StatusCode::BAD_REQUEST, "bad date".into()),
            IrailError::Api { status: 400, .. }
        ));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            IrailError::RateLimited.to_string(),
            "Rate limit exceeded. iRail API allows 3 requests/second."
        );
        assert_eq!(
            IrailError::NotFound.to_string(),
            "Station or resource not found."
        );
        assert_eq!(
            IrailError::Server { status: 503 }.to_string(),
            "iRail API server error (503). Please try again later."
        );
        assert_eq!(
            IrailError::Api {
                status: 400,
                message: "bad date".into()
            }
            .to_string(),
            "API error 400: bad date"
        );
    }
}
