/// Error types shared across the app
use thiserror::Error;

/// Failures talking to the generation backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("{endpoint} response is missing `{field}`")]
    MissingField { endpoint: String, field: &'static str },
}

/// Failures from the membership service bridge
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("membership service error: {0}")]
    Bridge(String),

    #[error("could not read member: {0}")]
    Decode(String),

    #[error("no signed-in member")]
    SignedOut,
}

/// Rejected content submissions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please paste some content first.")]
    Blank,

    #[error("That doesn't look like a valid URL: {0}")]
    InvalidUrl(String),

    #[error("Only http and https links are supported (got {0}).")]
    UnsupportedScheme(String),
}

/// Render target failures, absorbed by the renderer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("render target is not mounted")]
    NotReady,

    #[error("could not write document: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        let err = ApiError::Status {
            endpoint: "/ideas".to_string(),
            status: 502,
        };
        assert_eq!(err.to_string(), "/ideas returned HTTP 502");

        let err = ApiError::MissingField {
            endpoint: "/extract".to_string(),
            field: "content",
        };
        assert_eq!(err.to_string(), "/extract response is missing `content`");
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::Blank.to_string(), "Please paste some content first.");
        assert_eq!(
            InputError::UnsupportedScheme("ftp".to_string()).to_string(),
            "Only http and https links are supported (got ftp)."
        );
    }
}
