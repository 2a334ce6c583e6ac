/// Custom error types for the audio proxy
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API Key is not configured on the server.")]
    ApiKeyNotConfigured,

    #[error("No text provided")]
    NoTextProvided,

    #[error("Google API error (status {status})")]
    Upstream { status: u16, body: String },

    #[error("Audio data not found in Google API response.")]
    AudioDataNotFound,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ProxyError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProxyError>;

/// Input validation functions
pub mod validation {
    use super::*;

    /// Validate the text field of a generate-audio request.
    ///
    /// Matches the endpoint's historical truthiness check: only a missing or
    /// empty string is rejected, whitespace-only input is passed through.
    pub fn validate_text(text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(ProxyError::NoTextProvided);
        }

        Ok(())
    }
}

/// Constants used throughout the application
pub mod constants {
    // Configuration constants
    pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
    pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

    // Environment variable names
    pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
    pub const BIND_ADDRESS_ENV: &str = "TTS_BIND_ADDRESS";
    pub const OTEL_HTTP_URL_ENV: &str = "TTS_OTEL_HTTP_URL";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_error_creation() {
        let config_error = ProxyError::config("Test config error");
        assert!(matches!(config_error, ProxyError::Config(_)));
        assert_eq!(
            config_error.to_string(),
            "Configuration error: Test config error"
        );

        let upstream_error = ProxyError::upstream(429, "quota exceeded");
        assert!(matches!(
            upstream_error,
            ProxyError::Upstream { status: 429, .. }
        ));
        assert_eq!(upstream_error.to_string(), "Google API error (status 429)");
    }

    #[test]
    fn test_caller_facing_messages() {
        assert_eq!(
            ProxyError::ApiKeyNotConfigured.to_string(),
            "API Key is not configured on the server."
        );
        assert_eq!(ProxyError::NoTextProvided.to_string(), "No text provided");
        assert_eq!(
            ProxyError::AudioDataNotFound.to_string(),
            "Audio data not found in Google API response."
        );
    }

    #[test]
    fn test_upstream_error_keeps_body_out_of_display() {
        let error = ProxyError::upstream(503, "internal vendor details");
        assert!(!error.to_string().contains("internal vendor details"));
    }

    mod validation_tests {
        use super::super::validation::*;

        #[test]
        fn test_validate_text_valid() {
            assert!(validate_text("Hello world").is_ok());
            assert!(validate_text("こんにちは").is_ok());
            assert!(validate_text("Text with \"quotes\"").is_ok());
        }

        #[test]
        fn test_validate_text_empty() {
            assert!(validate_text("").is_err());
        }

        #[test]
        fn test_validate_text_whitespace_passes() {
            // Only the empty string is rejected, like the original endpoint.
            assert!(validate_text("   ").is_ok());
        }
    }
}
