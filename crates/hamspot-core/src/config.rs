//! Startup configuration for the page's three external collaborators.
//!
//! Secrets are injected at build time and resolved exactly once at
//! startup. A missing or empty secret is a configuration error
//! surfaced immediately — an empty credential is never sent to a
//! remote service.

/// Detection endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Deployment-specific inference URL.
    pub endpoint: String,
    /// API key passed as the `api_key` query parameter.
    pub api_key: String,
}

impl InferenceConfig {
    /// Default model deployment used when no override is injected.
    pub const DEFAULT_ENDPOINT: &'static str = "https://detect.roboflow.com/toy-hamster/2";
}

/// Storage network settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Bearer access token for the publish endpoint.
    pub token: String,
}

/// Livestream player settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Streaming provider API key.
    pub provider_key: String,
    /// Playback identifier of the embedded stream.
    pub playback_id: String,
}

impl StreamConfig {
    /// Playback ID of the promo stream, used when no override is
    /// injected.
    pub const DEFAULT_PLAYBACK_ID: &'static str = "114b6n4wclqgw4um";
}

/// Build-time configuration values, as `option_env!` hands them over.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSource {
    /// `HAMSPOT_DETECT_URL` (optional; has a default).
    pub detect_url: Option<&'static str>,
    /// `HAMSPOT_DETECT_API_KEY` (required).
    pub detect_api_key: Option<&'static str>,
    /// `HAMSPOT_STORAGE_TOKEN` (required).
    pub storage_token: Option<&'static str>,
    /// `HAMSPOT_STREAM_KEY` (required).
    pub stream_key: Option<&'static str>,
    /// `HAMSPOT_PLAYBACK_ID` (optional; has a default).
    pub playback_id: Option<&'static str>,
}

/// Errors raised while resolving the startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required value was absent or empty at build time.
    #[error("missing configuration value: {0}")]
    Missing(&'static str),
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Detection endpoint settings.
    pub inference: InferenceConfig,
    /// Storage network settings.
    pub storage: StorageConfig,
    /// Livestream player settings.
    pub stream: StreamConfig,
}

impl AppConfig {
    /// Resolve the configuration from build-time values.
    ///
    /// Optional values fall back to their deployment defaults;
    /// secrets must be present and non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent or
    /// empty secret.
    pub fn from_source(source: ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            inference: InferenceConfig {
                endpoint: optional(source.detect_url, InferenceConfig::DEFAULT_ENDPOINT),
                api_key: required(source.detect_api_key, "HAMSPOT_DETECT_API_KEY")?,
            },
            storage: StorageConfig {
                token: required(source.storage_token, "HAMSPOT_STORAGE_TOKEN")?,
            },
            stream: StreamConfig {
                provider_key: required(source.stream_key, "HAMSPOT_STREAM_KEY")?,
                playback_id: optional(source.playback_id, StreamConfig::DEFAULT_PLAYBACK_ID),
            },
        })
    }
}

fn required(value: Option<&str>, key: &'static str) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn optional(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => default.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const fn full_source() -> ConfigSource {
        ConfigSource {
            detect_url: Some("https://detect.example.test/model/7"),
            detect_api_key: Some("key123"),
            storage_token: Some("token456"),
            stream_key: Some("stream789"),
            playback_id: Some("abcd1234"),
        }
    }

    #[test]
    fn full_source_resolves() {
        let config = AppConfig::from_source(full_source()).unwrap();
        assert_eq!(config.inference.endpoint, "https://detect.example.test/model/7");
        assert_eq!(config.inference.api_key, "key123");
        assert_eq!(config.storage.token, "token456");
        assert_eq!(config.stream.provider_key, "stream789");
        assert_eq!(config.stream.playback_id, "abcd1234");
    }

    #[test]
    fn optional_values_fall_back_to_defaults() {
        let source = ConfigSource {
            detect_url: None,
            playback_id: None,
            ..full_source()
        };
        let config = AppConfig::from_source(source).unwrap();
        assert_eq!(config.inference.endpoint, InferenceConfig::DEFAULT_ENDPOINT);
        assert_eq!(config.stream.playback_id, StreamConfig::DEFAULT_PLAYBACK_ID);
    }

    #[test]
    fn missing_secret_names_its_key() {
        let source = ConfigSource {
            detect_api_key: None,
            ..full_source()
        };
        assert_eq!(
            AppConfig::from_source(source),
            Err(ConfigError::Missing("HAMSPOT_DETECT_API_KEY")),
        );

        let source = ConfigSource {
            storage_token: Some(""),
            ..full_source()
        };
        assert_eq!(
            AppConfig::from_source(source),
            Err(ConfigError::Missing("HAMSPOT_STORAGE_TOKEN")),
        );
    }

    #[test]
    fn blank_secret_is_treated_as_missing() {
        // A whitespace-only credential must never reach a remote
        // service.
        let source = ConfigSource {
            stream_key: Some("   "),
            ..full_source()
        };
        assert_eq!(
            AppConfig::from_source(source),
            Err(ConfigError::Missing("HAMSPOT_STREAM_KEY")),
        );
    }

    #[test]
    fn error_message_names_the_key() {
        let err = ConfigError::Missing("HAMSPOT_STORAGE_TOKEN");
        assert_eq!(
            err.to_string(),
            "missing configuration value: HAMSPOT_STORAGE_TOKEN",
        );
    }
}
