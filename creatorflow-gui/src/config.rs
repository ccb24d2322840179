use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/mrearnlr";

fn default_geolocation_url() -> String {
    DEFAULT_GEOLOCATION_URL.to_string()
}

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_geolocation_cache_ttl_secs() -> u64 {
    18_000 // 5 hours
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// log level, can be "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
    /// IP geolocation endpoint, must answer with a `country_code` field.
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,
    /// Form relay receiving the contact form.
    #[serde(default = "default_contact_endpoint")]
    pub contact_endpoint: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_geolocation_cache_ttl_secs")]
    pub geolocation_cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            geolocation_url: default_geolocation_url(),
            contact_endpoint: default_contact_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
            geolocation_cache_ttl_secs: default_geolocation_cache_ttl_secs(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidField(
                "request_timeout_secs",
                "must be greater than 0".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        match self.log_level.as_deref() {
            None => Ok(filter::LevelFilter::INFO),
            Some("error") => Ok(filter::LevelFilter::ERROR),
            Some("warn") => Ok(filter::LevelFilter::WARN),
            Some("info") => Ok(filter::LevelFilter::INFO),
            Some("debug") => Ok(filter::LevelFilter::DEBUG),
            Some("trace") => Ok(filter::LevelFilter::TRACE),
            Some(level) => Err(ConfigError::InvalidField(
                "log_level",
                format!("Unknown value '{}'", level),
            )),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn geolocation_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.geolocation_cache_ttl_secs)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found")]
    NotFound,
    #[error("Configuration field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("{0}")]
    ReadingFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Config::from_file(&dir.path().join(DEFAULT_FILE_NAME)),
            Err(ConfigError::NotFound)
        );
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
        assert_eq!(config.geolocation_url, DEFAULT_GEOLOCATION_URL);
        assert_eq!(config.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField("log_level", _))
        ));

        std::fs::write(&path, "request_timeout_secs = 0\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField("request_timeout_secs", _))
        ));

        std::fs::write(&path, "request_timeout_secs = \"ten\"\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ReadingFile(_))
        ));
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(
            &path,
            r#"
log_level = "trace"
geolocation_url = "http://localhost:8080/json"
contact_endpoint = "http://localhost:8080/f/test"
request_timeout_secs = 3
geolocation_cache_ttl_secs = 60
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(
            config,
            Config {
                log_level: Some("trace".to_string()),
                geolocation_url: "http://localhost:8080/json".to_string(),
                contact_endpoint: "http://localhost:8080/f/test".to_string(),
                request_timeout_secs: 3,
                geolocation_cache_ttl_secs: 60,
            }
        );
        assert_eq!(config.geolocation_cache_ttl(), Duration::from_secs(60));
    }
}
