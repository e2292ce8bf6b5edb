//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `servicebay.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use servicebay_adapter_nominatim::NominatimConfig;
use servicebay_domain::location::Coordinates;

/// Longest accepted session lifetime: one year.
const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Where the selected location is remembered.
    pub preferences: PreferencesConfig,
    /// Reverse geocoding of detected positions.
    pub geocoding: GeocodingConfig,
    /// Position reported to the location lookup.
    pub position: PositionConfig,
    /// Simulated payment gateway.
    pub payment: PaymentConfig,
    /// Demo accounts.
    pub auth: AuthConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Preference storage. Without a path, preferences live in memory.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub path: Option<PathBuf>,
}

/// Reverse geocoding settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// When off, detected positions are labelled with their coordinates.
    pub enabled: bool,
    #[serde(flatten)]
    pub nominatim: NominatimConfig,
}

/// Fixed position used by the location lookup; unset means unavailable.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Payment settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// How long a simulated charge takes.
    pub delay_ms: u64,
}

/// Authentication settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub accounts: Vec<AccountConfig>,
    /// Sessions never expire when unset.
    pub session_ttl_secs: Option<u64>,
}

/// One demo account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
}

impl Config {
    /// Load configuration from `servicebay.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("servicebay.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SERVICEBAY_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("SERVICEBAY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SERVICEBAY_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("SERVICEBAY_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("SERVICEBAY_PREFERENCES_PATH") {
            self.preferences.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SERVICEBAY_NOMINATIM_URL") {
            self.geocoding.nominatim.base_url = val;
        }
        if let Ok(val) = std::env::var("SERVICEBAY_PAYMENT_DELAY_MS") {
            if let Ok(delay) = val.parse() {
                self.payment.delay_ms = delay;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.position()?;
        if self
            .auth
            .session_ttl_secs
            .is_some_and(|ttl| ttl == 0 || ttl > MAX_SESSION_TTL_SECS)
        {
            return Err(ConfigError::Validation(format!(
                "session_ttl_secs must be between 1 and {MAX_SESSION_TTL_SECS}"
            )));
        }
        if self.auth.accounts.iter().any(|account| account.email.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "account email must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The configured position, if both coordinates are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when only one coordinate is set or
    /// either is out of range.
    pub fn position(&self) -> Result<Option<Coordinates>, ConfigError> {
        match (self.position.lat, self.position.lon) {
            (None, None) => Ok(None),
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon)
                .map(Some)
                .map_err(|err| ConfigError::Validation(err.to_string())),
            _ => Err(ConfigError::Validation(
                "position needs both lat and lon".to_string(),
            )),
        }
    }

    #[must_use]
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment.delay_ms)
    }

    #[must_use]
    pub fn session_ttl(&self) -> Option<Duration> {
        self.auth.session_ttl_secs.map(Duration::from_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "servicebayd=info,servicebay=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            nominatim: NominatimConfig::default(),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            accounts: vec![AccountConfig {
                email: "demo@servicebay.local".to_string(),
                password: "demo1234".to_string(),
            }],
            session_ttl_secs: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.preferences.path.is_none());
        assert!(config.geocoding.enabled);
        assert_eq!(config.payment_delay(), Duration::from_millis(2000));
        assert_eq!(config.auth.accounts.len(), 1);
        assert!(config.session_ttl().is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.geocoding.enabled);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [preferences]
            path = 'data/preferences.json'

            [geocoding]
            enabled = false
            base_url = 'http://localhost:8088'
            user_agent = 'servicebay-test'
            timeout_secs = 3

            [position]
            lat = 28.5706
            lon = 77.3272

            [payment]
            delay_ms = 50

            [auth]
            session_ttl_secs = 3600

            [[auth.accounts]]
            email = 'asha@example.com'
            password = 'secret'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(
            config.preferences.path,
            Some(PathBuf::from("data/preferences.json"))
        );
        assert!(!config.geocoding.enabled);
        assert_eq!(config.geocoding.nominatim.base_url, "http://localhost:8088");
        assert_eq!(config.geocoding.nominatim.user_agent, "servicebay-test");
        assert_eq!(config.geocoding.nominatim.timeout_secs, 3);
        assert!(config.position().unwrap().is_some());
        assert_eq!(config.payment_delay(), Duration::from_millis(50));
        assert_eq!(config.session_ttl(), Some(Duration::from_secs(3600)));
        assert_eq!(config.auth.accounts[0].email, "asha@example.com");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_half_configured_position() {
        let mut config = Config::default();
        config.position.lat = Some(28.5);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_out_of_range_position() {
        let mut config = Config::default();
        config.position.lat = Some(128.0);
        config.position.lon = Some(77.0);
        assert!(config.position().is_err());
    }

    #[test]
    fn should_reject_session_ttl_beyond_one_year() {
        let mut config = Config::default();
        config.auth.session_ttl_secs = Some(10_000_000_000_000);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.auth.session_ttl_secs = Some(3600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_blank_account_email() {
        let mut config = Config::default();
        config.auth.accounts[0].email = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [geocoding]
            enabled = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.geocoding.enabled);
        assert_eq!(
            config.geocoding.nominatim.base_url,
            servicebay_adapter_nominatim::DEFAULT_BASE_URL
        );
        assert_eq!(config.payment.delay_ms, 2000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
