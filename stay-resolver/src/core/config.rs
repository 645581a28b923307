use anyhow::bail;
use chrono_tz::Tz;
use shared::models::money::DEFAULT_CURRENCY;

use crate::pricing::DEFAULT_FALLBACK_MAX_ROOMS;

/// Resolver configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment (a `.env` file is
/// loaded first by [`ResolverConfig::load`]):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STAY_FALLBACK_MAX_ROOMS | 10 | Max rooms when a room type has no quantity |
/// | STAY_DEFAULT_CURRENCY | USD | Currency when the hotel carries none |
/// | STAY_DEFAULT_GUESTS | 2 | Adults preselected in a new session |
/// | HOTEL_TIMEZONE | UTC | Zone used to turn instants into calendar dates |
/// | LOG_LEVEL | info | Logger level |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
///
/// # Example
///
/// ```ignore
/// HOTEL_TIMEZONE=Europe/Lisbon STAY_FALLBACK_MAX_ROOMS=20 cargo test
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Upper bound on rooms when quantity is missing or non-positive
    pub fallback_max_rooms: i32,
    /// ISO currency code used when the hotel has none
    pub default_currency: String,
    /// Initial adult count of a stay session
    pub default_guests: i32,
    /// Hotel-local time zone
    pub timezone: Tz,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
}

impl ResolverConfig {
    /// Load `.env`, read the environment and validate the result
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from environment variables
    ///
    /// Unset or unparsable variables keep their default value.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fallback_max_rooms: std::env::var("STAY_FALLBACK_MAX_ROOMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fallback_max_rooms),
            default_currency: std::env::var("STAY_DEFAULT_CURRENCY")
                .map(|v| v.trim().to_uppercase())
                .unwrap_or(defaults.default_currency),
            default_guests: std::env::var("STAY_DEFAULT_GUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_guests),
            timezone: std::env::var("HOTEL_TIMEZONE")
                .ok()
                .and_then(|v| match v.parse::<Tz>() {
                    Ok(tz) => Some(tz),
                    Err(e) => {
                        tracing::warn!("Invalid HOTEL_TIMEZONE '{}': {}, falling back to UTC", v, e);
                        None
                    }
                })
                .unwrap_or(defaults.timezone),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
        }
    }

    /// Reject values the resolver cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fallback_max_rooms < 1 {
            bail!(
                "STAY_FALLBACK_MAX_ROOMS must be at least 1, got {}",
                self.fallback_max_rooms
            );
        }
        if self.default_currency.is_empty() {
            bail!("STAY_DEFAULT_CURRENCY must not be empty");
        }
        if self.default_guests < 1 {
            bail!(
                "STAY_DEFAULT_GUESTS must be at least 1, got {}",
                self.default_guests
            );
        }
        Ok(())
    }

    /// Override the fallback room limit
    ///
    /// Mostly used by tests
    pub fn with_fallback_max_rooms(mut self, fallback_max_rooms: i32) -> Self {
        self.fallback_max_rooms = fallback_max_rooms;
        self
    }

    /// Override the hotel time zone
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_max_rooms: DEFAULT_FALLBACK_MAX_ROOMS,
            default_currency: DEFAULT_CURRENCY.to_string(),
            default_guests: 2,
            timezone: Tz::UTC,
            log_level: "info".to_string(),
            log_json: false,
            log_dir: None,
        }
    }
}
