//! API configuration

use std::sync::Arc;

use core_kernel::temporal::parse_date;
use core_kernel::{Clock, CoreError, FixedClock, SystemClock, Timezone};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// IANA timezone the current date is taken in
    pub timezone: String,
    /// Pinned evaluation date (YYYY-MM-DD); the current date is used when unset
    pub evaluation_date: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            timezone: "UTC".to_string(),
            evaluation_date: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_environment(config::Environment::with_prefix("API"))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, CoreError> {
        config::Config::builder()
            .add_source(environment)
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|err| CoreError::configuration(err.to_string()))
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the clock supplying evaluation dates
    ///
    /// A configured `evaluation_date` pins the clock; otherwise the current
    /// date in `timezone` is used.
    pub fn clock(&self) -> Result<Arc<dyn Clock>, CoreError> {
        match self.evaluation_date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => Ok(Arc::new(FixedClock::new(parse_date(date)?))),
            _ => {
                let timezone: Timezone = self.timezone.parse()?;
                Ok(Arc::new(SystemClock::new(timezone)))
            }
        }
    }
}
