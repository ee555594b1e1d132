//! Environment-driven configuration.
//!
//! All configuration comes from environment variables (a `.env` file is
//! loaded by `main` before this runs):
//!
//! - `SQUAD_AS_API` — Account Server base URL (required)
//! - `SQUAD_DM_API` — Data Manager base URL (required)
//! - `SQUAD_API_TOKEN` — bearer token for both services (optional)
//! - `SQUAD_LOGFILE` — log destination; logging is off without it
//! - `SQUAD_REFRESH_SECONDS` — refresh period override (default 2)
//!
//! A broken environment is the only fatal misconfiguration in the program;
//! everything after startup degrades instead of exiting.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::SquadError;
use crate::topic::Service;

/// Default refresh period, seconds.
pub const DEFAULT_REFRESH_SECONDS: u64 = 2;

/// Resolved configuration for one dashboard run.
#[derive(Debug, Clone)]
pub struct Environment {
    as_api: Url,
    dm_api: Url,
    token: Option<String>,
    logfile: Option<PathBuf>,
    refresh_period: Duration,
}

impl Environment {
    /// Read the environment. Fails if a required variable is missing or
    /// malformed.
    pub fn from_env() -> Result<Self, SquadError> {
        let as_api = require_url("SQUAD_AS_API")?;
        let dm_api = require_url("SQUAD_DM_API")?;
        let token = std::env::var("SQUAD_API_TOKEN").ok().filter(|t| !t.is_empty());
        let logfile = std::env::var("SQUAD_LOGFILE").ok().map(PathBuf::from);

        let refresh_period = match std::env::var("SQUAD_REFRESH_SECONDS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    SquadError::Environment(format!(
                        "SQUAD_REFRESH_SECONDS is not a whole number: '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(SquadError::Environment(
                        "SQUAD_REFRESH_SECONDS must be at least 1".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_REFRESH_SECONDS),
        };

        Ok(Self {
            as_api,
            dm_api,
            token,
            logfile,
            refresh_period,
        })
    }

    /// Base URL for a service's API.
    pub fn api_url(&self, service: Service) -> &Url {
        match service {
            Service::Account => &self.as_api,
            Service::Data => &self.dm_api,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn logfile(&self) -> Option<&PathBuf> {
        self.logfile.as_ref()
    }

    pub fn refresh_period(&self) -> Duration {
        self.refresh_period
    }

    /// Override the refresh period (CLI flag beats the environment).
    pub fn with_refresh_period(mut self, period: Duration) -> Self {
        self.refresh_period = period;
        self
    }
}

fn require_url(var: &str) -> Result<Url, SquadError> {
    let raw = std::env::var(var)
        .map_err(|_| SquadError::Environment(format!("{var} is not set")))?;
    let url: Url = raw
        .parse()
        .map_err(|e| SquadError::Environment(format!("{var} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SquadError::Environment(format!(
            "{var} must be an http(s) URL, got '{raw}'"
        )));
    }
    Ok(url)
}
