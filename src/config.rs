use std::env;
use std::io;
use std::str::FromStr;
use std::time::Duration;

use crate::auth::{MAX_BCRYPT_COST, MIN_BCRYPT_COST};

/// Longest session lifetime accepted from the environment: one year.
pub const MAX_SESSION_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Runtime settings, read from the environment (and `.env` via `dotenv`).
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Lifetime of a login session in seconds.
    pub session_ttl_secs: i64,
    /// How often the server purges expired sessions, in seconds.
    pub session_sweep_secs: u64,
    pub bcrypt_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            session_ttl_secs: 5 * 60 * 60,
            session_sweep_secs: 300,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Config {
    pub fn from_env() -> io::Result<Self> {
        let defaults = Self::default();
        let config = Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT", defaults.server_port)?,
            session_ttl_secs: parse_var("SESSION_TTL_SECS", defaults.session_ttl_secs)?,
            session_sweep_secs: parse_var("SESSION_SWEEP_SECS", defaults.session_sweep_secs)?,
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but would break the server at runtime.
    pub fn validate(&self) -> io::Result<()> {
        if !(1..=MAX_SESSION_TTL_SECS).contains(&self.session_ttl_secs) {
            return Err(invalid(format!(
                "SESSION_TTL_SECS must be between 1 and {}, got {}",
                MAX_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(invalid(format!(
                "BCRYPT_COST must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }
        Ok(())
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }

    /// Out-of-range values saturate; `validate` keeps them out of `from_env`.
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.session_ttl_secs).unwrap_or(chrono::Duration::MAX)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_secs.max(1))
    }
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn parse_var<T: FromStr>(name: &str, default: T) -> io::Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| invalid(format!("{} must be a number, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
