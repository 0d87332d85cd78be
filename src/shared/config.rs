use std::{env, num::ParseIntError};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Invalid PORT value {value:?}: {source}")]
  InvalidPort {
    value: String,
    source: ParseIntError,
  },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  pub host: String,
  pub port: u16,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match lookup("PORT") {
      Some(value) => value
        .trim()
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort { value, source })?,
      None => DEFAULT_PORT,
    };
    Ok(Self { host, port })
  }

  pub fn server_address(&self) -> (&str, u16) {
    (self.host.as_str(), self.port)
  }
}
