use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// The governor replenishes one request every `1s / rate`, counted in
// nanoseconds, so higher rates collapse to a zero period.
pub const MAX_REQUESTS_PER_SECOND: u64 = 1_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("RATE_LIMIT_PER_SECOND must be greater than zero")]
  ZeroRequestsPerSecond,

  #[error("RATE_LIMIT_PER_SECOND must be at most 1000000000")]
  RequestsPerSecondTooHigh,

  #[error("RATE_LIMIT_BURST must be greater than zero")]
  ZeroBurstSize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  pub server_address: String,
  pub requests_per_second: u64,
  pub burst_size: u32,
}

impl Config {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.requests_per_second == 0 {
      return Err(ConfigError::ZeroRequestsPerSecond);
    }
    if self.requests_per_second > MAX_REQUESTS_PER_SECOND {
      return Err(ConfigError::RequestsPerSecondTooHigh);
    }
    if self.burst_size == 0 {
      return Err(ConfigError::ZeroBurstSize);
    }
    Ok(())
  }
}

impl Default for Config {
  fn default() -> Self {
    let server_address = env::var("SERVER_ADDRESS")
      .unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    // Allow bursts with up to five requests per IP address
    // and replenish two elements per second
    let requests_per_second = env::var("RATE_LIMIT_PER_SECOND")
      .ok()
      .and_then(|value| value.parse().ok())
      .unwrap_or(2);
    let burst_size = env::var("RATE_LIMIT_BURST")
      .ok()
      .and_then(|value| value.parse().ok())
      .unwrap_or(5);
    Self {
      server_address,
      requests_per_second,
      burst_size,
    }
  }
}
