use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(String),
}

impl Config {
    /// Reads `DATABASE_URL` and `BIND_ADDR`, falling back to an in-memory
    /// database and port 3001 so the server runs with no environment at all.
    pub fn from_env() -> Result<Config, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
        let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr))?;

        Ok(Config {
            database_url,
            bind_addr,
        })
    }
}
