use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3333";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    /// Read configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_addr(std::env::var("APP_ADDR").ok().as_deref())
    }

    fn from_addr(raw: Option<&str>) -> Result<Self> {
        let raw = raw.unwrap_or(DEFAULT_ADDR);
        let addr = raw.parse::<SocketAddr>().with_context(|| format!("invalid APP_ADDR {raw:?}"))?;
        Ok(Self { addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_addr(None).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn rejects_unparseable_address() {
        let err = Config::from_addr(Some("localhost")).unwrap_err();
        assert!(err.to_string().contains("APP_ADDR"));
    }
}
