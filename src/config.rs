use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub features_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| "heart_model.json".to_string());

        let features_path =
            env::var("FEATURES_PATH").unwrap_or_else(|_| "features.json".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("Failed to parse PORT")?;

        Ok(Self {
            model_path: PathBuf::from(model_path),
            features_path: PathBuf::from(features_path),
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .with_context(|| format!("Failed to parse HOST: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
