use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// JSON file to import instead of the built-in sample foods.
    pub data_path: Option<PathBuf>,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_args(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Builds the config from command-line flags, falling back to `FOOD_BIND`
    /// and `FOOD_DATA` through `env`.
    pub fn from_args<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut data_path: Option<PathBuf> = None;
        let mut seed_sample_data = true;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bind" => match args.next() {
                    Some(value) => bind = Some(value),
                    None => bail!("--bind requires an <addr:port> value"),
                },
                "--data" => match args.next() {
                    Some(value) => data_path = Some(PathBuf::from(value)),
                    None => bail!("--data requires a file path"),
                },
                "--no-seed" => seed_sample_data = false,
                other => tracing::warn!("Ignoring unknown argument {:?}", other),
            }
        }

        let bind = bind
            .or_else(|| env("FOOD_BIND"))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address {:?}", bind))?;

        let data_path = data_path.or_else(|| env("FOOD_DATA").map(PathBuf::from));

        Ok(Self {
            bind_addr,
            data_path,
            seed_sample_data,
        })
    }
}
