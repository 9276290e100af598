use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

use crate::piped::PipedInstance;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PROXY_FILE: &str = "proxy.txt";

/// Process configuration, read from the environment once at startup
/// (after `.env` has been loaded).
#[derive(Clone, Debug)]
pub struct Config {
  pub listen_addr: SocketAddr,
  pub proxy_file: PathBuf,
  pub piped: PipedInstance,
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
  ) -> anyhow::Result<Self> {
    let listen_addr = lookup("LISTEN_ADDR")
      .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
    let listen_addr = listen_addr
      .parse()
      .with_context(|| format!("invalid LISTEN_ADDR: {listen_addr}"))?;

    let proxy_file = lookup("PROXY_FILE")
      .unwrap_or_else(|| DEFAULT_PROXY_FILE.to_string())
      .into();

    let piped = lookup("PIPED_INSTANCE")
      .map(PipedInstance::new)
      .unwrap_or_default();

    Ok(Self {
      listen_addr,
      proxy_file,
      piped,
    })
  }
}
