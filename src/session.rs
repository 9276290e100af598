use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use tracing::debug;

use crate::{
  client::{ClientFactory, VideoClient},
  proxy, Error, Result,
};

#[derive(Clone)]
pub struct AppState {
  proxy_file: Arc<PathBuf>,
  factory: Arc<dyn ClientFactory>,
}

impl AppState {
  pub fn new(
    proxy_file: impl Into<PathBuf>,
    factory: impl ClientFactory + 'static,
  ) -> Self {
    Self {
      proxy_file: Arc::new(proxy_file.into()),
      factory: Arc::new(factory),
    }
  }
}

/// Per-request setup: the proxy list is re-read and a proxy picked for
/// every request, and the video client is bound to it.
pub struct Session {
  pub proxy: Option<String>,
  pub client: Box<dyn VideoClient>,
}

impl Session {
  async fn open(state: &AppState) -> Result<Self> {
    let proxies = proxy::load_proxies(state.proxy_file.as_path())
      .await
      .context("Error loading proxies")?;

    let proxy = proxy::random_proxy(&proxies).map(str::to_owned);
    match &proxy {
      Some(url) => debug!("using proxy: {}", proxy::redact(url)),
      None => debug!("no proxy selected"),
    }

    let client = state.factory.build(proxy.as_deref())?;
    Ok(Self { proxy, client })
  }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
  type Rejection = Error;

  async fn from_request_parts(
    _parts: &mut http::request::Parts,
    state: &AppState,
  ) -> Result<Self, Self::Rejection> {
    Session::open(state).await
  }
}
