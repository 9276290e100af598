use std::{net::SocketAddr, time::Duration};

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tokio_graceful_shutdown::{SubsystemBuilder, SubsystemHandle, Toplevel};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod client;
mod config;
mod download;
mod error;
mod piped;
mod proxy;
mod session;
mod summary;
mod util;

pub use error::{Error, Result};

use crate::{
  client::PipedFactory,
  config::Config,
  session::{AppState, Session},
};

pub const WELCOME_TEXT: &str = include_str!("../assets/welcome.txt");

pub const NO_PROXY_WARNING: &str =
  "No SOCKS5 proxy configured, maybe you get rate limited by YouTube :(";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // .env may set RUST_LOG, so load it before anything else
  dotenvy::dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  let config = Config::from_env()?;
  info!("reading proxies from {}", config.proxy_file.display());

  let listen_addr = config.listen_addr;
  let state = AppState::new(config.proxy_file, PipedFactory(config.piped));
  let app = app(state);

  Toplevel::new(move |s| async move {
    s.start(SubsystemBuilder::new("http", move |subsys: SubsystemHandle| {
      serve(app, listen_addr, subsys)
    }));
  })
  .catch_signals()
  .handle_shutdown_requests(Duration::from_secs(5))
  .await?;

  Ok(())
}

fn app(state: AppState) -> Router {
  Router::new()
    .route("/", get(homepage))
    .route("/dl", get(download::video))
    .route("/playlist", get(download::playlist))
    .fallback(not_found)
    .with_state(state)
}

async fn serve(
  app: Router,
  addr: SocketAddr,
  subsys: SubsystemHandle,
) -> anyhow::Result<()> {
  info!("listening on {}", addr);

  axum::Server::try_bind(&addr)?
    .serve(app.into_make_service())
    .with_graceful_shutdown(subsys.on_shutdown_requested())
    .await?;

  Ok(())
}

async fn homepage(session: Session) -> impl IntoResponse {
  let mut msg = WELCOME_TEXT.to_string();
  if session.proxy.is_none() {
    msg.push_str(NO_PROXY_WARNING);
  }
  msg
}

// the session is still opened so that a broken proxy setup is reported
// on every path
async fn not_found(_session: Session) -> StatusCode {
  StatusCode::NOT_FOUND
}
