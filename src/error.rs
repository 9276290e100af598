use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
  Server(anyhow::Error),
  Client(anyhow::Error),
}

impl Error {
  pub fn client(msg: &'static str) -> Self {
    Error::Client(anyhow::Error::msg(msg))
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Error::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
      Error::Client(_) => StatusCode::BAD_REQUEST,
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      // alternate format prints the whole context chain
      Error::Server(err) | Error::Client(err) => write!(f, "{err:#}"),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    (self.status(), self.to_string()).into_response()
  }
}

impl<E> From<E> for Error
where
  E: Into<anyhow::Error>,
{
  fn from(err: E) -> Self {
    Error::Server(err.into())
  }
}

#[cfg(test)]
mod test {
  use anyhow::Context;

  use super::*;

  #[test]
  fn test_status() {
    let err = Error::client("Please provide a video URL");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.to_string(), "Please provide a video URL");

    let err: Error = std::io::Error::other("boom").into();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn test_context_chain_in_message() {
    let res: std::result::Result<(), _> =
      Err(std::io::Error::other("file is gone"));
    let err: Error = res.context("Error loading proxies").unwrap_err().into();
    assert_eq!(err.to_string(), "Error loading proxies: file is gone");
  }
}
