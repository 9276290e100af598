use once_cell::sync::Lazy;
use regex::Regex;

use super::ClientError;

static VIDEO_ID_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

static VIDEO_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"(?:[?&]v=|youtu\.be/|/embed/|/shorts/|/live/|/v/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
  )
  .unwrap()
});

static PLAYLIST_ID_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{13,42}$").unwrap());

static PLAYLIST_URL_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"[?&]list=([A-Za-z0-9_-]+)").unwrap());

/// Accepts a bare video id or any of the common YouTube video url shapes.
pub fn video_id(input: &str) -> Result<String, ClientError> {
  let input = input.trim();
  if VIDEO_ID_REGEX.is_match(input) {
    return Ok(input.to_string());
  }

  VIDEO_URL_REGEX
    .captures(input)
    .map(|caps| caps[1].to_string())
    .ok_or_else(|| ClientError::InvalidVideoId(input.to_string()))
}

/// Accepts a bare playlist id or a url carrying a `list` parameter.
pub fn playlist_id(input: &str) -> Result<String, ClientError> {
  let input = input.trim();
  if let Some(caps) = PLAYLIST_URL_REGEX.captures(input) {
    return Ok(caps[1].to_string());
  }

  if PLAYLIST_ID_REGEX.is_match(input) {
    return Ok(input.to_string());
  }

  Err(ClientError::InvalidPlaylistId(input.to_string()))
}
