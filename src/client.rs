mod id;
mod piped;

use std::time::Duration;

use async_trait::async_trait;

use crate::Result;

pub use piped::PipedFactory;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
  #[error("invalid video id or url: {0}")]
  InvalidVideoId(String),
  #[error("invalid playlist id or url: {0}")]
  InvalidPlaylistId(String),
  #[error("no audio format available for video {0}")]
  NoAudioFormat(String),
  #[error("no format available for video {0}")]
  NoFormat(String),
  #[error("no thumbnail available for video {0}")]
  NoThumbnail(String),
  #[error("no stream url for {1} format of video {0}")]
  MissingStreamUrl(String, String),
}

#[derive(Clone, Debug, Default)]
pub struct VideoInfo {
  pub id: String,
  pub title: String,
  pub author: String,
  pub description: String,
  pub duration: Duration,
  pub views: u64,
  pub thumbnails: Vec<Thumbnail>,
  pub formats: Vec<Format>,
}

impl VideoInfo {
  pub fn first_audio_format(&self) -> Result<&Format> {
    let format = self
      .formats
      .iter()
      .find(|format| format.has_audio)
      .ok_or_else(|| ClientError::NoAudioFormat(self.id.clone()))?;
    Ok(format)
  }

  pub fn first_format(&self) -> Result<&Format> {
    let format = self
      .formats
      .first()
      .ok_or_else(|| ClientError::NoFormat(self.id.clone()))?;
    Ok(format)
  }

  pub fn first_thumbnail(&self) -> Result<&Thumbnail> {
    let thumbnail = self
      .thumbnails
      .first()
      .ok_or_else(|| ClientError::NoThumbnail(self.id.clone()))?;
    Ok(thumbnail)
  }
}

#[derive(Clone, Debug, Default)]
pub struct Thumbnail {
  pub url: String,
}

#[derive(Clone, Debug, Default)]
pub struct Format {
  pub url: String,
  pub mime_type: String,
  pub quality: String,
  pub has_audio: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PlaylistInfo {
  pub id: String,
  pub title: String,
  pub entries: Vec<PlaylistEntry>,
}

/// A playlist item. Needs [`VideoClient::video_from_entry`] to get the
/// full video info.
#[derive(Clone, Debug, Default)]
pub struct PlaylistEntry {
  pub id: String,
  pub title: String,
}

#[async_trait]
pub trait VideoClient: Send + Sync {
  async fn video(&self, url: &str) -> Result<VideoInfo>;

  async fn playlist(&self, url: &str) -> Result<PlaylistInfo>;

  async fn video_from_entry(&self, entry: &PlaylistEntry) -> Result<VideoInfo>;

  async fn stream_url(&self, video: &VideoInfo, format: &Format)
    -> Result<String>;
}

/// Builds a video client for a single request, tunneling through `proxy`
/// when one is given.
pub trait ClientFactory: Send + Sync {
  fn build(&self, proxy: Option<&str>) -> Result<Box<dyn VideoClient>>;
}
