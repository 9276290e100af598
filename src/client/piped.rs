use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{piped::PipedInstance, Result};

use super::{
  id, ClientError, ClientFactory, Format, PlaylistEntry, PlaylistInfo,
  Thumbnail, VideoClient, VideoInfo,
};

/// Resolves videos and playlists through a Piped API instance.
pub struct Piped {
  instance: PipedInstance,
  http: reqwest::Client,
}

impl Piped {
  pub fn new(instance: PipedInstance, proxy: Option<&str>) -> Result<Self> {
    let mut builder = reqwest::Client::builder();
    if let Some(proxy) = proxy {
      let proxy = reqwest::Proxy::all(proxy).context("Invalid proxy URL")?;
      builder = builder.proxy(proxy);
    }

    Ok(Self {
      instance,
      http: builder.build()?,
    })
  }

  async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T> {
    let resp = self
      .http
      .get(url)
      .header("User-Agent", "Mozilla/5.0")
      .send()
      .await?
      .error_for_status()?
      .json::<T>()
      .await?;

    Ok(resp)
  }

  async fn video_by_id(&self, video_id: String) -> Result<VideoInfo> {
    let streams: PipedStreams =
      self.get(self.instance.stream_url(&video_id)).await?;
    Ok(streams.into_video(video_id))
  }
}

#[async_trait]
impl VideoClient for Piped {
  async fn video(&self, url: &str) -> Result<VideoInfo> {
    self.video_by_id(id::video_id(url)?).await
  }

  async fn playlist(&self, url: &str) -> Result<PlaylistInfo> {
    let playlist_id = id::playlist_id(url)?;
    let playlist: PipedPlaylist =
      self.get(self.instance.playlist_url(&playlist_id)).await?;
    playlist.into_playlist(playlist_id)
  }

  async fn video_from_entry(&self, entry: &PlaylistEntry) -> Result<VideoInfo> {
    self.video_by_id(entry.id.clone()).await
  }

  async fn stream_url(
    &self,
    video: &VideoInfo,
    format: &Format,
  ) -> Result<String> {
    // piped hands out already deciphered urls
    if format.url.is_empty() {
      let err =
        ClientError::MissingStreamUrl(video.id.clone(), format.quality.clone());
      return Err(err.into());
    }

    Ok(format.url.clone())
  }
}

pub struct PipedFactory(pub PipedInstance);

impl ClientFactory for PipedFactory {
  fn build(&self, proxy: Option<&str>) -> Result<Box<dyn VideoClient>> {
    Ok(Box::new(Piped::new(self.0.clone(), proxy)?))
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipedStreams {
  title: String,
  description: Option<String>,
  uploader: Option<String>,
  // -1 for live streams
  #[serde(default)]
  duration: i64,
  #[serde(default)]
  views: i64,
  thumbnail_url: Option<String>,
  #[serde(default)]
  video_streams: Vec<PipedStream>,
  #[serde(default)]
  audio_streams: Vec<PipedStream>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipedStream {
  url: String,
  mime_type: Option<String>,
  quality: Option<String>,
  #[serde(default)]
  video_only: bool,
}

impl PipedStream {
  fn into_format(self, has_audio: bool) -> Format {
    Format {
      url: self.url,
      mime_type: self.mime_type.unwrap_or_default(),
      quality: self.quality.unwrap_or_default(),
      has_audio,
    }
  }
}

impl PipedStreams {
  fn into_video(self, video_id: String) -> VideoInfo {
    // muxed and video-only streams first, then the audio-only ones
    let video_formats = self.video_streams.into_iter().map(|stream| {
      let has_audio = !stream.video_only;
      stream.into_format(has_audio)
    });
    let audio_formats = self
      .audio_streams
      .into_iter()
      .map(|stream| stream.into_format(true));

    let thumbnails = self
      .thumbnail_url
      .filter(|url| !url.is_empty())
      .map(|url| Thumbnail { url })
      .into_iter()
      .collect();

    VideoInfo {
      id: video_id,
      title: self.title,
      author: self.uploader.unwrap_or_default(),
      description: self.description.unwrap_or_default(),
      duration: Duration::from_secs(self.duration.max(0) as u64),
      views: self.views.max(0) as u64,
      thumbnails,
      formats: video_formats.chain(audio_formats).collect(),
    }
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PipedPlaylist {
  name: Option<String>,
  #[serde(default)]
  related_streams: Vec<PipedPlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PipedPlaylistItem {
  url: String,
  title: Option<String>,
}

impl PipedPlaylist {
  fn into_playlist(self, playlist_id: String) -> Result<PlaylistInfo> {
    let entries = self
      .related_streams
      .into_iter()
      .map(|item| -> Result<PlaylistEntry> {
        Ok(PlaylistEntry {
          id: id::video_id(&item.url)?,
          title: item.title.unwrap_or_default(),
        })
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(PlaylistInfo {
      id: playlist_id,
      title: self.name.unwrap_or_default(),
      entries,
    })
  }
}
