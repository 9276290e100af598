use axum::{extract::Query, response::IntoResponse};
use futures::{StreamExt, TryStreamExt};
use serde::Deserialize;
use tracing::debug;

use crate::{
  client::{PlaylistEntry, VideoClient},
  session::Session,
  summary::VideoSummary,
  util::json_response,
  Error, Result,
};

// playlist entries resolved at the same time
const PLAYLIST_CONCURRENCY: usize = 4;

#[derive(Deserialize)]
pub struct UrlQuery {
  url: Option<String>,
}

impl UrlQuery {
  fn require(self, msg: &'static str) -> Result<String> {
    self
      .url
      .filter(|url| !url.is_empty())
      .ok_or_else(|| Error::client(msg))
  }
}

pub async fn video(
  session: Session,
  Query(query): Query<UrlQuery>,
) -> Result<impl IntoResponse> {
  let url = query.require("Please provide a video URL")?;
  let client = session.client.as_ref();

  let video = client.video(&url).await?;
  let format = video.first_audio_format()?;
  debug!(
    "video {}: using {} format ({})",
    video.id, format.quality, format.mime_type
  );
  let stream_url = client.stream_url(&video, format).await?;
  let summary = VideoSummary::new(&video, stream_url)?;

  json_response(&summary)
}

pub async fn playlist(
  session: Session,
  Query(query): Query<UrlQuery>,
) -> Result<impl IntoResponse> {
  let url = query.require("Please provide a playlist URL")?;
  let client = session.client.as_ref();

  let playlist = client.playlist(&url).await?;
  debug!(
    "playlist {} \"{}\": {} entries",
    playlist.id,
    playlist.title,
    playlist.entries.len()
  );
  let videos: Vec<VideoSummary> = futures::stream::iter(playlist.entries)
    .map(|entry| summarize_entry(client, entry))
    .buffered(PLAYLIST_CONCURRENCY)
    .try_collect()
    .await?;

  json_response(&videos)
}

async fn summarize_entry(
  client: &dyn VideoClient,
  entry: PlaylistEntry,
) -> Result<VideoSummary> {
  debug!("resolving playlist entry {} \"{}\"", entry.id, entry.title);
  let video = client.video_from_entry(&entry).await?;
  let format = video.first_format()?;
  let stream_url = client.stream_url(&video, format).await?;
  VideoSummary::new(&video, stream_url)
}
