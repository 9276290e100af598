use std::time::Duration;

use serde::Serialize;

use crate::{client::VideoInfo, Result};

/// The JSON shape returned for every video. Field order follows the
/// sorted key order clients already depend on.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct VideoSummary {
  #[serde(rename = "ID")]
  pub id: String,
  pub author: String,
  pub description: String,
  pub duration: String,
  pub stream_url: String,
  pub thumbnail: String,
  pub title: String,
  pub view_count: String,
}

impl VideoSummary {
  pub fn new(video: &VideoInfo, stream_url: String) -> Result<Self> {
    let thumbnail = video.first_thumbnail()?.url.clone();

    Ok(Self {
      id: video.id.clone(),
      author: video.author.clone(),
      description: video.description.clone(),
      duration: format_duration(video.duration),
      stream_url,
      thumbnail,
      title: video.title.clone(),
      view_count: video.views.to_string(),
    })
  }
}

/// Formats like `1h2m3s`, `4m0s` or `59s`. Zero is `0s`.
pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let hours = secs / 3600;
  let minutes = (secs % 3600) / 60;
  let seconds = secs % 60;

  if hours > 0 {
    format!("{}h{}m{}s", hours, minutes, seconds)
  } else if minutes > 0 {
    format!("{}m{}s", minutes, seconds)
  } else {
    format!("{}s", seconds)
  }
}

#[cfg(test)]
mod test {
  use crate::client::Thumbnail;

  use super::*;

  #[test]
  fn test_format_duration() {
    let cases = [
      (0, "0s"),
      (59, "59s"),
      (60, "1m0s"),
      (213, "3m33s"),
      (3600, "1h0m0s"),
      (3723, "1h2m3s"),
      (90061, "25h1m1s"),
    ];
    for (secs, expect) in cases {
      assert_eq!(format_duration(Duration::from_secs(secs)), expect);
    }
  }

  #[test]
  fn test_summary_from_video() {
    let video = VideoInfo {
      id: "dQw4w9WgXcQ".into(),
      title: "title".into(),
      author: "author".into(),
      description: "desc".into(),
      duration: Duration::from_secs(213),
      views: 42,
      thumbnails: vec![
        Thumbnail {
          url: "https://img.example/first.jpg".into(),
        },
        Thumbnail {
          url: "https://img.example/second.jpg".into(),
        },
      ],
      formats: vec![],
    };

    let summary =
      VideoSummary::new(&video, "https://cdn.example/s".into()).unwrap();
    assert_eq!(summary.thumbnail, "https://img.example/first.jpg");
    assert_eq!(summary.view_count, "42");
    assert_eq!(summary.duration, "3m33s");

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.starts_with(r#"{"ID":"dQw4w9WgXcQ","author":"author","#));
    assert!(json.ends_with(r#""title":"title","view_count":"42"}"#));
  }

  #[test]
  fn test_summary_without_thumbnail() {
    let video = VideoInfo {
      id: "abc".into(),
      ..Default::default()
    };
    assert!(VideoSummary::new(&video, String::new()).is_err());
  }
}
