const DEFAULT_PIPED_INSTANCE: &str = "pipedapi.kavin.rocks";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipedInstance {
  domain: String,
}

impl PipedInstance {
  pub fn new(domain: String) -> Self {
    // accept both "example.org" and "https://example.org/"
    let domain = domain
      .trim_start_matches("https://")
      .trim_start_matches("http://")
      .trim_end_matches('/')
      .to_string();
    Self { domain }
  }

  pub fn stream_url(&self, video_id: &str) -> String {
    format!("https://{}/streams/{}", self.domain, video_id)
  }

  pub fn playlist_url(&self, playlist_id: &str) -> String {
    format!("https://{}/playlists/{}", self.domain, playlist_id)
  }
}

impl Default for PipedInstance {
  fn default() -> Self {
    Self::new(DEFAULT_PIPED_INSTANCE.to_string())
  }
}
