use axum::{headers::ContentType, response::IntoResponse, TypedHeader};
use serde::Serialize;

use crate::Result;

/// Serialize `value` as a JSON response body terminated by a newline.
pub fn json_response<T: Serialize>(value: &T) -> Result<impl IntoResponse> {
  let body = encode_json(value)?;
  Ok((TypedHeader(ContentType::json()), body))
}

// `&`, `<`, `>` and the line/paragraph separators are written as \u
// escapes so the bytes match what existing clients have been receiving.
// These characters only ever occur inside JSON strings, so a plain
// replacement keeps the document valid.
fn encode_json<T: Serialize>(value: &T) -> Result<String> {
  let mut body = serde_json::to_string(value)?
    .replace('&', "\\u0026")
    .replace('<', "\\u003c")
    .replace('>', "\\u003e")
    .replace('\u{2028}', "\\u2028")
    .replace('\u{2029}', "\\u2029");
  body.push('\n');

  Ok(body)
}

#[cfg(test)]
mod test {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_encode_json_escapes_html() {
    let value = json!({
      "description": "<b>Tom & Jerry</b>\u{2028}",
      "stream_url": "https://cdn.example/v?a=1&b=2",
    });

    let body = encode_json(&value).unwrap();
    assert_eq!(
      body,
      "{\"description\":\"\\u003cb\\u003eTom \\u0026 Jerry\\u003c/b\\u003e\\u2028\",\
       \"stream_url\":\"https://cdn.example/v?a=1\\u0026b=2\"}\n"
    );

    // still decodes to the original text
    let decoded: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(decoded, value);
  }

  #[test]
  fn test_encode_json_empty_list() {
    let empty: Vec<String> = vec![];
    assert_eq!(encode_json(&empty).unwrap(), "[]\n");
  }
}
