//! Share link codec
//!
//! The whole collection travels inside a URL: JSON text, base64 over its UTF-8
//! bytes, carried as the `data` query parameter.
//!
//! ```text
//! <origin><path>?data=<base64>
//! ```
//!
//! Links are written with the payload percent-encoded as a query value. Raw
//! links (payload pasted without escaping, so `+` reads back as a space) are
//! still accepted.

use crate::feed::error::{FeedError, FeedResult};
use crate::feed::types::{validate_collection, Post};
use base64::{engine::general_purpose::STANDARD, Engine};
use url::Url;

/// Query parameter carrying the encoded collection
pub const SHARE_PARAM: &str = "data";

/// Encode a collection into the share payload
pub fn encode(posts: &[Post]) -> FeedResult<String> {
    let json = serde_json::to_string(posts)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Decode a share payload back into a collection
///
/// Fails with `FeedError::Share` when the payload is not base64, not UTF-8,
/// not a post array, or holds zero, reserved or duplicate ids.
pub fn decode(payload: &str) -> FeedResult<Vec<Post>> {
    let cleaned: String = payload
        .trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| FeedError::Share(format!("invalid base64: {}", e)))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| FeedError::Share(format!("payload is not UTF-8: {}", e)))?;
    let posts: Vec<Post> = serde_json::from_str(&json)
        .map_err(|e| FeedError::Share(format!("payload is not a post collection: {}", e)))?;

    validate_collection(&posts).map_err(FeedError::Share)?;
    Ok(posts)
}

/// Build a share link for `posts` on top of `base_url`
///
/// Any query string or fragment already on `base_url` is discarded.
pub fn share_link(base_url: &str, posts: &[Post]) -> FeedResult<String> {
    let mut url = Url::parse(base_url)?;
    url.set_query(None);
    url.set_fragment(None);

    let payload = encode(posts)?;
    url.query_pairs_mut().append_pair(SHARE_PARAM, &payload);
    Ok(url.into())
}

/// Extract the share payload from a URL, if it carries a non-empty one
pub fn shared_payload(url: &str) -> FeedResult<Option<String>> {
    let url = Url::parse(url)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty()))
}

/// The same URL without the share parameter (and without a fragment)
pub fn strip_share_param(url: &str) -> FeedResult<String> {
    let mut url = Url::parse(url)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != SHARE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    url.set_query(None);
    url.set_fragment(None);
    if !kept.is_empty() {
        url.query_pairs_mut().extend_pairs(kept);
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::{seed_posts, Comment};

    fn sample() -> Vec<Post> {
        let mut posts = seed_posts();
        posts[0].likes = 3;
        posts[0].comments.push(Comment::local("first!"));
        posts[1].comments.push(Comment {
            user: "Nour".to_string(),
            text: "مرحباً ✨ <b>bold</b>".to_string(),
        });
        posts
    }

    #[test]
    fn test_encode_decode_is_lossless() {
        let posts = sample();
        let payload = encode(&posts).unwrap();
        assert!(payload.is_ascii());
        assert_eq!(decode(&payload).unwrap(), posts);
    }

    #[test]
    fn test_share_link_format() {
        let link = share_link("https://example.com/feed/index.html?old=1#top", &sample()).unwrap();
        assert!(link.starts_with("https://example.com/feed/index.html?data="));
        assert!(!link.contains("old=1"));
        assert!(!link.contains('#'));

        let payload = shared_payload(&link).unwrap().unwrap();
        assert_eq!(payload, encode(&sample()).unwrap());
        assert_eq!(decode(&payload).unwrap(), sample());
    }

    #[test]
    fn test_raw_link_with_unescaped_payload() {
        // Find a collection whose payload contains '+' so form decoding matters
        let mut posts = seed_posts();
        let mut payload = encode(&posts).unwrap();
        let mut n = 0;
        while !payload.contains('+') {
            posts[0].caption = format!("caption >>>{}", n);
            payload = encode(&posts).unwrap();
            n += 1;
        }

        let raw = format!("http://localhost/index.html?data={}", payload);
        let extracted = shared_payload(&raw).unwrap().unwrap();
        assert!(extracted.contains(' '));
        assert_eq!(decode(&extracted).unwrap(), posts);
    }

    #[test]
    fn test_shared_payload_absent_or_empty() {
        assert_eq!(shared_payload("http://localhost/index.html").unwrap(), None);
        assert_eq!(shared_payload("http://localhost/?data=").unwrap(), None);
        assert_eq!(shared_payload("http://localhost/?other=1").unwrap(), None);
        assert!(matches!(
            shared_payload("not a url"),
            Err(FeedError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_strip_share_param() {
        assert_eq!(
            strip_share_param("http://localhost/app/index.html?data=abc").unwrap(),
            "http://localhost/app/index.html"
        );
        assert_eq!(
            strip_share_param("http://localhost/?lang=ar&data=abc#x").unwrap(),
            "http://localhost/?lang=ar"
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("%%%not-base64"), Err(FeedError::Share(_))));

        let not_json = STANDARD.encode("hello");
        assert!(matches!(decode(&not_json), Err(FeedError::Share(_))));

        let wrong_shape = STANDARD.encode(r#"{"id":1}"#);
        assert!(matches!(decode(&wrong_shape), Err(FeedError::Share(_))));

        let dup = STANDARD.encode(
            r#"[{"id":1,"imagePath":"a","caption":"a","likes":0,"comments":[]},
                {"id":1,"imagePath":"b","caption":"b","likes":0,"comments":[]}]"#,
        );
        let err = decode(&dup).unwrap_err();
        assert_eq!(err.to_string(), "Share error: duplicate post id 1");

        let zero_id = STANDARD.encode(
            r#"[{"id":0,"imagePath":"a","caption":"a","likes":0,"comments":[]}]"#,
        );
        let err = decode(&zero_id).unwrap_err();
        assert_eq!(err.to_string(), "Share error: invalid post id 0");

        let max_id = STANDARD.encode(format!(
            r#"[{{"id":{},"imagePath":"a","caption":"a","likes":0,"comments":[]}}]"#,
            u64::MAX
        ));
        assert!(matches!(decode(&max_id), Err(FeedError::Share(_))));
    }

    #[test]
    fn test_empty_collection_shares() {
        let payload = encode(&[]).unwrap();
        assert_eq!(payload, "W10=");
        assert!(decode(&payload).unwrap().is_empty());
    }
}
