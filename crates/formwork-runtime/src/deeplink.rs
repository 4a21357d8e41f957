//! Deep-link path encoding.
//!
//! `encode_state` produces path segments; these helpers turn them into
//! a single URL-path-style string and back. Segments are joined with
//! `/`, and literal `/` and `%` inside a segment are escaped so the
//! string splits back unambiguously.

use thiserror::Error;

/// Errors from [`decode_path`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeepLinkError {
    /// Two adjacent separators, or a leading/trailing one.
    #[error("deep link contains an empty segment")]
    EmptySegment,
}

/// Join segments into one path string. Empty input encodes to the empty
/// string.
#[must_use]
pub fn encode_path(segments: &[String]) -> String {
    segments
        .iter()
        .map(|segment| escape(segment))
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a path string back into segments. The empty string decodes to
/// no segments.
pub fn decode_path(path: &str) -> Result<Vec<String>, DeepLinkError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    path.split('/')
        .map(|segment| {
            if segment.is_empty() {
                Err(DeepLinkError::EmptySegment)
            } else {
                Ok(unescape(segment))
            }
        })
        .collect()
}

fn escape(segment: &str) -> String {
    segment.replace('%', "%25").replace('/', "%2F")
}

fn unescape(segment: &str) -> String {
    segment.replace("%2F", "/").replace("%25", "%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segments_round_trip() {
        let segments = vec!["1".to_string(), "lines".to_string(), "0".to_string()];
        assert_eq!(encode_path(&segments), "1/lines/0");
        assert_eq!(decode_path("1/lines/0").unwrap(), segments);
    }

    #[test]
    fn separators_inside_segments_are_escaped() {
        let segments = vec!["a/b".to_string(), "50%".to_string()];
        let encoded = encode_path(&segments);
        assert_eq!(encoded, "a%2Fb/50%25");
        assert_eq!(decode_path(&encoded).unwrap(), segments);
    }

    #[test]
    fn empty_path_is_no_segments() {
        assert_eq!(encode_path(&[]), "");
        assert_eq!(decode_path("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert_eq!(decode_path("a//b"), Err(DeepLinkError::EmptySegment));
        assert_eq!(decode_path("/a"), Err(DeepLinkError::EmptySegment));
    }
}
