//! Decoding and saving of result thumbnails.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::ThumbnailError;
use crate::models::MatchItem;

/// Extension used when the payload carries no data-URI mime.
const DEFAULT_EXTENSION: &str = "jpg";

/// Split an optional `data:image/<ext>;base64,` prefix off the payload,
/// returning the bare base64 and the extension to save under.
fn split_data_uri(data: &str) -> (&str, &str) {
    if let Some(rest) = data.strip_prefix("data:image/")
        && let Some((ext, tail)) = rest.split_once(';')
        && let Some(payload) = tail.strip_prefix("base64,")
    {
        return (payload, ext);
    }
    (data, DEFAULT_EXTENSION)
}

/// File name for one saved thumbnail:
/// `<prefix>_<searchID>_<ordinal>_score<score>.<ext>`.
pub fn thumbnail_filename(
    prefix: &str,
    id_search: &str,
    ordinal: usize,
    score: i64,
    ext: &str,
) -> String {
    format!("{prefix}_{id_search}_{ordinal}_score{score}.{ext}")
}

/// Decode the match's thumbnail and write it into `dir`. Returns the path
/// written. Failures are per-item; callers report them and move on.
pub fn save_thumbnail(
    dir: &Path,
    prefix: &str,
    id_search: &str,
    ordinal: usize,
    item: &MatchItem,
) -> Result<Option<PathBuf>, ThumbnailError> {
    let Some(data) = item.base64.as_deref() else {
        return Ok(None);
    };

    let (payload, ext) = split_data_uri(data);
    let bytes = STANDARD.decode(payload)?;

    let path = dir.join(thumbnail_filename(prefix, id_search, ordinal, item.score, ext));
    std::fs::write(&path, bytes)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn match_with_base64(score: i64, data: &str) -> MatchItem {
        serde_json::from_value(json!({"score": score, "base64": data})).unwrap()
    }

    #[test]
    fn test_thumbnail_filename_convention() {
        assert_eq!(
            thumbnail_filename("thumb", "abc123", 1, 95, "webp"),
            "thumb_abc123_1_score95.webp"
        );
    }

    #[test]
    fn test_split_data_uri() {
        let (payload, ext) = split_data_uri("data:image/webp;base64,AAAA");
        assert_eq!(payload, "AAAA");
        assert_eq!(ext, "webp");

        let (payload, ext) = split_data_uri("AAAA");
        assert_eq!(payload, "AAAA");
        assert_eq!(ext, DEFAULT_EXTENSION);
    }

    #[test]
    fn test_save_thumbnail_writes_decoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let encoded = STANDARD.encode(b"fake image bytes");
        let item = match_with_base64(87, &format!("data:image/png;base64,{encoded}"));

        let path = save_thumbnail(dir.path(), "thumb", "s1", 2, &item)
            .unwrap()
            .unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "thumb_s1_2_score87.png"
        );
        assert_eq!(std::fs::read(&path).unwrap(), b"fake image bytes");
    }

    #[test]
    fn test_save_thumbnail_without_payload() {
        let dir = tempfile::tempdir().unwrap();
        let item: MatchItem = serde_json::from_value(json!({"score": 10})).unwrap();
        assert!(
            save_thumbnail(dir.path(), "thumb", "s1", 1, &item)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_save_thumbnail_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let item = match_with_base64(10, "not base64 at all!!!");
        assert!(matches!(
            save_thumbnail(dir.path(), "thumb", "s1", 1, &item),
            Err(ThumbnailError::Decode(_))
        ));
    }
}
