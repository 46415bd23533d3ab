//! File inspection helpers for uploads.

use std::path::Path;

/// Image mime type guessed from the file extension, or `None` when the
/// file does not look like an image. Upload proceeds either way; the
/// caller only warns.
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime(&PathBuf::from("face.jpg")), Some("image/jpeg"));
        assert_eq!(image_mime(&PathBuf::from("face.JPEG")), Some("image/jpeg"));
        assert_eq!(image_mime(&PathBuf::from("face.png")), Some("image/png"));
        assert_eq!(image_mime(&PathBuf::from("face.webp")), Some("image/webp"));
        assert_eq!(image_mime(&PathBuf::from("notes.txt")), None);
        assert_eq!(image_mime(&PathBuf::from("no_extension")), None);
    }
}
