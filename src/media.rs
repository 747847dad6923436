//! Image file loading and saving for the CLI

use std::path::Path;

use anyhow::Context;
use styler_types::ImageAsset;

/// Infer a MIME type from a file extension, defaulting to PNG
///
/// The generative API needs an image MIME type for every inline part, so
/// unknown extensions fall back to `image/png` rather than an opaque
/// binary type.
#[must_use]
pub fn mime_from_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/png",
    }
}

/// Read an image file into an [`ImageAsset`]
///
/// # Errors
///
/// Fails when the file cannot be read.
pub fn load_image(path: &Path) -> anyhow::Result<ImageAsset> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read image {}", path.display()))?;
    Ok(ImageAsset::from_bytes(&bytes, mime_from_path(path)))
}

/// Write an [`ImageAsset`] out as a file
///
/// # Errors
///
/// Fails when the asset does not decode or the file cannot be written.
pub fn save_image(asset: &ImageAsset, path: &Path) -> anyhow::Result<()> {
    let bytes = asset
        .to_bytes()
        .context("composed image is not valid base64")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write image {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_mime_from_common_extensions() {
        assert_eq!(mime_from_path(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(mime_from_path(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(mime_from_path(Path::new("photo.webp")), "image/webp");
        assert_eq!(mime_from_path(Path::new("photo.png")), "image/png");
        assert_eq!(mime_from_path(Path::new("photo")), "image/png");
    }

    #[test]
    fn test_load_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("in.png");
        std::fs::write(&source, b"fake png bytes").unwrap();

        let asset = load_image(&source).unwrap();
        assert_eq!(asset.mime_type, "image/png");

        let dest: PathBuf = dir.path().join("out.png");
        save_image(&asset, &dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"fake png bytes");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(load_image(Path::new("/nonexistent/missing.png")).is_err());
    }
}
