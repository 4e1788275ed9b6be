use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::path::Path;

/// Decoded uploads larger than this are rejected before they ever reach the
/// gateway or the disk.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Validates and decodes a `data:image/...;base64,` URL the way the upload
/// widget produces them.
pub fn decode_data_url(data_url: &str) -> Result<DecodedImage, String> {
    if !data_url.starts_with("data:image/") {
        return Err("Please upload an image file (JPG, PNG, etc.)".to_string());
    }
    let encoded = data_url
        .split_once("base64,")
        .map(|(_, rest)| rest)
        .ok_or_else(|| "Malformed image data".to_string())?;
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|_| "Malformed image data".to_string())?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err("Image is too large (max 10 MB)".to_string());
    }
    let format = image::guess_format(&bytes).map_err(|_| "Unrecognized image format".to_string())?;
    let extension = format
        .extensions_str()
        .first()
        .copied()
        .unwrap_or("img");
    Ok(DecodedImage { bytes, extension })
}

/// Writes the image under the uploads dir with a random name and returns the
/// relative path stored on the scan row.
pub fn save_upload(upload_dir: &str, img: &DecodedImage) -> Result<String, std::io::Error> {
    std::fs::create_dir_all(upload_dir)?;
    let file_name = format!("{}.{}", uuid::Uuid::new_v4(), img.extension);
    std::fs::write(Path::new(upload_dir).join(&file_name), &img.bytes)?;
    Ok(file_name)
}

/// Best-effort removal. Stored paths are bare file names; anything else is
/// refused so a crafted row can't reach outside the uploads dir.
pub fn remove_upload(upload_dir: &str, file_name: &str) {
    if file_name.contains('/') || file_name.contains("..") {
        tracing::warn!("Refusing to remove suspicious upload path: {}", file_name);
        return;
    }
    if let Err(e) = std::fs::remove_file(Path::new(upload_dir).join(file_name)) {
        tracing::debug!("Could not remove upload {}: {}", file_name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const TINY_PNG_B64: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn tiny_png_data_url() -> String {
        format!("data:image/png;base64,{}", TINY_PNG_B64)
    }

    #[test]
    fn accepts_a_real_png_data_url() {
        let decoded = decode_data_url(&tiny_png_data_url()).unwrap();
        assert_eq!(decoded.extension, "png");
        assert!(!decoded.bytes.is_empty());
    }

    #[test]
    fn rejects_non_image_data_urls() {
        let err = decode_data_url("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert!(err.contains("image file"));
    }

    #[test]
    fn rejects_missing_base64_marker() {
        assert!(decode_data_url("data:image/png,rawbytes").is_err());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(decode_data_url("data:image/png;base64,!!!not-base64!!!").is_err());
    }

    #[test]
    fn rejects_oversized_payloads() {
        let blob = BASE64.encode(vec![0u8; MAX_IMAGE_BYTES + 1]);
        let err = decode_data_url(&format!("data:image/png;base64,{}", blob)).unwrap_err();
        assert!(err.contains("too large"));
    }

    #[test]
    fn rejects_bytes_that_are_not_an_image() {
        let blob = BASE64.encode(b"definitely not a picture");
        assert!(decode_data_url(&format!("data:image/png;base64,{}", blob)).is_err());
    }

    #[test]
    fn save_and_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let dir_path = dir.path().to_str().unwrap();
        let decoded = decode_data_url(&tiny_png_data_url()).unwrap();

        let file_name = save_upload(dir_path, &decoded).unwrap();
        assert!(file_name.ends_with(".png"));
        assert!(dir.path().join(&file_name).exists());

        remove_upload(dir_path, &file_name);
        assert!(!dir.path().join(&file_name).exists());
    }

    #[test]
    fn remove_refuses_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let outside = dir.path().join("outside.txt");
        std::fs::write(&outside, b"keep me").unwrap();
        let upload_dir = dir.path().join("uploads");
        std::fs::create_dir_all(&upload_dir).unwrap();

        remove_upload(upload_dir.to_str().unwrap(), "../outside.txt");
        assert!(outside.exists());
    }
}
