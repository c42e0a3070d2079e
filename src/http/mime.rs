//! MIME type detection module
//!
//! Maps a file name to a Content-Type via its extension.

use std::path::Path;

/// Get the Content-Type for a file name.
///
/// # Examples
/// ```
/// use spa_server::http::mime::content_type_for_name;
/// assert_eq!(content_type_for_name("index.html"), "text/html; charset=utf-8");
/// assert_eq!(content_type_for_name("app.wasm"), "application/wasm");
/// assert_eq!(content_type_for_name("no-extension"), "application/octet-stream");
/// ```
#[must_use]
pub fn content_type_for_name(name: &str) -> &'static str {
    content_type(Path::new(name).extension().and_then(|e| e.to_str()))
}

/// Get the Content-Type for a bare file extension.
#[must_use]
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json" | "map") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",

        // Audio/Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogg" | "ogv") => "video/ogg",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Some("css")), "text/css");
        assert_eq!(content_type(Some("js")), "application/javascript");
        assert_eq!(content_type(Some("json")), "application/json");
        assert_eq!(content_type(Some("png")), "image/png");
        assert_eq!(content_type(Some("woff2")), "font/woff2");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(content_type_for_name("dir/app.js"), "application/javascript");
        assert_eq!(content_type_for_name("archive.tar.gz"), "application/gzip");
        assert_eq!(content_type_for_name(".hidden"), "application/octet-stream");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }
}
