//! MIME type detection based on file extensions.

/// Content type for paths that match no known extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const EXTENSIONS: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".htm", "text/html"),
    (".txt", "text/plain"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".json", "application/json"),
    (".pdf", "application/pdf"),
];

/// Classifies a path by its trailing extension.
///
/// Strict suffix match against the fixed table; anything unmatched is
/// served as `application/octet-stream`.
///
/// # Example
///
/// ```
/// # use atrium::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.html"), "text/html");
/// assert_eq!(content_type_for("data.bin"), "application/octet-stream");
/// ```
pub fn content_type_for(path: &str) -> &'static str {
    EXTENSIONS
        .iter()
        .find(|(ext, _)| path.ends_with(ext))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
