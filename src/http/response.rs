/// HTTP status codes this server can emit.
///
/// Every reachable failure path maps to exactly one of these:
/// - `Ok` (200): file found and served
/// - `BadRequest` (400): incomplete or malformed request, or missing Host
/// - `Forbidden` (403): path traversal or depth limit
/// - `NotFound` (404): file absent, unreadable, or a directory
/// - `MethodNotAllowed` (405): method other than GET/HEAD
/// - `VersionNotSupported` (505): version other than HTTP/1.0 or 1.1
/// - `InternalServerError` (500): file read failed after open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
    /// 505 HTTP Version Not Supported
    VersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use atrium::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
            StatusCode::VersionNotSupported => 505,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::VersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

/// A complete response, ready to be serialized.
///
/// The header block is fixed: `Content-Length`, `Content-Type`, and
/// `Connection: close` — every response is the last interaction on its
/// connection. `content_length` is carried separately from the body so
/// HEAD responses can declare the file's length without holding its bytes.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub content_length: u64,
    pub body: Vec<u8>,
}

impl Response {
    /// A response whose declared length is its body's length.
    pub fn with_body(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            content_length: body.len() as u64,
            body,
        }
    }

    /// Headers only, declaring `content_length` bytes that are never sent.
    /// Used for HEAD requests.
    pub fn head(status: StatusCode, content_type: &'static str, content_length: u64) -> Self {
        Self {
            status,
            content_type,
            content_length,
            body: Vec::new(),
        }
    }

    fn error(status: StatusCode, body: &'static str) -> Self {
        Self::with_body(status, "text/plain", body.as_bytes().to_vec())
    }

    /// 400: header terminator never arrived.
    pub fn incomplete() -> Self {
        Self::error(StatusCode::BadRequest, "Incomplete HTTP request.\r\n")
    }

    /// 400: request line not exactly three valid tokens.
    pub fn malformed() -> Self {
        Self::error(StatusCode::BadRequest, "Malformed HTTP request line.\r\n")
    }

    /// 400: HTTP/1.1 request without a Host header.
    pub fn missing_host() -> Self {
        Self::error(StatusCode::BadRequest, "Host header is required.\r\n")
    }

    /// 403: path traversal or depth limit.
    pub fn forbidden() -> Self {
        Self::error(StatusCode::Forbidden, "Invalid path.\r\n")
    }

    /// 404: target does not resolve to a readable file.
    pub fn not_found() -> Self {
        Self::error(StatusCode::NotFound, "The requested file was not found.\r\n")
    }

    /// 405: method other than GET or HEAD.
    pub fn method_not_allowed() -> Self {
        Self::error(
            StatusCode::MethodNotAllowed,
            "Supported methods: GET, HEAD.\r\n",
        )
    }

    /// 505: version other than HTTP/1.0 or HTTP/1.1. Empty body.
    pub fn version_not_supported() -> Self {
        Self::with_body(StatusCode::VersionNotSupported, "text/plain", Vec::new())
    }

    /// 500: the resolved file could not be read.
    pub fn internal_error() -> Self {
        Self::error(
            StatusCode::InternalServerError,
            "Failed to read the requested file.\r\n",
        )
    }
}
