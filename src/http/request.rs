/// HTTP request methods served by this server.
///
/// Only GET and HEAD are retrievals; anything else is rejected with
/// 405 Method Not Allowed before the target is ever looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// HEAD - Like GET but without the response body
    Head,
}

impl Method {
    /// Parses a request-line method token.
    ///
    /// Matching is case-sensitive: `get` is not a method.
    ///
    /// # Example
    ///
    /// ```
    /// # use atrium::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_token("get"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::Get),
            "HEAD" => Some(Method::Head),
            _ => None,
        }
    }

    /// True for HEAD requests, which get headers but never a body.
    pub fn is_head(&self) -> bool {
        matches!(self, Method::Head)
    }
}

/// HTTP protocol versions accepted on the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// HTTP/1.0
    Http10,
    /// HTTP/1.1
    Http11,
}

impl Version {
    /// Parses a request-line version token (case-sensitive, exact match).
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "HTTP/1.0" => Some(Version::Http10),
            "HTTP/1.1" => Some(Version::Http11),
            _ => None,
        }
    }

    /// HTTP/1.1 requests must carry a Host header; HTTP/1.0 is exempt.
    pub fn requires_host(&self) -> bool {
        matches!(self, Version::Http11)
    }
}

/// The parsed first line of a request.
///
/// Derived once from the raw receive buffer and immutable thereafter.
/// The target is kept exactly as received; sanitization happens later
/// in [`resource`](crate::http::resource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method (GET or HEAD)
    pub method: Method,
    /// The request target as received (e.g. "/index.html")
    pub target: String,
    /// HTTP version (1.0 or 1.1)
    pub version: Version,
}
