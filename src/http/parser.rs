use crate::http::request::{Method, RequestLine, Version};

/// Longest method token accepted before the line is declared malformed.
pub const MAX_METHOD_LEN: usize = 9;
/// Longest request target accepted.
pub const MAX_TARGET_LEN: usize = 255;
/// Longest version token accepted.
pub const MAX_VERSION_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No `\r\n\r\n` header terminator in the buffer.
    Incomplete,
    /// Request line is not exactly three tokens, a token is over its
    /// length cap, or the head is not valid UTF-8.
    Malformed,
    /// Method token is not GET or HEAD.
    UnsupportedMethod,
    /// Version token is not HTTP/1.0 or HTTP/1.1.
    UnsupportedVersion,
    /// HTTP/1.1 request without a Host header line.
    MissingHost,
}

/// Locates the end of the header section.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Parses and validates the request line out of a raw receive buffer.
///
/// Runs the checks in a fixed order, each able to reject on its own:
/// terminator present, exactly three tokens within their length caps,
/// supported method, supported version, and (for HTTP/1.1) a header
/// line starting with `Host:`. Headers other than Host are ignored.
pub fn parse_request(buf: &[u8]) -> Result<RequestLine, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;

    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::Malformed)?;

    let mut lines = head.split("\r\n");
    let request_line = lines.next().ok_or(ParseError::Malformed)?;

    let tokens: Vec<&str> = request_line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(ParseError::Malformed);
    }
    let (method_token, target, version_token) = (tokens[0], tokens[1], tokens[2]);

    if method_token.len() > MAX_METHOD_LEN
        || target.len() > MAX_TARGET_LEN
        || version_token.len() > MAX_VERSION_LEN
    {
        return Err(ParseError::Malformed);
    }

    let method = Method::from_token(method_token).ok_or(ParseError::UnsupportedMethod)?;
    let version = Version::from_token(version_token).ok_or(ParseError::UnsupportedVersion)?;

    if version.requires_host() && !lines.any(|line| line.starts_with("Host:")) {
        return Err(ParseError::MissingHost);
    }

    Ok(RequestLine {
        method,
        target: target.to_string(),
        version,
    })
}
