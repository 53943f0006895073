use atrium::http::parser::{ParseError, parse_request};
use atrium::http::request::{Method, Version};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.target, "/index.html");
    assert_eq!(parsed.version, Version::Http11);
}

#[test]
fn test_parse_head_request() {
    let req = b"HEAD /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.method, Method::Head);
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    assert_eq!(parse_request(req), Err(ParseError::Incomplete));
}

#[test]
fn test_parse_empty_buffer_is_incomplete() {
    assert_eq!(parse_request(b""), Err(ParseError::Incomplete));
}

#[test]
fn test_parse_two_tokens_is_malformed() {
    let req = b"GET /index.html\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::Malformed));
}

#[test]
fn test_parse_four_tokens_is_malformed() {
    let req = b"GET /index.html HTTP/1.1 extra\r\nHost: x\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::Malformed));
}

#[test]
fn test_parse_overlong_target_is_malformed() {
    let target = format!("/{}", "a".repeat(300));
    let req = format!("GET {} HTTP/1.1\r\nHost: x\r\n\r\n", target);
    assert_eq!(parse_request(req.as_bytes()), Err(ParseError::Malformed));
}

#[test]
fn test_parse_overlong_method_is_malformed() {
    let req = b"GETGETGETGET / HTTP/1.1\r\nHost: x\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::Malformed));
}

#[test]
fn test_parse_post_is_unsupported_method() {
    let req = b"POST /api HTTP/1.1\r\nHost: x\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::UnsupportedMethod));
}

#[test]
fn test_parse_lowercase_get_is_unsupported_method() {
    // Method matching is case-sensitive
    let req = b"get / HTTP/1.1\r\nHost: x\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::UnsupportedMethod));
}

#[test]
fn test_parse_method_checked_before_version() {
    // Invalid method and invalid version: the method rejection wins
    let req = b"POST / HTTP/9.9\r\nHost: x\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::UnsupportedMethod));
}

#[test]
fn test_parse_unsupported_version() {
    let req = b"GET / HTTP/2.0\r\nHost: x\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::UnsupportedVersion));
}

#[test]
fn test_parse_http10_accepted() {
    let req = b"GET / HTTP/1.0\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.version, Version::Http10);
}

#[test]
fn test_parse_http11_without_host_rejected() {
    let req = b"GET / HTTP/1.1\r\n\r\n";
    assert_eq!(parse_request(req), Err(ParseError::MissingHost));
}

#[test]
fn test_parse_http10_without_host_accepted() {
    // Host is only mandatory for HTTP/1.1
    let req = b"GET /page.html HTTP/1.0\r\nUser-Agent: test\r\n\r\n";
    assert!(parse_request(req).is_ok());
}

#[test]
fn test_parse_host_found_among_later_headers() {
    let req = b"GET / HTTP/1.1\r\nUser-Agent: test\r\nAccept: */*\r\nHost: example.com\r\n\r\n";
    assert!(parse_request(req).is_ok());
}

#[test]
fn test_parse_other_headers_ignored() {
    let req = b"GET / HTTP/1.1\r\nHost: x\r\nBrokenHeaderWithoutColon\r\n\r\n";

    // Only the request line and Host presence are inspected
    assert!(parse_request(req).is_ok());
}

#[test]
fn test_parse_target_preserved_verbatim() {
    let req = b"GET /search?q=rust HTTP/1.1\r\nHost: x\r\n\r\n";
    let parsed = parse_request(req).unwrap();

    assert_eq!(parsed.target, "/search?q=rust");
}
