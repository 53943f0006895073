//! Atrium - Concurrent static file server
//!
//! A minimal HTTP/1.x server that maps request targets to files under a
//! document root. One request per connection; every response closes it.

pub mod config;
pub mod http;
pub mod server;
