//! HTTP protocol implementation.
//!
//! This module implements the per-connection request pipeline for a
//! close-after-response HTTP/1.x file server.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection pipeline: receive, parse, resolve, emit
//! - **`parser`**: Request-line tokenization and validation
//! - **`request`**: Method, version, and request-line types
//! - **`resource`**: Path sanitization and file resolution
//! - **`response`**: Status codes and canned responses
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Pipeline
//!
//! Each accepted connection runs the stages in strict order, and any
//! stage can end the pipeline with a final response:
//!
//! ```text
//!   receive ──► parse ──► resolve ──► emit ──► close
//!      │           │          │
//!      └── 400 ────┴─ 4xx/505 ┴── 403/404
//! ```
//!
//! Every response carries `Connection: close`; there is no keep-alive and
//! no second request on a connection.
//!
//! # Example
//!
//! ```ignore
//! use atrium::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, ".".into());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod resource;
pub mod response;
pub mod writer;
