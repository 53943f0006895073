use std::path::PathBuf;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::debug;

use crate::http::parser::{self, ParseError};
use crate::http::request::RequestLine;
use crate::http::resource::{self, ResolveError};
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Hard cap on accumulated request bytes.
pub const MAX_REQUEST_BYTES: usize = 8192;
/// Hard cap on read attempts before giving up on the terminator.
pub const MAX_READ_ATTEMPTS: usize = 64;
/// Idle timeout applied to each individual read.
pub const READ_TIMEOUT: Duration = Duration::from_millis(5000);

/// Outcome of the bounded receive stage.
enum Received {
    /// Header terminator found; the buffer holds a parseable request head.
    Complete,
    /// Some bytes arrived but the terminator never did (cap, attempt
    /// limit, timeout, error, or EOF first). Answered with 400.
    Partial,
    /// Nothing usable arrived; the connection is torn down silently.
    Closed,
}

/// One per-connection request pipeline.
///
/// Owns the stream and receive buffer exclusively; nothing is shared with
/// other connections. `run` executes receive, parse, resolve, and emit in
/// strict order, sends exactly one response (or none, when the peer
/// vanished before sending anything), and shuts the stream down once.
///
/// Generic over the stream so tests can drive the whole pipeline through
/// `tokio::io::duplex`.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    root: PathBuf,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, root: PathBuf) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(1024),
            root,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let response = match self.receive().await {
            Received::Closed => {
                debug!("peer closed before a request arrived");
                let _ = self.stream.shutdown().await;
                return Ok(());
            }
            Received::Partial => Response::incomplete(),
            Received::Complete => match parser::parse_request(&self.buffer) {
                Ok(request) => self.respond_to(&request).await,
                Err(err) => reject(err),
            },
        };

        debug!(status = response.status.as_u16(), "sending response");

        let mut writer = ResponseWriter::new(&response);
        let write_result = writer.write_to_stream(&mut self.stream).await;
        let _ = self.stream.shutdown().await;
        write_result
    }

    /// Reads until the header terminator appears or a bound trips.
    ///
    /// Bounds: [`MAX_REQUEST_BYTES`] of accumulated data,
    /// [`MAX_READ_ATTEMPTS`] reads, and [`READ_TIMEOUT`] per read.
    /// Protects against peers that trickle a header forever.
    async fn receive(&mut self) -> Received {
        for _ in 0..MAX_READ_ATTEMPTS {
            if parser::find_headers_end(&self.buffer).is_some() {
                return Received::Complete;
            }
            if self.buffer.len() >= MAX_REQUEST_BYTES {
                return Received::Partial;
            }

            match timeout(READ_TIMEOUT, self.stream.read_buf(&mut self.buffer)).await {
                Ok(Ok(0)) | Ok(Err(_)) | Err(_) => {
                    // EOF, hard error, or idle timeout
                    return if self.buffer.is_empty() {
                        Received::Closed
                    } else {
                        Received::Partial
                    };
                }
                Ok(Ok(_)) => {}
            }
        }

        if parser::find_headers_end(&self.buffer).is_some() {
            Received::Complete
        } else {
            Received::Partial
        }
    }

    /// Resolves the target and builds the final response.
    ///
    /// For GET the whole file is read into memory before anything is
    /// written, so a read failure yields a clean 500 instead of trailing
    /// a 200 header. For HEAD the file's bytes are never read.
    async fn respond_to(&self, request: &RequestLine) -> Response {
        let mut resource = match resource::resolve(&self.root, &request.target).await {
            Ok(resource) => resource,
            Err(ResolveError::Forbidden) => return Response::forbidden(),
            Err(ResolveError::NotFound) => return Response::not_found(),
        };

        if request.method.is_head() {
            return Response::head(StatusCode::Ok, resource.content_type, resource.len);
        }

        let mut body = Vec::with_capacity(resource.len as usize);
        match resource.file.read_to_end(&mut body).await {
            Ok(_) => Response::with_body(StatusCode::Ok, resource.content_type, body),
            Err(err) => {
                tracing::error!(path = %request.target, "file read failed: {}", err);
                Response::internal_error()
            }
        }
    }
}

fn reject(err: ParseError) -> Response {
    match err {
        ParseError::Incomplete => Response::incomplete(),
        ParseError::Malformed => Response::malformed(),
        ParseError::UnsupportedMethod => Response::method_not_allowed(),
        ParseError::UnsupportedVersion => Response::version_not_supported(),
        ParseError::MissingHost => Response::missing_host(),
    }
}
