use std::path::Path;

use tokio::fs::File;

use crate::http::mime;

/// Maximum number of `/` characters allowed in a target.
pub const MAX_TARGET_DEPTH: usize = 2;
/// Served when the target is `/` (or empty after stripping the slash).
pub const DEFAULT_DOCUMENT: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// Target contains `..` or exceeds the depth limit.
    Forbidden,
    /// File absent, unreadable, or a directory. The three cases are
    /// deliberately indistinguishable to the client.
    NotFound,
}

/// An open file ready to be served.
///
/// Dropped as soon as its bytes have been read (or skipped, for HEAD),
/// which closes the underlying handle.
pub struct Resource {
    pub file: File,
    pub len: u64,
    pub content_type: &'static str,
}

/// Turns a raw request target into a safe path relative to the document root.
///
/// Purely syntactic: no symlink resolution, no canonicalization. Rejects
/// `..` anywhere in the target and more than [`MAX_TARGET_DEPTH`] slashes,
/// strips one leading `/`, and substitutes [`DEFAULT_DOCUMENT`] for an
/// empty result.
pub fn sanitize_target(target: &str) -> Result<String, ResolveError> {
    if target.contains("..") {
        return Err(ResolveError::Forbidden);
    }
    if target.matches('/').count() > MAX_TARGET_DEPTH {
        return Err(ResolveError::Forbidden);
    }

    let relative = target.strip_prefix('/').unwrap_or(target);
    if relative.is_empty() {
        Ok(DEFAULT_DOCUMENT.to_string())
    } else {
        Ok(relative.to_string())
    }
}

/// Resolves a validated target to an open file under `root`.
///
/// Opens only after the syntactic checks pass. Length comes from file
/// metadata; directories are reported as not found rather than leaking
/// their existence.
pub async fn resolve(root: &Path, target: &str) -> Result<Resource, ResolveError> {
    let relative = sanitize_target(target)?;
    let path = root.join(&relative);

    let file = File::open(&path).await.map_err(|_| ResolveError::NotFound)?;
    let metadata = file.metadata().await.map_err(|_| ResolveError::NotFound)?;
    if metadata.is_dir() {
        return Err(ResolveError::NotFound);
    }

    Ok(Resource {
        file,
        len: metadata.len(),
        content_type: mime::content_type_for(&relative),
    })
}
