//! Tree-mode responder: a directory mirrored 1:1 onto URL paths.
//!
//! A generic static file server scoped to one root. A request for a
//! directory resolves to that directory's `index.html`. No token validation,
//! no per-attribute logic.

use std::path::{Component, Path, PathBuf};

use crate::error::{ImdsError, Result};
use crate::reply::Reply;

use super::{respond_put, Method};

#[derive(Debug, Clone)]
pub struct TreeResponder {
    root: PathBuf,
}

impl TreeResponder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn respond(&self, method: Method, path: &str) -> Result<Reply> {
        match method {
            Method::Put => respond_put(path),
            Method::Get => self.serve(path),
        }
    }

    fn serve(&self, path: &str) -> Result<Reply> {
        let rel = resolve_within_root(path).ok_or(ImdsError::NotFound)?;
        let mut full = self.root.join(rel);
        if full.is_dir() {
            full.push("index.html");
        }
        if !full.is_file() {
            return Err(ImdsError::NotFound);
        }
        match std::fs::read(&full) {
            Ok(bytes) => Ok(Reply::text(bytes)),
            Err(e) => {
                tracing::error!(path = %full.display(), error = %e, "file read failed");
                Err(ImdsError::Internal(format!("read {}: {e}", full.display())))
            }
        }
    }
}

/// Lexically resolve a URL path to a root-relative path. `..` may collapse
/// earlier segments but must not climb above the root.
fn resolve_within_root(path: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for comp in Path::new(path.trim_start_matches('/')).components() {
        match comp {
            Component::Normal(seg) => out.push(seg),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(out)
}
