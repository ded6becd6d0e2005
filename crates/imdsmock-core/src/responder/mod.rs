//! Request responders, one per serving mode.
//!
//! Both modes answer the IMDSv2 token PUT identically; they differ only in
//! how GETs are resolved (fixture tables + scenario directory vs. a mirrored
//! directory tree).

mod scenario;
mod tree;

pub use scenario::ScenarioResponder;
pub use tree::TreeResponder;

use crate::error::{ImdsError, Result};
use crate::fixture;
use crate::reply::Reply;

/// The two methods the mock distinguishes. Anything else is Not Found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

/// Shared PUT handling: only `/latest/api/token` exists.
pub(crate) fn respond_put(path: &str) -> Result<Reply> {
    if path == "/latest/api/token" {
        Ok(Reply::token(fixture::TOKEN, fixture::TOKEN_TTL_SECONDS))
    } else {
        Err(ImdsError::NotFound)
    }
}
