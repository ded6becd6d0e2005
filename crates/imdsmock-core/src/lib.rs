//! imdsmock core: transport-free routing, fixture data, and error surface.
//!
//! This crate shapes complete responses from `(method, path)` pairs without
//! touching sockets, so every routing rule is unit-testable. The axum
//! transport in `imdsmock-server` only executes the resulting [`Reply`].
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ImdsError`/`Result` so the mock stays
//! available for the full duration of a test run.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod fixture;
pub mod reply;
pub mod responder;

pub use error::{ImdsError, Result};
pub use reply::Reply;
pub use responder::{Method, ScenarioResponder, TreeResponder};
