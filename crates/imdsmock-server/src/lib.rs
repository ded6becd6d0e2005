//! imdsmock server library: CLI schema, app state, and the axum transport.
//!
//! Consumed by the binary (`main.rs`) and by the HTTP round-trip tests.

pub mod app_state;
pub mod cli;
pub mod router;
