//! Top-level facade crate for imdsmock.
//!
//! Re-exports the core routing types and the server library so test harnesses
//! can depend on a single crate.

pub mod core {
    pub use imdsmock_core::*;
}

pub mod server {
    pub use imdsmock_server::*;
}
