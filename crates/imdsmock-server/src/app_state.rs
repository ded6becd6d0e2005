//! Shared application state: the responder picked at startup.

use std::sync::Arc;

use imdsmock_core::{Method, Reply, Result, ScenarioResponder, TreeResponder};

/// Cloneable handle to the immutable responder. All handlers are read-only,
/// so no locking discipline is required.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Responder>,
}

enum Responder {
    Scenario(ScenarioResponder),
    Tree(TreeResponder),
}

impl AppState {
    pub fn scenario(responder: ScenarioResponder) -> Self {
        Self {
            inner: Arc::new(Responder::Scenario(responder)),
        }
    }

    pub fn tree(responder: TreeResponder) -> Self {
        Self {
            inner: Arc::new(Responder::Tree(responder)),
        }
    }

    pub fn respond(&self, method: Method, path: &str) -> Result<Reply> {
        match &*self.inner {
            Responder::Scenario(r) => r.respond(method, path),
            Responder::Tree(r) => r.respond(method, path),
        }
    }
}
