//! Scenario-mode responder: fixture tables plus a scenario directory.
//!
//! Matching is exact-string / prefix work only. No pattern language, no
//! query strings, no case folding. Malformed paths (too few segments) are
//! treated as "no match", never as an error.

use std::path::PathBuf;

use crate::error::{ImdsError, Result};
use crate::fixture::{self, IamCredentials};
use crate::reply::Reply;

use super::{respond_put, Method};

/// Responder backed by in-memory fixtures and a scenario directory on disk.
/// Immutable after construction; no cross-request state.
#[derive(Debug, Clone)]
pub struct ScenarioResponder {
    scenarios_dir: PathBuf,
    scenario: String,
    macs: Vec<String>,
}

impl ScenarioResponder {
    pub fn new(
        scenarios_dir: impl Into<PathBuf>,
        scenario: impl Into<String>,
        nic_count: usize,
    ) -> Self {
        Self {
            scenarios_dir: scenarios_dir.into(),
            scenario: scenario.into(),
            macs: fixture::generate_macs(nic_count),
        }
    }

    /// MACs attached to the mock instance, in device-number order.
    pub fn macs(&self) -> &[String] {
        &self.macs
    }

    /// Route one request. Pure apart from the single user-data file read.
    pub fn respond(&self, method: Method, path: &str) -> Result<Reply> {
        match method {
            Method::Put => respond_put(path),
            Method::Get => self.respond_get(path),
        }
    }

    fn respond_get(&self, path: &str) -> Result<Reply> {
        let path = path.trim_start_matches('/');

        if path == "latest/user-data" {
            return self.user_data();
        }

        let Some(meta) = path.strip_prefix("latest/meta-data/") else {
            return Err(ImdsError::NotFound);
        };

        if let Some(rest) = meta.strip_prefix("network/interfaces/macs") {
            return self.network(rest);
        }

        if let Some(rest) = meta.strip_prefix("iam/") {
            return self.iam(rest);
        }

        match fixture::STATIC_METADATA.iter().find(|(k, _)| *k == meta) {
            Some((_, v)) => Ok(Reply::text(*v)),
            None => Err(ImdsError::NotFound),
        }
    }

    /// `network/interfaces/macs` subtree. `rest` is what follows `macs`.
    fn network(&self, rest: &str) -> Result<Reply> {
        // Listing: each MAC rendered as a directory entry, newline-joined,
        // no trailing newline.
        if rest.is_empty() || rest == "/" {
            let listing = self
                .macs
                .iter()
                .map(|m| format!("{m}/"))
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(Reply::text(listing));
        }

        // Anything else must be `/<mac>/<attr...>`; a bare `/<mac>` or a
        // non-slash continuation (e.g. `macsX`) is no match.
        let Some(rest) = rest.strip_prefix('/') else {
            return Err(ImdsError::NotFound);
        };
        let (mac, attr) = match rest.split_once('/') {
            Some((mac, attr)) if !attr.is_empty() => (mac, attr),
            _ => return Err(ImdsError::NotFound),
        };

        let device_number = self
            .macs
            .iter()
            .position(|m| m == mac)
            .ok_or(ImdsError::NotFound)?;

        let value = match attr {
            "device-number" => device_number.to_string(),
            "local-ipv4s" => format!("10.0.2.{}", 15 + device_number),
            "subnet-id" => format!("subnet-test{device_number}"),
            "vpc-id" => fixture::VPC_ID.to_string(),
            _ => return Err(ImdsError::NotFound),
        };
        Ok(Reply::text(value))
    }

    /// `iam/` subtree: role listing and the credential record.
    fn iam(&self, rest: &str) -> Result<Reply> {
        if rest == "security-credentials" || rest == "security-credentials/" {
            return Ok(Reply::text(fixture::IAM_ROLE));
        }

        if let Some(role) = rest.strip_prefix("security-credentials/") {
            if role == fixture::IAM_ROLE {
                let body = serde_json::to_vec(&IamCredentials::fixture())
                    .map_err(|e| ImdsError::Internal(format!("serialize credentials: {e}")))?;
                return Ok(Reply::json(body));
            }
        }

        Err(ImdsError::NotFound)
    }

    /// `latest/user-data`: raw bytes of the scenario's `user-data.yaml`.
    fn user_data(&self) -> Result<Reply> {
        let path = self
            .scenarios_dir
            .join(&self.scenario)
            .join("user-data.yaml");
        if !path.is_file() {
            return Err(ImdsError::NotFound);
        }
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Reply::text(bytes)),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "user-data read failed");
                Err(ImdsError::Internal(format!(
                    "read {}: {e}",
                    path.display()
                )))
            }
        }
    }
}
