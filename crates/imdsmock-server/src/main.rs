//! imdsmock server binary.
//!
//! A mock EC2 instance-metadata endpoint for integration tests:
//! - `scenario` mode: fixture tables plus a scenario directory (user-data)
//! - `tree` mode: a directory mirrored 1:1 onto URL paths

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use imdsmock_core::{ScenarioResponder, TreeResponder};
use imdsmock_server::{
    app_state::AppState,
    cli::{Cli, Mode},
    router,
};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let (listen, state) = match cli.mode {
        Mode::Scenario {
            port,
            scenarios_dir,
            scenario,
            nic_count,
        } => {
            let responder = ScenarioResponder::new(&scenarios_dir, scenario.as_str(), nic_count);
            tracing::info!(
                scenarios_dir = %scenarios_dir.display(),
                scenario,
                nic_count,
                macs = ?responder.macs(),
                "scenario mode"
            );
            (
                SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
                AppState::scenario(responder),
            )
        }
        Mode::Tree { root, port, host } => {
            tracing::info!(root = %root.display(), "tree mode");
            (
                SocketAddr::new(host, port),
                AppState::tree(TreeResponder::new(root)),
            )
        }
    };

    let app = router::build_router(state);

    tracing::info!(%listen, "imdsmock starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
