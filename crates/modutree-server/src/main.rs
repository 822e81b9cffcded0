//! ModuTree Server — application entry point.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("modutree=info".parse().unwrap()),
        )
        .init();

    if let Err(err) = modutree_server::start_server().await {
        tracing::error!(%err, "Server exited with error");
        std::process::exit(1);
    }
}
