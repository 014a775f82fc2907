use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, ConnectionSettings};
use crate::http::router::Router;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;
    info!(
        addr = %cfg.server.listen_addr,
        directory = ?cfg.files.directory,
        "Listening"
    );

    let router = Arc::new(Router::from_config(cfg));
    serve(listener, router, ConnectionSettings::from_config(&cfg.server)).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    settings: ConnectionSettings,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router, settings);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
