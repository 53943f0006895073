use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Accept loop: one spawned pipeline per connection.
///
/// Per-connection failures end at the log; an accept failure is logged
/// and the loop keeps serving. Nothing here can take the process down
/// short of the initial bind failing.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let root = cfg.root.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, root);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
