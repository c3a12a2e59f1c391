//! Gateway binary: binds the inbound HTTP server and serves the handler.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use moex_gateway::api;
use moex_gateway::prelude::*;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Arc::new(Config::new());
    info!("moex-gateway {} starting", version());
    debug!("{}", config);

    let client = Arc::new(IssHttpClientImpl::new(config.clone())?);
    let service = Arc::new(MarketServiceImpl::new(config.clone(), client));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}");

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer_addr)) => {
                        debug!("Accepted connection from {peer_addr}");
                        handle_connection(stream, service.clone(), config.clone());
                    }
                    Err(e) => error!("Failed to accept connection: {e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}

/// Serve one HTTP/1.1 connection in a spawned task.
fn handle_connection<S>(stream: tokio::net::TcpStream, service: Arc<S>, config: Arc<Config>)
where
    S: MarketService + 'static,
{
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let service = service.clone();
                let config = config.clone();
                async move { api::handle_request(req, service, config).await }
            }),
        );

        if let Err(e) = conn.await {
            debug!("Connection error: {e}");
        }
    });
}
