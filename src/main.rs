use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

mod api;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    // The static root must exist before any socket is bound.
    let static_root = match std::fs::canonicalize(&cfg.static_files.root) {
        Ok(path) if path.is_dir() => path,
        Ok(path) => {
            logger::log_error(&format!(
                "Static root '{}' is not a directory",
                path.display()
            ));
            return Err(format!("static root '{}' is not a directory", cfg.static_files.root).into());
        }
        Err(e) => {
            logger::log_error(&format!(
                "Static root '{}' not found: {e}",
                cfg.static_files.root
            ));
            return Err(format!("static root '{}' not found", cfg.static_files.root).into());
        }
    };

    let addr = cfg.socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    if cfg.server.open_browser {
        server::browser::spawn_browser_open(cfg.root_url());
    }

    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(config::AppState::new(cfg, static_root));
    run_server(listener, state, shutdown).await;

    logger::log_server_stopped();
    Ok(())
}

/// Accept loop. Runs until the shutdown signal fires, then drops the
/// listener so the socket is released while in-flight connections finish
/// on their own tasks.
async fn run_server(
    listener: TcpListener,
    state: Arc<config::AppState>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::connection::handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
}
