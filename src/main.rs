use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use spa_server::config::{AppState, Config};
use spa_server::logger;
use spa_server::server::{self, SignalHandler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(serve(cfg))
}

async fn serve(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(AppState::new(cfg));
    let active_connections = Arc::new(AtomicUsize::new(0));

    logger::log_server_start(&addr, &state.config);

    let signals = Arc::new(SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = signals.shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    Ok(())
}
