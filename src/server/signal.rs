// Signal handling module
//
// Supported signals:
// - SIGTERM: graceful shutdown
// - SIGINT:  graceful shutdown (Ctrl+C)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Arc<Notify>,
    /// Whether shutdown has been requested
    pub shutdown_requested: Arc<AtomicBool>,
}

impl SignalHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start signal handlers (Unix).
///
/// Spawns a background task that waits for SIGTERM/SIGINT and notifies the
/// accept loop to stop. Active connections finish naturally.
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                crate::logger::log_warning("SIGTERM received, initiating graceful shutdown");
            }
            _ = sigint.recv() => {
                crate::logger::log_warning("SIGINT received, initiating graceful shutdown");
            }
        }

        handler.shutdown_requested.store(true, Ordering::SeqCst);
        handler.shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            crate::logger::log_warning("Ctrl+C received, initiating graceful shutdown");
            handler.shutdown_requested.store(true, Ordering::SeqCst);
            handler.shutdown.notify_waiters();
        }
    });
}
