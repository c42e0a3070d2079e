// Application state module
// Read-only shared state: loaded configuration plus the SPA handler built
// from it. Shared via Arc across all connections; never mutated after
// construction, so request handling needs no locks.

use crate::handler::{SpaHandler, SpaOptions};
use crate::vfs::DiskFs;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    pub spa: SpaHandler<DiskFs>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let spa = SpaHandler::with_options(
            DiskFs::new(&config.spa.root),
            SpaOptions {
                fallback_path: config.spa.fallback_path.clone(),
                index_redirect: config.spa.index_redirect,
            },
        );

        Self { config, spa }
    }
}
