// Application state module
// Immutable state shared by all request handlers

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Built once at startup and shared read-only behind an `Arc`; requests
/// never mutate it, so responses stay a pure function of the request.
pub struct AppState {
    pub config: Config,
    /// Canonicalized static root; all served paths must stay under it
    pub static_root: PathBuf,
    /// Cached so the per-request path skips the config structure
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: Config, static_root: PathBuf) -> Self {
        let access_log = config.logging.access_log;
        Self {
            config,
            static_root,
            access_log,
        }
    }
}
