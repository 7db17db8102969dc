use std::sync::Arc;

use crate::config::Config;
use crate::output::OutputSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable output sink. Default: FsOutputSink rooted at OUTPUT_DIR.
    pub sink: Arc<dyn OutputSink>,
}
