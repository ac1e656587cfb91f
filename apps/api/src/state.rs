use std::sync::Arc;

use crate::config::Config;
use crate::layout::LayoutStyle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Style used when a layout request does not carry one. Read-only; every
    /// composition still builds its own flow state.
    pub style: Arc<LayoutStyle>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let style = Arc::new(config.style());
        AppState { config, style }
    }
}
