use std::sync::Arc;

use serde_json::Value;

use crate::cache::TtlCache;
use crate::jobs::generator::Generator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// One result cache for every generation namespace. Keys carry their own
    /// prefix (`job-details:`, `recommendations:`).
    pub cache: Arc<TtlCache<Value>>,
    /// Pluggable generator. Default: `LlmGenerator` over the Claude client.
    pub generator: Arc<dyn Generator>,
}
