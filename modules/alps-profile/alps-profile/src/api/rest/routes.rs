use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::handlers::{self, RenderOptions};
use crate::config::AlpsProfileConfig;
use crate::domain::service::AlpsProfileService;

/// Mounts `GET {base_path}` (all types) and `GET {base_path}/{rel}` (one type).
pub fn register_routes(
    mut router: Router,
    service: Arc<AlpsProfileService>,
    config: &AlpsProfileConfig,
) -> Router {
    let base = normalize_base_path(&config.base_path);
    let document_path = if base.is_empty() { "/" } else { base.as_str() };

    router = router
        .route(document_path, get(handlers::get_profile))
        .route(&format!("{base}/{{rel}}"), get(handlers::get_entity_profile));

    tracing::debug!(base_path = document_path, "Registered profile routes");

    router
        .layer(Extension(service))
        .layer(Extension(RenderOptions {
            pretty_print: config.pretty_print,
        }))
}

/// Leading slash, no trailing slash; the root path becomes empty.
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
