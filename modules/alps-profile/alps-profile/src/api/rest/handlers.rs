use std::sync::Arc;

use alps_profile_sdk::Alps;
use axum::extract::{Extension, Path};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use super::dto::AlpsDto;
use super::error::{domain_error_to_problem, serialization_problem};
use super::negotiation::{APPLICATION_ALPS_JSON, negotiate};
use super::problem::Problem;
use crate::domain::service::AlpsProfileService;

/// Per-router rendering options.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub pretty_print: bool,
}

pub async fn get_profile(
    Extension(svc): Extension<Arc<AlpsProfileService>>,
    Extension(render): Extension<RenderOptions>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, Problem> {
    let alps = svc
        .build_document()
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    render_document(alps, &headers, render, uri.path())
}

pub async fn get_entity_profile(
    Extension(svc): Extension<Arc<AlpsProfileService>>,
    Extension(render): Extension<RenderOptions>,
    Path(rel): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, Problem> {
    let alps = svc
        .entity_profile(&rel)
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    render_document(alps, &headers, render, uri.path())
}

fn render_document(
    alps: Alps,
    headers: &HeaderMap,
    render: RenderOptions,
    instance: &str,
) -> Result<Response, Problem> {
    let dto = AlpsDto::from(alps);
    let body = if render.pretty_print {
        serde_json::to_vec_pretty(&dto)
    } else {
        serde_json::to_vec(&dto)
    }
    .map_err(|e| serialization_problem(&e, instance))?;

    let content_type = HeaderValue::from_str(&negotiate(headers.get(header::ACCEPT)))
        .unwrap_or_else(|_| HeaderValue::from_static(APPLICATION_ALPS_JSON));

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
