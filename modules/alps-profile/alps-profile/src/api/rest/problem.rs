//! `application/problem+json` bodies (RFC 9457) for failed profile requests.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Serialize, Serializer};

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

const ERROR_TYPE_BASE: &str = "https://errors.hyperspot.com";

/// A failed profile request. The problem type URI is derived from `code`.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_url: String,
    pub title: String,
    #[serde(serialize_with = "status_as_u16")]
    pub status: StatusCode,
    pub detail: String,
    pub instance: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serialize_with hands us a reference
fn status_as_u16<S: Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u16(status.as_u16())
}

impl Problem {
    /// Problem of kind `code` raised while serving `instance`.
    pub fn coded(
        status: StatusCode,
        code: &str,
        title: &str,
        detail: impl Into<String>,
        instance: &str,
    ) -> Self {
        Self {
            type_url: format!("{ERROR_TYPE_BASE}/{code}"),
            title: title.to_owned(),
            status,
            detail: detail.into(),
            instance: instance.to_owned(),
            code: code.to_owned(),
            trace_id: None,
        }
    }

    /// Attaches the id of the current tracing span, if there is one.
    pub fn traced(mut self) -> Self {
        self.trace_id = tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn serializes_status_as_u16_and_type_from_code() {
        let p = Problem::coded(
            StatusCode::NOT_FOUND,
            "ALPS_PROFILE_NOT_FOUND",
            "Resource not found",
            "no such rel",
            "/alps/orders",
        );
        let json = serde_json::to_value(&p).unwrap();

        assert_eq!(json["status"], 404);
        assert_eq!(json["type"], "https://errors.hyperspot.com/ALPS_PROFILE_NOT_FOUND");
        assert_eq!(json["instance"], "/alps/orders");
        assert_eq!(json["code"], "ALPS_PROFILE_NOT_FOUND");
        assert!(json.get("trace_id").is_none());
    }

    #[test]
    fn response_uses_problem_content_type() {
        let resp = Problem::coded(
            StatusCode::INTERNAL_SERVER_ERROR,
            "ALPS_PROFILE_INTERNAL",
            "Boom",
            "boom",
            "/alps",
        )
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            APPLICATION_PROBLEM_JSON
        );
    }
}
