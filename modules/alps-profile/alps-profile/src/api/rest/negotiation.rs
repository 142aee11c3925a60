//! Response media type selection for profile documents.
//!
//! The document is offered as `application/alps+json` plus a catch-all: the
//! first acceptable range in `Accept` decides. Wildcards (or no header at all)
//! select the profile type; a concrete type is echoed back with the JSON body.

use axum::http::HeaderValue;
use mime::Mime;

pub const APPLICATION_ALPS_JSON: &str = "application/alps+json";

/// Returns the media type to label the response with.
#[must_use]
pub fn negotiate(accept: Option<&HeaderValue>) -> String {
    let Some(raw) = accept.and_then(|v| v.to_str().ok()) else {
        return APPLICATION_ALPS_JSON.to_owned();
    };

    raw.split(',')
        .filter_map(|range| range.trim().parse::<Mime>().ok())
        .find(|m| !is_rejected(m))
        .filter(|m| m.type_() != mime::STAR && m.subtype() != mime::STAR)
        .map_or_else(
            || APPLICATION_ALPS_JSON.to_owned(),
            |m| m.essence_str().to_owned(),
        )
}

/// `q=0` marks a range as not acceptable.
fn is_rejected(m: &Mime) -> bool {
    m.get_param("q")
        .and_then(|q| q.as_str().parse::<f32>().ok())
        .is_some_and(|q| q <= 0.0)
}
