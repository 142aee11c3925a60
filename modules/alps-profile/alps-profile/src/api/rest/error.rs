//! REST error mapping for the alps-profile module.

use http::StatusCode;

use super::problem::Problem;
use crate::domain::error::DomainError;

/// Map a domain error to a problem for the request at `instance`.
///
/// Only a missing collection relation is the client's fault; anything else
/// means the registered metadata is inconsistent.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = if let DomainError::ResourceNotFound { rel } = e {
        Problem::coded(
            StatusCode::NOT_FOUND,
            "ALPS_PROFILE_NOT_FOUND",
            "Resource not found",
            format!("No exposed resource with relation '{rel}'"),
            instance,
        )
    } else {
        tracing::error!(error = %e, "Profile metadata is inconsistent");
        Problem::coded(
            StatusCode::INTERNAL_SERVER_ERROR,
            "ALPS_PROFILE_CONFIGURATION",
            "Profile configuration error",
            e.to_string(),
            instance,
        )
    };
    problem.traced()
}

/// Problem for a document that was built but could not be encoded.
pub fn serialization_problem(e: &serde_json::Error, instance: &str) -> Problem {
    tracing::error!(error = %e, "Failed to serialize profile document");
    Problem::coded(
        StatusCode::INTERNAL_SERVER_ERROR,
        "ALPS_PROFILE_INTERNAL",
        "Internal Server Error",
        "The profile document could not be serialized",
        instance,
    )
    .traced()
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alps_profile_sdk::EntityType;

    #[test]
    fn not_found_maps_to_404() {
        let p = domain_error_to_problem(
            &DomainError::ResourceNotFound {
                rel: "orders".to_owned(),
            },
            "/alps/orders",
        );
        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.code, "ALPS_PROFILE_NOT_FOUND");
        assert_eq!(p.instance, "/alps/orders");
        assert!(p.detail.contains("orders"));
    }

    #[test]
    fn configuration_error_maps_to_500() {
        let p: Problem = DomainError::MissingResourceMapping {
            entity: EntityType::new("com.acme.Person"),
        }
        .into();
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(p.code, "ALPS_PROFILE_CONFIGURATION");
        assert!(p.type_url.ends_with("/ALPS_PROFILE_CONFIGURATION"));
    }

    #[test]
    fn empty_relation_maps_to_500() {
        let p = domain_error_to_problem(
            &DomainError::EmptyRelation {
                entity: EntityType::new("com.acme.Person"),
                element: "search".to_owned(),
            },
            "/alps",
        );
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(p.code, "ALPS_PROFILE_CONFIGURATION");
    }
}
