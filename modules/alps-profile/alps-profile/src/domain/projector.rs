//! Projection selector: applies a named view to a source object.

use std::sync::Arc;

use alps_profile_sdk::{ProjectionDefinitions, ProjectionFactory};
use serde_json::Value;

use super::error::ProjectionError;

/// Looks up a projection by name for the source type and applies it.
pub struct Projector {
    definitions: Arc<dyn ProjectionDefinitions>,
    factory: Arc<dyn ProjectionFactory>,
}

impl Projector {
    #[must_use]
    pub fn new(
        definitions: Arc<dyn ProjectionDefinitions>,
        factory: Arc<dyn ProjectionFactory>,
    ) -> Self {
        Self {
            definitions,
            factory,
        }
    }

    /// Returns `source` unchanged for a missing or blank selector, otherwise
    /// the view produced by the projection registered under that name.
    ///
    /// # Errors
    /// `UnknownProjection` when `source_type` has no projection named `projection`.
    pub fn project(
        &self,
        source_type: &str,
        source: Value,
        projection: Option<&str>,
    ) -> Result<Value, ProjectionError> {
        let Some(name) = projection.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(source);
        };

        let definition = self
            .definitions
            .projection_for(source_type, name)
            .ok_or_else(|| {
                tracing::warn!(source_type, projection = name, "Unknown projection requested");
                ProjectionError::UnknownProjection {
                    source_type: source_type.to_owned(),
                    projection: name.to_owned(),
                }
            })?;

        Ok(self.factory.create_projection(&source, definition))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::infra::{InMemoryCatalog, PropertySubsetProjectionFactory};
    use alps_profile_sdk::ProjectionDefinition;
    use serde_json::json;

    fn projector() -> Projector {
        let mut catalog = InMemoryCatalog::new();
        catalog.register_projection(ProjectionDefinition {
            name: "summary".to_owned(),
            source_type: "com.acme.Person".to_owned(),
            properties: vec!["lastName".to_owned()],
        });
        Projector::new(Arc::new(catalog), Arc::new(PropertySubsetProjectionFactory))
    }

    #[test]
    fn blank_selector_returns_source() {
        let source = json!({ "lastName": "Hopper" });
        for selector in [None, Some(""), Some("   ")] {
            let out = projector()
                .project("com.acme.Person", source.clone(), selector)
                .unwrap();
            assert_eq!(out, source);
        }
    }

    #[test]
    fn named_selector_applies_projection() {
        let out = projector()
            .project(
                "com.acme.Person",
                json!({ "firstName": "Grace", "lastName": "Hopper" }),
                Some(" summary "),
            )
            .unwrap();
        assert_eq!(out, json!({ "lastName": "Hopper" }));
    }

    #[test]
    fn projection_is_scoped_to_source_type() {
        let err = projector()
            .project("com.acme.Order", json!({}), Some("summary"))
            .unwrap_err();
        assert_eq!(
            err,
            ProjectionError::UnknownProjection {
                source_type: "com.acme.Order".to_owned(),
                projection: "summary".to_owned(),
            }
        );
    }
}
