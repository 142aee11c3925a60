//! Projection contracts: named alternate views of a domain object.

use serde_json::Value;

/// A named view registered for a source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionDefinition {
    pub name: String,
    pub source_type: String,
    /// Properties exposed by the view, in output order.
    pub properties: Vec<String>,
}

/// Registry of projections per source type.
pub trait ProjectionDefinitions: Send + Sync {
    /// Looks up the projection `name` registered for `source_type`.
    fn projection_for(&self, source_type: &str, name: &str) -> Option<&ProjectionDefinition>;
}

/// Produces the projected view of a source object.
pub trait ProjectionFactory: Send + Sync {
    fn create_projection(&self, source: &Value, projection: &ProjectionDefinition) -> Value;
}
