use alps_profile_sdk::{ProjectionDefinition, ProjectionFactory};
use serde_json::{Map, Value};

/// Builds a projection by copying the listed properties of a JSON object.
///
/// Properties absent from the source are emitted as `null`; non-object
/// sources have no properties to select and are returned as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertySubsetProjectionFactory;

impl ProjectionFactory for PropertySubsetProjectionFactory {
    fn create_projection(&self, source: &Value, projection: &ProjectionDefinition) -> Value {
        let Value::Object(fields) = source else {
            return source.clone();
        };

        let view: Map<String, Value> = projection
            .properties
            .iter()
            .map(|name| (name.clone(), fields.get(name).cloned().unwrap_or(Value::Null)))
            .collect();
        Value::Object(view)
    }
}
