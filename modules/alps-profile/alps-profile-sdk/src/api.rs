//! `AlpsProfileClient` trait definition.

use serde_json::Value;

use crate::errors::AlpsProfileError;
use crate::models::Alps;

/// Public API of the alps-profile module.
///
/// Document builds are synchronous and side-effect free, so the client is a
/// plain trait object shared behind an `Arc`:
/// ```ignore
/// let client: Arc<dyn AlpsProfileClient> = module.client();
/// let document = client.profile_document()?;
/// ```
pub trait AlpsProfileClient: Send + Sync {
    /// Profile document covering every exposed type.
    ///
    /// # Errors
    /// `Configuration` when the metadata registry is inconsistent.
    fn profile_document(&self) -> Result<Alps, AlpsProfileError>;

    /// Profile document of the single type exposed under `collection_rel`.
    ///
    /// # Errors
    /// `NotFound` when no exposed type uses that relation, `Configuration`
    /// when its metadata is inconsistent.
    fn entity_profile(&self, collection_rel: &str) -> Result<Alps, AlpsProfileError>;

    /// Applies the named projection to `source`; a blank name returns it unchanged.
    ///
    /// # Errors
    /// `UnknownProjection` when `projection` is not registered for `source_type`.
    fn project(
        &self,
        source_type: &str,
        source: Value,
        projection: Option<&str>,
    ) -> Result<Value, AlpsProfileError>;
}
