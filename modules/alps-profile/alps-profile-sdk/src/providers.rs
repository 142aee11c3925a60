//! Collaborator traits consumed by the profile builder.
//!
//! Implementations are passed in explicitly when the module is wired; the
//! builder never looks them up from a container.

use crate::models::{DescriptionRef, EntityMetadata, EntityType, ResourceMetadata};

/// Source of structural metadata for every exposed domain type.
pub trait EntityMetadataProvider: Send + Sync {
    /// All exposed types, each exactly once, in a stable order.
    fn entity_types(&self) -> Vec<EntityType>;

    /// Structural description of `entity_type`, or `None` if it is not exposed.
    fn entity_metadata(&self, entity_type: &EntityType) -> Option<&EntityMetadata>;
}

/// Canonical REST naming for exposed domain types.
pub trait ResourceMappings: Send + Sync {
    /// Naming and search operations of `entity_type`, or `None` if unmapped.
    fn mapping_for(&self, entity_type: &EntityType) -> Option<&ResourceMetadata>;
}

/// Resolves description references into display text.
///
/// Resolution never fails: a reference without a localized entry resolves
/// to its default text.
pub trait MessageSource: Send + Sync {
    fn message(&self, description: &DescriptionRef) -> String;
}

/// A message source without any localized entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessageSource;

impl MessageSource for DefaultMessageSource {
    fn message(&self, description: &DescriptionRef) -> String {
        description.default_text.clone()
    }
}
