//! Domain service for the alps-profile module.

use std::sync::Arc;

use alps_profile_sdk::{
    Alps, Descriptor, EntityMetadata, EntityMetadataProvider, EntityType, ResourceMappings,
};
use dashmap::DashMap;

use super::converter::AlpsDescriptorConverter;
use super::error::DomainError;

/// Aggregates the descriptor groups of all exposed types into one document.
///
/// When caching is enabled, each type's group is computed once and reused
/// for the lifetime of the service; the metadata registry is fixed after
/// startup, so `invalidate` is only needed when the service is rewired.
pub struct AlpsProfileService {
    entities: Arc<dyn EntityMetadataProvider>,
    mappings: Arc<dyn ResourceMappings>,
    converter: AlpsDescriptorConverter,
    cache: Option<DashMap<EntityType, Arc<Vec<Descriptor>>>>,
}

impl AlpsProfileService {
    #[must_use]
    pub fn new(
        entities: Arc<dyn EntityMetadataProvider>,
        mappings: Arc<dyn ResourceMappings>,
        converter: AlpsDescriptorConverter,
        cache_descriptors: bool,
    ) -> Self {
        Self {
            entities,
            mappings,
            converter,
            cache: cache_descriptors.then(DashMap::new),
        }
    }

    /// Builds the profile document for every exposed type, in provider order.
    ///
    /// # Errors
    /// The first configuration error encountered; no partial document is returned.
    pub fn build_document(&self) -> Result<Alps, DomainError> {
        let span = tracing::debug_span!("alps_build_document");
        let _guard = span.enter();

        let entity_types = self.entities.entity_types();
        let mut descriptors = Vec::new();

        for entity_type in &entity_types {
            let group = self.descriptors_for(entity_type).inspect_err(|e| {
                tracing::error!(entity = %entity_type, error = %e, "Profile document build failed");
            })?;
            descriptors.extend(group.iter().cloned());
        }

        tracing::info!(
            entities = entity_types.len(),
            descriptors = descriptors.len(),
            "Built profile document"
        );

        Ok(Alps::new(descriptors))
    }

    /// Builds the profile document of the type exposed under `collection_rel`.
    ///
    /// # Errors
    /// `ResourceNotFound` when no exposed type uses that relation, otherwise
    /// any configuration error of that type.
    pub fn entity_profile(&self, collection_rel: &str) -> Result<Alps, DomainError> {
        let entity_type = self
            .entities
            .entity_types()
            .into_iter()
            .find(|t| {
                self.mappings
                    .mapping_for(t)
                    .is_some_and(|m| m.collection_rel == collection_rel)
            })
            .ok_or_else(|| DomainError::ResourceNotFound {
                rel: collection_rel.to_owned(),
            })?;

        let group = self.descriptors_for(&entity_type)?;
        Ok(Alps::new(group.as_ref().clone()))
    }

    /// Drops every cached descriptor group.
    pub fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
            tracing::debug!("Profile descriptor cache cleared");
        }
    }

    fn descriptors_for(&self, entity_type: &EntityType) -> Result<Arc<Vec<Descriptor>>, DomainError> {
        let Some(cache) = &self.cache else {
            return self.convert(entity_type).map(Arc::new);
        };

        if let Some(hit) = cache.get(entity_type) {
            return Ok(Arc::clone(hit.value()));
        }

        // Entry lock makes concurrent misses on the same key compute once.
        let entry = cache
            .entry(entity_type.clone())
            .or_try_insert_with(|| self.convert(entity_type).map(Arc::new))?;
        Ok(Arc::clone(entry.value()))
    }

    fn convert(&self, entity_type: &EntityType) -> Result<Vec<Descriptor>, DomainError> {
        let entity: &EntityMetadata =
            self.entities
                .entity_metadata(entity_type)
                .ok_or_else(|| DomainError::UnknownEntity {
                    entity: entity_type.clone(),
                })?;
        self.converter.descriptors(entity)
    }
}
