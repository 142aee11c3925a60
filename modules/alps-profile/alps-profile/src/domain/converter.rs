//! Descriptor tree builder.
//!
//! Turns the structural metadata of one exposed type plus its resource
//! mapping into the descriptor group of a profile document:
//!
//! 1. collection resource (`SAFE`), with pagination variables (`SEMANTIC`)
//!    when the backing repository pages
//! 2. single resource (`SAFE`), with one `SEMANTIC` child per property
//!    followed by one `SAFE` child per association
//! 3. one `SAFE` descriptor per search method, with one `SEMANTIC` child per
//!    parameter
//!
//! The builder is pure: it reads its collaborators and allocates a fresh tree
//! per call.

use std::sync::Arc;

use alps_profile_sdk::{
    Alps, DescriptionRef, Descriptor, DescriptorBuilder, Doc, EntityMetadata, MessageSource,
    ResourceMappings, ResourceMetadata,
};

use super::error::DomainError;

pub struct AlpsDescriptorConverter {
    mappings: Arc<dyn ResourceMappings>,
    messages: Arc<dyn MessageSource>,
}

impl AlpsDescriptorConverter {
    #[must_use]
    pub fn new(mappings: Arc<dyn ResourceMappings>, messages: Arc<dyn MessageSource>) -> Self {
        Self { mappings, messages }
    }

    /// Builds the descriptor group of `entity` wrapped in a document root.
    ///
    /// # Errors
    /// Any configuration error reported by [`Self::descriptors`].
    pub fn convert(&self, entity: &EntityMetadata) -> Result<Alps, DomainError> {
        Ok(Alps::new(self.descriptors(entity)?))
    }

    /// Builds the flat descriptor group of `entity`: collection, single
    /// resource, then every search resource.
    ///
    /// # Errors
    /// Returns a configuration error when the type, one of its properties or
    /// associations has no resource mapping, a mapped relation name is empty,
    /// or a search parameter is unnamed.
    pub fn descriptors(&self, entity: &EntityMetadata) -> Result<Vec<Descriptor>, DomainError> {
        let mapping = self.mappings.mapping_for(&entity.entity_type).ok_or_else(|| {
            DomainError::MissingResourceMapping {
                entity: entity.entity_type.clone(),
            }
        })?;

        let mut descriptors = Vec::with_capacity(2 + mapping.search_mappings.len());
        descriptors.push(self.collection_resource_descriptor(entity, mapping));
        descriptors.push(self.single_resource_descriptor(entity, mapping)?);
        descriptors.extend(search_resource_descriptors(entity, mapping)?);

        tracing::debug!(
            entity = %entity.entity_type,
            descriptors = descriptors.len(),
            "Converted entity to profile descriptors"
        );

        Ok(descriptors)
    }

    fn collection_resource_descriptor(
        &self,
        entity: &EntityMetadata,
        mapping: &ResourceMetadata,
    ) -> Descriptor {
        let builder = self.safe_descriptor(&mapping.collection_rel, &mapping.collection_description);

        if !entity.supports_paging {
            return builder.build();
        }

        builder
            .descriptors(entity.pagination_variables.iter().map(|variable| {
                self.semantic_descriptor(&variable.name, &variable.description)
                    .build()
            }))
            .build()
    }

    fn single_resource_descriptor(
        &self,
        entity: &EntityMetadata,
        mapping: &ResourceMetadata,
    ) -> Result<Descriptor, DomainError> {
        let mut children =
            Vec::with_capacity(entity.properties.len() + entity.associations.len());

        for property in &entity.properties {
            let property_mapping = mapping.mapping_for(&property.name).ok_or_else(|| {
                DomainError::MissingPropertyMapping {
                    entity: entity.entity_type.clone(),
                    property: property.name.clone(),
                }
            })?;
            require_rel(entity, &property_mapping.rel, || {
                format!("property '{}'", property.name)
            })?;
            children.push(
                self.semantic_descriptor(&property_mapping.rel, &property_mapping.description)
                    .build(),
            );
        }

        // Associations always follow properties, whatever the declaration order.
        for association in &entity.associations {
            let association_mapping = mapping
                .mapping_for(&association.inverse_property)
                .ok_or_else(|| DomainError::MissingAssociationMapping {
                    entity: entity.entity_type.clone(),
                    property: association.inverse_property.clone(),
                })?;
            require_rel(entity, &association_mapping.rel, || {
                format!("association '{}'", association.inverse_property)
            })?;
            children.push(
                self.safe_descriptor(&association_mapping.rel, &association_mapping.description)
                    .build(),
            );
        }

        Ok(self
            .safe_descriptor(&mapping.item_rel, &mapping.item_description)
            .descriptors(children)
            .build())
    }

    fn safe_descriptor(&self, name: &str, description: &DescriptionRef) -> DescriptorBuilder {
        Descriptor::safe(name).doc(Some(self.doc_for(description)))
    }

    fn semantic_descriptor(&self, name: &str, description: &DescriptionRef) -> DescriptorBuilder {
        Descriptor::semantic(name).doc(Some(self.doc_for(description)))
    }

    fn doc_for(&self, description: &DescriptionRef) -> Doc {
        Doc::text(self.messages.message(description))
    }
}

/// Search methods carry no description source: names only.
fn search_resource_descriptors(
    entity: &EntityMetadata,
    mapping: &ResourceMetadata,
) -> Result<Vec<Descriptor>, DomainError> {
    mapping
        .search_mappings
        .iter()
        .map(|search| {
            require_rel(entity, &search.rel, || "search".to_owned())?;
            let mut parameters = Vec::with_capacity(search.parameter_names.len());
            for parameter in &search.parameter_names {
                if parameter.is_empty() {
                    return Err(DomainError::UnnamedSearchParameter {
                        entity: entity.entity_type.clone(),
                        rel: search.rel.clone(),
                    });
                }
                parameters.push(Descriptor::semantic(parameter).build());
            }
            Ok(Descriptor::safe(&search.rel).descriptors(parameters).build())
        })
        .collect()
}

fn require_rel(
    entity: &EntityMetadata,
    rel: &str,
    element: impl FnOnce() -> String,
) -> Result<(), DomainError> {
    if rel.is_empty() {
        return Err(DomainError::EmptyRelation {
            entity: entity.entity_type.clone(),
            element: element(),
        });
    }
    Ok(())
}
