//! In-memory registry of exposed types.
//!
//! Populated once at startup (from configuration or programmatically) and
//! read-only afterwards, so lookups need no synchronization.

use std::collections::{HashMap, HashSet};

use alps_profile_sdk::{
    AssociationMetadata, DescriptionRef, EntityMetadata, EntityMetadataProvider, EntityType,
    PaginationVariable, ProjectionDefinition, ProjectionDefinitions, PropertyMapping,
    PropertyMetadata, ResourceMappings, ResourceMetadata, SearchMapping,
};

use super::naming;
use crate::config::{CatalogConfig, EntityConfig, PropertyConfig};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("entity type must not be empty")]
    EmptyEntityType,

    #[error("entity type '{0}' is registered twice")]
    DuplicateEntity(String),

    #[error("collection relation '{rel}' is used by both '{first}' and '{second}'")]
    DuplicateCollectionRel {
        rel: String,
        first: String,
        second: String,
    },

    #[error("'{property}' is declared more than once on '{entity}'")]
    DuplicateProperty { entity: String, property: String },
}

/// Exposed types with their structural metadata, resource mappings, and
/// projections, in registration order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    entities: Vec<EntityMetadata>,
    mappings: HashMap<EntityType, ResourceMetadata>,
    projections: Vec<ProjectionDefinition>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the catalog from configuration, deriving missing relation names.
    ///
    /// # Errors
    /// Returns a `CatalogError` for empty or duplicate types, for collection
    /// relations shared by two types, and for a name declared twice among one
    /// type's properties and associations.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entity in &config.entities {
            let (metadata, mapping) = entity_from_config(entity)?;
            catalog.register(metadata, mapping)?;

            let source_type = metadata_type(entity);
            catalog
                .projections
                .extend(entity.projections.iter().map(|p| ProjectionDefinition {
                    name: p.name.clone(),
                    source_type: source_type.clone(),
                    properties: p.properties.clone(),
                }));
        }

        tracing::info!(
            entities = catalog.entities.len(),
            projections = catalog.projections.len(),
            "Loaded exposed type catalog"
        );
        Ok(catalog)
    }

    /// Adds one exposed type.
    ///
    /// The mapping is not checked against the metadata here; inconsistencies
    /// surface when a document is built.
    ///
    /// # Errors
    /// Returns a `CatalogError` for empty or duplicate types and for
    /// collection relations already taken by another type.
    pub fn register(
        &mut self,
        metadata: EntityMetadata,
        mapping: ResourceMetadata,
    ) -> Result<(), CatalogError> {
        let entity_type = metadata.entity_type.clone();
        if entity_type.as_str().is_empty() {
            return Err(CatalogError::EmptyEntityType);
        }
        if self.mappings.contains_key(&entity_type) {
            return Err(CatalogError::DuplicateEntity(entity_type.to_string()));
        }
        if let Some((owner, _)) = self
            .mappings
            .iter()
            .find(|(_, m)| m.collection_rel == mapping.collection_rel)
        {
            return Err(CatalogError::DuplicateCollectionRel {
                rel: mapping.collection_rel,
                first: owner.to_string(),
                second: entity_type.to_string(),
            });
        }

        self.entities.push(metadata);
        self.mappings.insert(entity_type, mapping);
        Ok(())
    }

    /// Registers a projection for a source type.
    pub fn register_projection(&mut self, projection: ProjectionDefinition) {
        self.projections.push(projection);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityMetadataProvider for InMemoryCatalog {
    fn entity_types(&self) -> Vec<EntityType> {
        self.entities.iter().map(|e| e.entity_type.clone()).collect()
    }

    fn entity_metadata(&self, entity_type: &EntityType) -> Option<&EntityMetadata> {
        self.entities.iter().find(|e| &e.entity_type == entity_type)
    }
}

impl ResourceMappings for InMemoryCatalog {
    fn mapping_for(&self, entity_type: &EntityType) -> Option<&ResourceMetadata> {
        self.mappings.get(entity_type)
    }
}

impl ProjectionDefinitions for InMemoryCatalog {
    fn projection_for(&self, source_type: &str, name: &str) -> Option<&ProjectionDefinition> {
        self.projections
            .iter()
            .find(|p| p.source_type == source_type && p.name == name)
    }
}

fn entity_from_config(
    config: &EntityConfig,
) -> Result<(EntityMetadata, ResourceMetadata), CatalogError> {
    if config.entity_type.trim().is_empty() {
        return Err(CatalogError::EmptyEntityType);
    }

    let entity_type = EntityType::new(metadata_type(config));
    let item_rel = config
        .item_rel
        .clone()
        .unwrap_or_else(|| naming::uncapitalize(entity_type.simple_name()));
    let collection_rel = config
        .collection_rel
        .clone()
        .unwrap_or_else(|| naming::pluralize(&item_rel));

    // Properties and associations share one mapping namespace.
    let mut seen = HashSet::new();
    let mut property_mappings = Vec::new();
    for property in config.properties.iter().chain(&config.associations) {
        if !seen.insert(property.name.as_str()) {
            return Err(CatalogError::DuplicateProperty {
                entity: entity_type.to_string(),
                property: property.name.clone(),
            });
        }
        property_mappings.push((property.name.clone(), property_mapping(&item_rel, property)));
    }

    let pagination_variables = if config.paging {
        config.pagination.as_ref().map_or_else(PaginationVariable::standard, |vars| {
            vars.iter()
                .map(|v| PaginationVariable::new(&v.name, &v.description))
                .collect()
        })
    } else {
        Vec::new()
    };

    let metadata = EntityMetadata {
        entity_type,
        properties: config
            .properties
            .iter()
            .map(|p| PropertyMetadata {
                name: p.name.clone(),
                description: description_ref(property_key(&item_rel, p), p.description.as_ref()),
            })
            .collect(),
        associations: config
            .associations
            .iter()
            .map(|a| AssociationMetadata {
                inverse_property: a.name.clone(),
            })
            .collect(),
        supports_paging: config.paging,
        pagination_variables,
    };

    let mapping = ResourceMetadata {
        collection_description: description_ref(
            naming::resource_key(&collection_rel),
            config.collection_description.as_ref(),
        ),
        item_description: description_ref(
            naming::resource_key(&item_rel),
            config.description.as_ref(),
        ),
        collection_rel,
        item_rel,
        properties: property_mappings,
        search_mappings: config
            .searches
            .iter()
            .map(|s| SearchMapping {
                rel: s.rel.clone(),
                parameter_names: s.parameters.clone(),
            })
            .collect(),
    };

    Ok((metadata, mapping))
}

fn metadata_type(config: &EntityConfig) -> String {
    config.entity_type.trim().to_owned()
}

fn property_mapping(item_rel: &str, property: &PropertyConfig) -> PropertyMapping {
    PropertyMapping {
        rel: property.rel.clone().unwrap_or_else(|| property.name.clone()),
        description: description_ref(property_key(item_rel, property), property.description.as_ref()),
    }
}

fn property_key(item_rel: &str, property: &PropertyConfig) -> String {
    naming::property_key(item_rel, &property.name)
}

fn description_ref(key: String, default_text: Option<&String>) -> DescriptionRef {
    DescriptionRef::new(key, default_text.cloned().unwrap_or_default())
}
