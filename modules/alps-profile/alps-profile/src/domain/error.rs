use alps_profile_sdk::{AlpsProfileError, EntityType};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("type '{entity}' is not registered with the metadata provider")]
    UnknownEntity { entity: EntityType },

    #[error("type '{entity}' has no resource mapping")]
    MissingResourceMapping { entity: EntityType },

    #[error("property '{property}' of type '{entity}' has no resource mapping")]
    MissingPropertyMapping {
        entity: EntityType,
        property: String,
    },

    #[error("association '{property}' of type '{entity}' has no resource mapping")]
    MissingAssociationMapping {
        entity: EntityType,
        property: String,
    },

    #[error("search '{rel}' of type '{entity}' declares a parameter without a name")]
    UnnamedSearchParameter { entity: EntityType, rel: String },

    #[error("{element} of type '{entity}' maps to an empty relation name")]
    EmptyRelation { entity: EntityType, element: String },

    #[error("no exposed resource with relation '{rel}'")]
    ResourceNotFound { rel: String },

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

impl DomainError {
    /// Whether the error stems from an inconsistent metadata registry.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownEntity { .. }
                | Self::MissingResourceMapping { .. }
                | Self::MissingPropertyMapping { .. }
                | Self::MissingAssociationMapping { .. }
                | Self::UnnamedSearchParameter { .. }
                | Self::EmptyRelation { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    #[error("no projection '{projection}' registered for type '{source_type}'")]
    UnknownProjection {
        source_type: String,
        projection: String,
    },
}

impl From<DomainError> for AlpsProfileError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::ResourceNotFound { rel } => Self::not_found(rel),
            DomainError::Projection(ProjectionError::UnknownProjection {
                source_type,
                projection,
            }) => Self::UnknownProjection {
                source_type,
                projection,
            },
            other => Self::configuration(other.to_string()),
        }
    }
}
