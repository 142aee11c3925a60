//! Alps Profile SDK
//!
//! Public contract of the alps-profile module:
//! - `AlpsProfileClient`: document and projection operations
//! - models: the profile descriptor tree and the metadata it is built from
//! - providers: collaborator traits supplying metadata, naming, and messages
//! - `AlpsProfileError`: transport-agnostic errors

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;
pub mod projection;
pub mod providers;

pub use api::AlpsProfileClient;
pub use errors::AlpsProfileError;
pub use models::{
    ALPS_VERSION, Alps, AssociationMetadata, DescriptionRef, Descriptor, DescriptorBuilder,
    DescriptorType, Doc, EntityMetadata, EntityType, Format, PaginationVariable, PropertyMapping,
    PropertyMetadata, ResourceMetadata, SearchMapping,
};
pub use projection::{ProjectionDefinition, ProjectionDefinitions, ProjectionFactory};
pub use providers::{DefaultMessageSource, EntityMetadataProvider, MessageSource, ResourceMappings};
