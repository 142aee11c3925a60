//! Infrastructure layer: the in-memory type catalog, message bundles, and
//! the default projection factory.

pub mod catalog;
pub mod messages;
pub mod naming;
pub mod projection;

pub use catalog::{CatalogError, InMemoryCatalog};
pub use messages::BundleMessageSource;
pub use projection::PropertySubsetProjectionFactory;
