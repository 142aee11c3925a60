//! Module declaration for the alps-profile module.

use std::sync::Arc;

use alps_profile_sdk::{
    AlpsProfileClient, EntityMetadataProvider, MessageSource, ProjectionDefinitions,
    ProjectionFactory, ResourceMappings,
};
use tracing::info;

use crate::config::{AlpsProfileConfig, CatalogConfig};
use crate::domain::converter::AlpsDescriptorConverter;
use crate::domain::projector::Projector;
use crate::domain::service::AlpsProfileService;
use crate::infra::{
    BundleMessageSource, CatalogError, InMemoryCatalog, PropertySubsetProjectionFactory,
};
use crate::local_client::LocalClient;

/// Collaborators the module is wired from.
pub struct Collaborators {
    pub entities: Arc<dyn EntityMetadataProvider>,
    pub mappings: Arc<dyn ResourceMappings>,
    pub messages: Arc<dyn MessageSource>,
    pub projections: Arc<dyn ProjectionDefinitions>,
    pub projection_factory: Arc<dyn ProjectionFactory>,
}

/// ALPS profile module.
///
/// Owns the profile service and projector and exposes them through the
/// public client and the REST routes.
#[derive(Clone)]
pub struct AlpsProfileModule {
    config: AlpsProfileConfig,
    service: Arc<AlpsProfileService>,
    projector: Arc<Projector>,
}

impl AlpsProfileModule {
    /// Builds the module from configuration: the catalog registry, the
    /// message bundles for the configured locale, and the default
    /// projection factory.
    ///
    /// # Errors
    /// Returns a `CatalogError` when the catalog cannot be registered.
    pub fn from_config(
        config: AlpsProfileConfig,
        catalog: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        info!(locale = %config.locale, "Initializing alps_profile module");

        let registry = Arc::new(InMemoryCatalog::from_config(catalog)?);
        let messages = Arc::new(BundleMessageSource::new(
            catalog.messages.clone(),
            &config.locale,
        ));

        Ok(Self::new(
            config,
            Collaborators {
                entities: registry.clone(),
                mappings: registry.clone(),
                messages,
                projections: registry,
                projection_factory: Arc::new(PropertySubsetProjectionFactory),
            },
        ))
    }

    /// Wires the module from explicitly supplied collaborators.
    #[must_use]
    pub fn new(config: AlpsProfileConfig, collaborators: Collaborators) -> Self {
        let converter = AlpsDescriptorConverter::new(
            collaborators.mappings.clone(),
            collaborators.messages,
        );
        let service = Arc::new(AlpsProfileService::new(
            collaborators.entities,
            collaborators.mappings,
            converter,
            config.cache_descriptors,
        ));
        let projector = Arc::new(Projector::new(
            collaborators.projections,
            collaborators.projection_factory,
        ));

        info!(
            base_path = %config.base_path,
            cache = config.cache_descriptors,
            "alps_profile module initialized"
        );

        Self {
            config,
            service,
            projector,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AlpsProfileConfig {
        &self.config
    }

    #[must_use]
    pub fn service(&self) -> Arc<AlpsProfileService> {
        self.service.clone()
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn AlpsProfileClient> {
        Arc::new(LocalClient::new(
            self.service.clone(),
            self.projector.clone(),
        ))
    }

    /// Adds the profile routes to `router`.
    #[must_use]
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering alps_profile REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone(), &self.config)
    }
}
