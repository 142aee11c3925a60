use std::sync::Arc;

use alps_profile_sdk::{Alps, AlpsProfileClient, AlpsProfileError};
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::projector::Projector;
use crate::domain::service::AlpsProfileService;

/// In-process implementation of the public client.
pub struct LocalClient {
    service: Arc<AlpsProfileService>,
    projector: Arc<Projector>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<AlpsProfileService>, projector: Arc<Projector>) -> Self {
        Self { service, projector }
    }
}

impl AlpsProfileClient for LocalClient {
    fn profile_document(&self) -> Result<Alps, AlpsProfileError> {
        self.service.build_document().map_err(Into::into)
    }

    fn entity_profile(&self, collection_rel: &str) -> Result<Alps, AlpsProfileError> {
        self.service
            .entity_profile(collection_rel)
            .map_err(Into::into)
    }

    fn project(
        &self,
        source_type: &str,
        source: Value,
        projection: Option<&str>,
    ) -> Result<Value, AlpsProfileError> {
        self.projector
            .project(source_type, source, projection)
            .map_err(|e| DomainError::from(e).into())
    }
}
