#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for alps-profile integration tests

use alps_profile::AlpsProfileModule;
use alps_profile::config::{AlpsProfileConfig, CatalogConfig};
use serde_json::json;

/// Person (paged, with a search and a projection) and Address (unpaged).
pub fn sample_catalog() -> CatalogConfig {
    serde_json::from_value(json!({
        "entities": [
            {
                "type": "com.acme.Person",
                "description": "A person",
                "paging": true,
                "properties": [
                    { "name": "firstName", "rel": "first-name", "description": "Given name" },
                    { "name": "lastName", "rel": "last-name" }
                ],
                "associations": [
                    { "name": "address", "description": "Home address" }
                ],
                "searches": [
                    { "rel": "findByLastName", "parameters": ["lastName"] }
                ],
                "projections": [
                    { "name": "summary", "properties": ["firstName"] }
                ]
            },
            {
                "type": "com.acme.Address",
                "properties": [{ "name": "street" }]
            }
        ],
        "messages": {
            "": { "rest.description.persons": "All people" },
            "de": { "rest.description.person": "Eine Person" }
        }
    }))
    .unwrap()
}

pub fn module_with(config: AlpsProfileConfig) -> AlpsProfileModule {
    AlpsProfileModule::from_config(config, &sample_catalog()).unwrap()
}

pub fn create_module() -> AlpsProfileModule {
    module_with(AlpsProfileConfig::default())
}
