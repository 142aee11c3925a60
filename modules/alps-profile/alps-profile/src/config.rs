use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the `alps_profile` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlpsProfileConfig {
    /// Path the profile document is served under.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_pretty_print")]
    pub pretty_print: bool,
    /// Compute each type's descriptors once and reuse them for the process lifetime.
    #[serde(default = "default_cache_descriptors")]
    pub cache_descriptors: bool,
    /// Locale used to resolve descriptions (e.g. `de_DE`); empty selects the default bundle.
    #[serde(default)]
    pub locale: String,
}

impl Default for AlpsProfileConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            pretty_print: default_pretty_print(),
            cache_descriptors: default_cache_descriptors(),
            locale: String::new(),
        }
    }
}

fn default_base_path() -> String {
    "/alps".to_owned()
}

fn default_pretty_print() -> bool {
    true
}

fn default_cache_descriptors() -> bool {
    true
}

/// Exposed types and localized descriptions, loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
    /// Locale -> message key -> text. The empty locale is the default bundle.
    #[serde(default)]
    pub messages: HashMap<String, HashMap<String, String>>,
}

/// One exposed domain type. Relation names left out are derived from the type name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub item_rel: Option<String>,
    #[serde(default)]
    pub collection_rel: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub collection_description: Option<String>,
    #[serde(default)]
    pub paging: bool,
    /// Template variables of the paged collection link; the standard
    /// `page`/`size`/`sort` set when left out.
    #[serde(default)]
    pub pagination: Option<Vec<PaginationVariableConfig>>,
    #[serde(default)]
    pub properties: Vec<PropertyConfig>,
    #[serde(default)]
    pub associations: Vec<PropertyConfig>,
    #[serde(default)]
    pub searches: Vec<SearchConfig>,
    #[serde(default)]
    pub projections: Vec<ProjectionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyConfig {
    pub name: String,
    #[serde(default)]
    pub rel: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginationVariableConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    pub rel: String,
    #[serde(default)]
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionConfig {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<String>,
}
