//! Public models for the alps-profile module.
//!
//! These are transport-agnostic data structures. The output side is the
//! descriptor tree of a profile document; the input side is the structural
//! and naming metadata the tree is built from. Wire representations live in
//! the module's REST layer.

use std::fmt;

/// Version string carried by every profile document.
pub const ALPS_VERSION: &str = "1.0";

// ---------------------------------------------------------------------------
// Output: profile document tree
// ---------------------------------------------------------------------------

/// Classification of a descriptor.
///
/// The set is closed: a descriptor either carries domain meaning or it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorType {
    /// Navigational element (a resource or a link) without its own value.
    Safe,
    /// Element carrying domain meaning (a property value or a query parameter).
    Semantic,
}

impl DescriptorType {
    /// Returns the wire name of the classification.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptorType::Safe => "SAFE",
            DescriptorType::Semantic => "SEMANTIC",
        }
    }
}

impl fmt::Display for DescriptorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of a documentation text. Only plain text is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Text,
}

impl Format {
    /// Returns the wire name of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => "TEXT",
        }
    }
}

/// Documentation attached to a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doc {
    pub value: String,
    pub format: Format,
}

impl Doc {
    /// Creates a plain-text documentation entry.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: Format::Text,
        }
    }
}

/// One node of the profile tree.
///
/// Descriptors are assembled through [`DescriptorBuilder`] and are not
/// modified afterwards; all accessors are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: Option<String>,
    type_: DescriptorType,
    doc: Option<Doc>,
    descriptors: Vec<Descriptor>,
}

impl Descriptor {
    /// Starts a `SAFE` descriptor with the given name.
    pub fn safe(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(DescriptorType::Safe).name(name)
    }

    /// Starts a `SEMANTIC` descriptor with the given name.
    pub fn semantic(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(DescriptorType::Semantic).name(name)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn descriptor_type(&self) -> DescriptorType {
        self.type_
    }

    #[must_use]
    pub fn doc(&self) -> Option<&Doc> {
        self.doc.as_ref()
    }

    /// Child descriptors in insertion order.
    #[must_use]
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Returns the first direct child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name() == Some(name))
    }
}

/// Accumulates the parts of a [`Descriptor`] and freezes them on `build`.
#[derive(Debug, Clone)]
#[must_use]
pub struct DescriptorBuilder {
    name: Option<String>,
    type_: DescriptorType,
    doc: Option<Doc>,
    descriptors: Vec<Descriptor>,
}

impl DescriptorBuilder {
    pub fn new(type_: DescriptorType) -> Self {
        Self {
            name: None,
            type_,
            doc: None,
            descriptors: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches documentation. Empty text leaves the descriptor undocumented.
    pub fn doc(mut self, doc: Option<Doc>) -> Self {
        self.doc = doc.filter(|d| !d.value.is_empty());
        self
    }

    /// Appends children, keeping their order.
    pub fn descriptors(mut self, descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        self.descriptors.extend(descriptors);
        self
    }

    pub fn descriptor(mut self, descriptor: Descriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    #[must_use]
    pub fn build(self) -> Descriptor {
        Descriptor {
            name: self.name,
            type_: self.type_,
            doc: self.doc,
            descriptors: self.descriptors,
        }
    }
}

/// Root of a profile document: the unnamed container of top-level descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alps {
    pub version: &'static str,
    pub descriptors: Vec<Descriptor>,
}

impl Alps {
    #[must_use]
    pub fn new(descriptors: Vec<Descriptor>) -> Self {
        Self {
            version: ALPS_VERSION,
            descriptors,
        }
    }

    /// Returns the first top-level descriptor with the given name.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors.iter().find(|d| d.name() == Some(name))
    }
}

impl Default for Alps {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Input: structural metadata and resource mapping
// ---------------------------------------------------------------------------

/// Opaque identifier of an exposed domain type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityType(String);

impl EntityType {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment of a dotted or path-like identifier (`com.acme.Person` -> `Person`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0
            .rsplit(['.', ':', '/'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Reference to a human-readable description: a message key plus the text to
/// fall back to when the key has no localized entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptionRef {
    pub key: Option<String>,
    pub default_text: String,
}

impl DescriptionRef {
    pub fn new(key: impl Into<String>, default_text: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            default_text: default_text.into(),
        }
    }

    /// A reference that is never looked up and always resolves to `text`.
    pub fn default_for(text: impl Into<String>) -> Self {
        Self {
            key: None,
            default_text: text.into(),
        }
    }
}

/// A simple (value-carrying) property of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMetadata {
    pub name: String,
    pub description: DescriptionRef,
}

/// An association to another entity, identified by its inverse property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationMetadata {
    pub inverse_property: String,
}

/// A template variable of the paged collection link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationVariable {
    pub name: String,
    pub description: DescriptionRef,
}

impl PaginationVariable {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: DescriptionRef::default_for(description),
        }
    }

    /// The `page`, `size`, `sort` variables of a paged collection resource.
    #[must_use]
    pub fn standard() -> Vec<PaginationVariable> {
        vec![
            Self::new("page", "The page to return."),
            Self::new("size", "The size of the page to return."),
            Self::new(
                "sort",
                "The sorting criteria to use to calculate the content of the page.",
            ),
        ]
    }
}

/// Structural description of one exposed domain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMetadata {
    pub entity_type: EntityType,
    /// Properties in declaration order.
    pub properties: Vec<PropertyMetadata>,
    /// Associations in declaration order.
    pub associations: Vec<AssociationMetadata>,
    pub supports_paging: bool,
    /// Only consulted when `supports_paging` is set.
    pub pagination_variables: Vec<PaginationVariable>,
}

/// Public relation name and description of one property or association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapping {
    pub rel: String,
    pub description: DescriptionRef,
}

/// An exposed query method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMapping {
    pub rel: String,
    /// Parameter names in declaration order.
    pub parameter_names: Vec<String>,
}

/// Canonical REST naming of one exposed domain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMetadata {
    pub collection_rel: String,
    pub collection_description: DescriptionRef,
    pub item_rel: String,
    pub item_description: DescriptionRef,
    /// Keyed by structural property name; covers associations too.
    pub properties: Vec<(String, PropertyMapping)>,
    pub search_mappings: Vec<SearchMapping>,
}

impl ResourceMetadata {
    /// Looks up the mapping for the property with the given structural name.
    #[must_use]
    pub fn mapping_for(&self, property: &str) -> Option<&PropertyMapping> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, mapping)| mapping)
    }
}
