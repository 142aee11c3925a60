use alps_profile_sdk::{Alps, Descriptor, DescriptorType, Doc, Format};
use serde::{Deserialize, Serialize};

/// Wire form of a profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlpsDto {
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptors: Vec<DescriptorDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub descriptor_type: DescriptorTypeDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptors: Vec<DescriptorDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DescriptorTypeDto {
    Safe,
    Semantic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocDto {
    pub value: String,
    pub format: FormatDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatDto {
    Text,
}

impl From<Alps> for AlpsDto {
    fn from(alps: Alps) -> Self {
        Self {
            version: alps.version.to_owned(),
            descriptors: alps.descriptors.iter().map(DescriptorDto::from).collect(),
        }
    }
}

impl From<&Descriptor> for DescriptorDto {
    fn from(d: &Descriptor) -> Self {
        Self {
            name: d.name().filter(|n| !n.is_empty()).map(str::to_owned),
            descriptor_type: d.descriptor_type().into(),
            doc: d.doc().map(DocDto::from),
            descriptors: d.descriptors().iter().map(DescriptorDto::from).collect(),
        }
    }
}

impl From<DescriptorType> for DescriptorTypeDto {
    fn from(t: DescriptorType) -> Self {
        match t {
            DescriptorType::Safe => Self::Safe,
            DescriptorType::Semantic => Self::Semantic,
        }
    }
}

impl From<&Doc> for DocDto {
    fn from(doc: &Doc) -> Self {
        Self {
            value: doc.value.clone(),
            format: match doc.format {
                Format::Text => FormatDto::Text,
            },
        }
    }
}
