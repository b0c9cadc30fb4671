use crate::schema::Record;
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

/// Body of `convert/` and `convert/image/`.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConverterList {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub inputs: Vec<ConverterNames>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub outputs: Vec<ConverterNames>,
}

/// Names under which one converter is known.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConverterNames {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub available_names: Vec<String>,
}

impl Record for ConverterList {
    const KIND: &'static str = "converter list";
}
