use crate::schema::Record;
use crate::types::{HandlerClass, OptionId};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};
use std::collections::HashMap;

/// Server-wide configuration of a MINERVA instance.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub annotators: Vec<Annotator>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub bio_entity_fields: Vec<BioEntityField>,
    pub build_date: Option<String>,
    pub git_hash: Option<String>,
    pub version: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub image_formats: Vec<ImageFormat>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub map_canvas_types: Vec<MapCanvasType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub map_types: Vec<MapType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub miriam_types: HashMap<String, MiriamType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub model_formats: Vec<ModelFormat>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub modification_state_types: HashMap<String, ModificationStateType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub options: Vec<ConfigOption>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub overlay_types: Vec<OverlayType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub privilege_types: HashMap<String, PrivilegeType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reaction_types: Vec<ReactionType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub unit_types: Vec<UnitType>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub element_types: Vec<ElementType>,
}

impl Configuration {
    /// Get the first option of the given type, e.g. `DEFAULT_MAP`.
    pub fn option(&self, option_type: &str) -> Option<&ConfigOption> {
        self.options
            .iter()
            .find(|o| o.option_type.as_deref() == Some(option_type))
    }
}

/// A configuration option. Also served on its own by `configuration/options/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigOption {
    pub id_object: Option<OptionId>,
    pub common_name: Option<String>,
    pub group: Option<String>,
    pub is_server_side: Option<bool>,
    #[serde(rename = "type")]
    pub option_type: Option<String>,
    pub value: Option<String>,
    pub value_type: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiriamType {
    pub common_name: Option<String>,
    pub homepage: Option<String>,
    pub registry_identifier: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub uris: Vec<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Annotator {
    pub name: Option<String>,
    pub url: Option<String>,
    pub class_name: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub element_class_names: Vec<String>,
    pub description: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub parameters: Vec<AnnotatorParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotatorParameter {
    // documented as a MiriamType, sent as a string
    #[serde(rename = "annotation_type")]
    pub annotation_type: Option<String>,
    pub field: Option<String>,
    pub common_name: Option<String>,
    pub description: Option<String>,
    pub input_type: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub order: Option<f64>,
    #[serde(rename = "type")]
    pub parameter_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BioEntityField {
    pub common_name: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementType {
    pub class_name: Option<String>,
    pub name: Option<String>,
    pub parent_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageFormat {
    pub extension: Option<String>,
    pub name: Option<String>,
    pub handler: Option<HandlerClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapCanvasType {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapType {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelFormat {
    pub extension: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub extensions: Vec<String>,
    pub name: Option<String>,
    pub handler: Option<HandlerClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModificationStateType {
    pub common_name: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayType {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivilegeType {
    pub common_name: Option<String>,
    pub object_type: Option<String>,
    pub value_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionType {
    pub class_name: Option<String>,
    pub name: Option<String>,
    pub parent_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UnitType {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Record for Configuration {
    const KIND: &'static str = "configuration";
}

impl Record for ConfigOption {
    const KIND: &'static str = "configuration option";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{decode, Context};
    use serde_json::json;

    #[test]
    fn test_get_option_by_type() {
        let config: Configuration = decode(
            json!({
                "options": [
                    {"idObject": 1, "type": "EMAIL_ADDRESS", "value": "a@b.c"},
                    {"idObject": 2, "type": "DEFAULT_MAP", "value": "pd_map", "isServerSide": true},
                    {"idObject": 3, "type": "DEFAULT_MAP", "value": "shadowed"}
                ],
                "privilegeTypes": {"IS_ADMIN": {"commonName": "Admin", "objectType": null}},
                "modelFormats": [{"name": "SBML", "handler": "lcsb.mapviewer.converter.model.sbml.SbmlParser", "extension": "xml"}]
            }),
            &Context::new(),
        )
        .unwrap();
        let option = config.option("DEFAULT_MAP").unwrap();
        assert_eq!(option.id_object, Some(OptionId(2)));
        assert_eq!(option.value.as_deref(), Some("pd_map"));
        assert_eq!(option.is_server_side, Some(true));
        assert!(config.option("NOT_THERE").is_none());
        assert_eq!(
            config.privilege_types["IS_ADMIN"].common_name.as_deref(),
            Some("Admin")
        );
        assert_eq!(
            config.model_formats[0].handler.as_ref().map(|h| h.as_str()),
            Some("lcsb.mapviewer.converter.model.sbml.SbmlParser")
        );
    }
}
