//! Lenient decoding of MINERVA payloads into records.
//!
//! MINERVA payloads are sparse and keep growing new fields. A record is declared
//! as a plain struct whose every field has an empty default; decoding
//!
//! 1. merges caller-supplied [Context] fields where the payload omits them,
//! 2. fills absent fields with their defaults,
//! 3. drops fields the record does not declare.
//!
//! The only failure is a present value of the wrong type, reported as [ShapeError].

use crate::errors::ShapeError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A data shape which MINERVA payloads are decoded into.
///
/// Implementors are expected to be `#[serde(default)]` structs so missing
/// fields never fail.
pub trait Record: DeserializeOwned {
    /// Human-readable name of the resource kind, used in error messages.
    const KIND: &'static str;
}

/// Fields known to the caller which the payload itself does not carry,
/// e.g. the project a map belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context(Map<String, Value>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a context field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fill in context fields which are absent (or `null`) in `object`.
    fn merge_into(&self, object: &mut Map<String, Value>) {
        for (field, value) in &self.0 {
            match object.get(field) {
                None | Some(Value::Null) => {
                    object.insert(field.clone(), value.clone());
                }
                Some(_) => (),
            }
        }
    }

    fn apply(&self, payload: &mut Value) {
        if let Value::Object(object) = payload {
            self.merge_into(object)
        }
    }
}

/// Decode a single JSON object into a record.
pub fn decode<T: Record>(mut payload: Value, context: &Context) -> Result<T, ShapeError> {
    context.apply(&mut payload);
    serde_json::from_value(payload).map_err(|source| ShapeError {
        kind: T::KIND,
        source,
    })
}

/// Decode a JSON array of objects into records, merging the same context
/// into every element.
pub fn decode_many<T: Record>(mut payload: Value, context: &Context) -> Result<Vec<T>, ShapeError> {
    if let Value::Array(elements) = &mut payload {
        elements.iter_mut().for_each(|e| context.apply(e));
    }
    serde_json::from_value(payload).map_err(|source| ShapeError {
        kind: T::KIND,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Configuration, Map as MinervaMap, Project, ProjectStatistics};
    use crate::types::{MapId, ProjectId};
    use rstest::*;
    use serde_json::json;

    #[fixture]
    fn project_context() -> Context {
        Context::new().with("projectId", "pd_map")
    }

    #[rstest]
    fn test_missing_fields_take_defaults() {
        let map: MinervaMap = decode(json!({}), &Context::new()).unwrap();
        assert_eq!(map, MinervaMap::default());
        assert!(map.name.is_none());
        assert!(map.authors.is_empty());
        assert!(map.modification_dates.is_empty());
    }

    #[rstest]
    fn test_unknown_fields_are_discarded() {
        let with_extra: MinervaMap = decode(
            json!({"idObject": 3, "name": "core", "somethingNew": {"nested": [1, 2]}}),
            &Context::new(),
        )
        .unwrap();
        let without_extra: MinervaMap =
            decode(json!({"idObject": 3, "name": "core"}), &Context::new()).unwrap();
        assert_eq!(with_extra, without_extra);
        assert_eq!(with_extra.id_object, Some(MapId(3)));
    }

    #[rstest]
    fn test_context_fills_missing_field(project_context: Context) {
        let map: MinervaMap = decode(json!({"idObject": 3}), &project_context).unwrap();
        assert_eq!(map.project_id, Some(ProjectId::from("pd_map")));
    }

    #[rstest]
    fn test_payload_wins_over_context(project_context: Context) {
        let map: MinervaMap =
            decode(json!({"idObject": 3, "projectId": "other"}), &project_context).unwrap();
        assert_eq!(map.project_id, Some(ProjectId::from("other")));
    }

    #[rstest]
    fn test_context_replaces_null(project_context: Context) {
        let map: MinervaMap =
            decode(json!({"idObject": 3, "projectId": null}), &project_context).unwrap();
        assert_eq!(map.project_id, Some(ProjectId::from("pd_map")));
    }

    #[rstest]
    fn test_many_applies_context_to_every_element(project_context: Context) {
        let maps: Vec<MinervaMap> = decode_many(
            json!([{"idObject": 1}, {"idObject": 2, "name": "b"}, {}]),
            &project_context,
        )
        .unwrap();
        assert_eq!(maps.len(), 3);
        for map in maps {
            assert_eq!(map.project_id, Some(ProjectId::from("pd_map")));
        }
    }

    #[rstest]
    fn test_many_of_empty_array(project_context: Context) {
        let maps: Vec<MinervaMap> = decode_many(json!([]), &project_context).unwrap();
        assert!(maps.is_empty())
    }

    #[rstest]
    fn test_wrong_type_is_shape_error() {
        let err = decode::<MinervaMap>(json!({"idObject": "three"}), &Context::new()).unwrap_err();
        assert_eq!(err.kind, "map");
    }

    #[rstest]
    fn test_many_of_object_is_shape_error() {
        let err = decode_many::<Project>(json!({"projectId": "x"}), &Context::new()).unwrap_err();
        assert_eq!(err.kind, "project");
    }

    #[rstest]
    fn test_null_collections_become_empty() {
        let config: Configuration = decode(
            json!({"options": null, "miriamTypes": null, "version": "16.0"}),
            &Context::new(),
        )
        .unwrap();
        assert!(config.options.is_empty());
        assert!(config.miriam_types.is_empty());
        assert_eq!(config.version.as_deref(), Some("16.0"));
    }

    #[rstest]
    fn test_mapping_keyed_by_category() {
        let stats: ProjectStatistics = decode(
            json!({"elementAnnotations": {"PUBMED": 12, "UNIPROT": 3}, "publications": 5}),
            &Context::new().with("projectId", "pd_map"),
        )
        .unwrap();
        assert_eq!(stats.element_annotations.get("PUBMED"), Some(&12));
        assert!(stats.reaction_annotations.is_empty());
        assert_eq!(stats.publications, Some(5));
        assert_eq!(stats.project_id, Some(ProjectId::from("pd_map")));
    }

    #[rstest]
    fn test_nested_records() {
        let map: MinervaMap = decode(
            json!({
                "authors": [{"firstName": "Ada", "unknown": 1}],
                "references": [{"type": "PUBMED", "article": {"title": "T", "year": 2020, "authors": null}}]
            }),
            &Context::new(),
        )
        .unwrap();
        assert_eq!(map.authors[0].first_name.as_deref(), Some("Ada"));
        let article = map.references[0].article.as_ref().unwrap();
        assert_eq!(article.year, Some(2020));
        assert!(article.authors.is_empty());
    }
}
