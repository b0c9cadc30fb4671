use crate::identity::{Identified, Nested, Ref, Target};
use crate::models::Project;
use crate::schema::Record;
use crate::types::{DateString, MapId, ProjectId};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};

/// A map of a project. The MINERVA API calls these "models".
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Map {
    pub name: Option<String>,
    pub description: Option<String>,
    pub id_object: Option<MapId>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub tile_size: Option<f64>,
    pub default_center_x: Option<f64>,
    pub default_center_y: Option<f64>,
    pub default_zoom_level: Option<f64>,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub authors: Vec<Author>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub references: Vec<Reference>,
    pub creation_date: Option<DateString>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub modification_dates: Vec<DateString>,
    /// Not sent by MINERVA, filled in from the request so the map can be
    /// downloaded later on.
    pub project_id: Option<ProjectId>,
}

/// Alias using the MINERVA API's own name.
pub type Model = Map;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub organisation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub link: Option<String>,
    pub article: Option<Article>,
    #[serde(rename = "type")]
    pub reference_type: Option<String>,
    pub resource: Option<String>,
    pub id: Option<u64>,
    pub annotator_class_name: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    pub title: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub authors: Vec<String>,
    pub journal: Option<String>,
    pub year: Option<i32>,
    pub link: Option<String>,
    pub pubmed_id: Option<String>,
    pub citation_count: Option<u64>,
}

impl Record for Map {
    const KIND: &'static str = "map";
}

impl Identified for Map {
    type Id = MapId;
    const ID_FIELD: &'static str = "idObject";

    fn own_id(&self) -> Option<&MapId> {
        self.id_object.as_ref()
    }
}

impl Nested for Map {
    type Parent = Project;
    const PARENT_FIELD: &'static str = "projectId";

    fn parent_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }
}

impl<'a> From<MapId> for Target<'a, Map> {
    fn from(id: MapId) -> Self {
        Target::Id(id)
    }
}

impl<'a> From<u32> for Target<'a, Map> {
    fn from(id: u32) -> Self {
        Target::Id(MapId(id))
    }
}

impl<'a, P: Into<Ref<'a, Project>>> From<(MapId, P)> for Target<'a, Map> {
    fn from((id, parent): (MapId, P)) -> Self {
        Target::Pair(id, parent.into())
    }
}
