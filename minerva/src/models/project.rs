use crate::identity::{Identified, Ref};
use crate::schema::Record;
use crate::types::{DateString, ProjectId};
use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub project_id: Option<ProjectId>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub owner: Option<String>,
    pub status: Option<String>,
    pub progress: Option<f64>,
    pub directory: Option<String>,
    pub notify_email: Option<String>,
    pub creation_date: Option<DateString>,
    pub map_canvas_type: Option<String>,
    pub disease: Option<Annotation>,
    pub organism: Option<Annotation>,
}

/// A MIRIAM annotation, e.g. the organism of a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Annotation {
    pub resource: Option<String>,
    #[serde(rename = "type")]
    pub annotation_type: Option<String>,
}

/// Counts of annotations in a project, keyed by annotation type.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectStatistics {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub element_annotations: HashMap<String, u64>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reaction_annotations: HashMap<String, u64>,
    pub publications: Option<u64>,
    /// Not sent by MINERVA, filled in from the request.
    pub project_id: Option<ProjectId>,
}

impl Record for Project {
    const KIND: &'static str = "project";
}

impl Record for ProjectStatistics {
    const KIND: &'static str = "project statistics";
}

impl Identified for Project {
    type Id = ProjectId;
    const ID_FIELD: &'static str = "projectId";

    fn own_id(&self) -> Option<&ProjectId> {
        self.project_id.as_ref()
    }
}

impl<'a> From<ProjectId> for Ref<'a, Project> {
    fn from(id: ProjectId) -> Self {
        Ref::Id(id)
    }
}

impl<'a> From<&str> for Ref<'a, Project> {
    fn from(id: &str) -> Self {
        Ref::Id(ProjectId::from(id))
    }
}
