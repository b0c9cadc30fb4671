use super::base::MinervaClient;
use crate::errors::GetError;
use crate::identity::Ref;
use crate::models::{Project, ProjectStatistics};
use crate::schema::Context;
use crate::urls::{PROJECTS, STATISTICS};

impl MinervaClient {
    /// List all projects visible to this session.
    pub async fn projects(&self) -> Result<Vec<Project>, GetError> {
        let url = self.endpoint(&[PROJECTS]);
        self.get_many(&url, &Context::new()).await
    }

    /// Get a project by ID (or refresh a fetched one).
    pub async fn project<'a>(&self, project: impl Into<Ref<'a, Project>>) -> Result<Project, GetError> {
        let project_id = project.into().resolve()?;
        let url = self.endpoint(&[PROJECTS, project_id.as_str()]);
        self.get_one(&url, &Context::new()).await
    }

    /// Get the annotation counts of a project.
    pub async fn project_statistics<'a>(
        &self,
        project: impl Into<Ref<'a, Project>>,
    ) -> Result<ProjectStatistics, GetError> {
        let project_id = project.into().resolve()?;
        let url = self.endpoint(&[PROJECTS, project_id.as_str(), STATISTICS]);
        let context = Context::new().with("projectId", project_id.as_str());
        self.get_one(&url, &context).await
    }
}
