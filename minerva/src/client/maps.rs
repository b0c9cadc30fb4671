use super::base::MinervaClient;
use crate::download::fetch;
use crate::errors::{FileIOError, GetError};
use crate::identity::{resolve, Ref, Target};
use crate::models::{Map, Project};
use crate::requests::MapDownload;
use crate::schema::Context;
use crate::urls::{action, MODELS, PROJECTS};
use bytes::Bytes;
use camino::Utf8Path;
use reqwest::Method;

impl MinervaClient {
    /// List the maps of a project.
    ///
    /// Every map remembers its project, so it can be downloaded later on
    /// without naming the project again.
    pub async fn maps<'a>(&self, project: impl Into<Ref<'a, Project>>) -> Result<Vec<Map>, GetError> {
        let project_id = project.into().resolve()?;
        let url = self.endpoint(&[PROJECTS, project_id.as_str(), MODELS]);
        let context = Context::new().with("projectId", project_id.as_str());
        self.get_many(&url, &context).await
    }

    /// Get a map.
    ///
    /// `map` is either a fetched [Map], or an ID; in the latter case `project`
    /// must be given, unless the ID is paired with its project.
    pub async fn map<'a>(
        &self,
        map: impl Into<Target<'a, Map>>,
        project: Option<Ref<'_, Project>>,
    ) -> Result<Map, GetError> {
        let (map_id, project_id) = resolve(map.into(), project)?;
        let map_id = map_id.to_string();
        let url = self.endpoint(&[PROJECTS, project_id.as_str(), MODELS, map_id.as_str()]);
        let context = Context::new().with("projectId", project_id.as_str());
        self.get_one(&url, &context).await
    }

    /// Download a map, converted to the format in `options`.
    ///
    /// Model formats are served by `downloadModel`, image formats by `downloadImage`.
    /// If `sink` is given, the content is also written to that file.
    pub async fn download_map<'a>(
        &self,
        map: impl Into<Target<'a, Map>>,
        project: Option<Ref<'_, Project>>,
        options: &MapDownload,
        sink: Option<&Utf8Path>,
    ) -> Result<Bytes, FileIOError> {
        let (map_id, project_id) = resolve(map.into(), project)?;
        let suffix = action(map_id, options.format.download_action());
        let url = self.endpoint(&[PROJECTS, project_id.as_str(), MODELS, suffix.as_str()]);
        let req = self.request(Method::GET, &url).query(&options.query());
        fetch(req, options.unzip, sink).await
    }
}

impl Map {
    /// Download this map. See [MinervaClient::download_map].
    pub async fn download(
        &self,
        client: &MinervaClient,
        options: &MapDownload,
        sink: Option<&Utf8Path>,
    ) -> Result<Bytes, FileIOError> {
        client.download_map(self, None, options, sink).await
    }
}
