use super::base::MinervaClient;
use crate::download::OCTET_STREAM;
use crate::errors::{FileIOError, GetError};
use crate::identity::Ref;
use crate::models::File;
use crate::requests::NewFileQuery;
use crate::schema::Context;
use crate::urls::{action, FILES, UPLOAD_CONTENT};
use bytes::Bytes;
use camino::Utf8Path;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

impl MinervaClient {
    /// Announce a file of `length` bytes. Its content is sent by [MinervaClient::upload_content].
    pub async fn create_file(&self, filename: &str, length: u64) -> Result<File, GetError> {
        let url = self.endpoint(&[FILES]);
        let req = self
            .request(Method::POST, &url)
            .query(&NewFileQuery { filename, length });
        self.fetch_one(req, &Context::new()).await
    }

    /// Send (a chunk of) the content of a created file.
    pub async fn upload_content<'a>(
        &self,
        data: impl Into<Bytes>,
        file: impl Into<Ref<'a, File>>,
    ) -> Result<File, FileIOError> {
        let file_id = file.into().resolve()?;
        let suffix = action(file_id, UPLOAD_CONTENT);
        let url = self.endpoint(&[FILES, suffix.as_str()]);
        let req = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, OCTET_STREAM)
            .body(data.into());
        Ok(self.fetch_one(req, &Context::new()).await?)
    }

    /// Upload a local file: create it on MINERVA, then send its content.
    ///
    /// `length` defaults to the size of the local file.
    pub async fn upload_file(
        &self,
        local_file: &Utf8Path,
        filename: &str,
        length: Option<u64>,
    ) -> Result<File, FileIOError> {
        let data = fs_err::tokio::read(local_file.as_std_path()).await?;
        let length = length.unwrap_or(data.len() as u64);
        let created = self.create_file(filename, length).await?;
        self.upload_content(data, &created).await
    }

    /// Get a file's metadata.
    pub async fn file<'a>(&self, file: impl Into<Ref<'a, File>>) -> Result<File, GetError> {
        let file_id = file.into().resolve()?.to_string();
        let url = self.endpoint(&[FILES, file_id.as_str()]);
        self.get_one(&url, &Context::new()).await
    }
}
