//! Downloads of binary content, which MINERVA sends either as-is or wrapped
//! in a zip archive holding a single file.

use crate::errors::{check, FileIOError, FormatError};
use bytes::Bytes;
use camino::Utf8Path;
use fs_err::tokio::File;
use reqwest::header::CONTENT_TYPE;
use std::io::{Cursor, Read};
use tokio::io::AsyncWriteExt;
use zip::ZipArchive;

pub(crate) const ZIP: &str = "application/zip";
pub(crate) const OCTET_STREAM: &str = "application/octet-stream";

/// Body of a download response, tagged by where its content is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A zip archive wrapping the content.
    Archive(Bytes),
    /// The content itself.
    Direct(Bytes),
}

impl Payload {
    /// Classify a body by its declared content type. With `unzip` off, an
    /// archive is kept as it is.
    pub fn classify(content_type: Option<&str>, body: Bytes, unzip: bool) -> Self {
        if unzip && content_type.map(is_zip).unwrap_or(false) {
            Payload::Archive(body)
        } else {
            Payload::Direct(body)
        }
    }

    /// Collapse to the content bytes.
    pub fn into_bytes(self) -> Result<Bytes, FormatError> {
        match self {
            Payload::Archive(data) => unwrap_archive(&data),
            Payload::Direct(data) => Ok(data),
        }
    }
}

/// Whether a `Content-Type` value denotes a zip archive, ignoring parameters.
fn is_zip(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(ZIP))
        .unwrap_or(false)
}

/// Extract the only entry of a zip archive.
pub fn unwrap_archive(data: &[u8]) -> Result<Bytes, FormatError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    if archive.len() != 1 {
        return Err(FormatError::EntryCount(archive.len()));
    }
    let mut entry = archive.by_index(0)?;
    let mut content = Vec::new();
    entry
        .read_to_end(&mut content)
        .map_err(zip::result::ZipError::from)?;
    Ok(Bytes::from(content))
}

/// Send a request for binary content, normalize the response, and optionally
/// write the result to `sink` before returning it.
pub(crate) async fn fetch(
    req: reqwest_middleware::RequestBuilder,
    unzip: bool,
    sink: Option<&Utf8Path>,
) -> Result<Bytes, FileIOError> {
    let res = check(req.send().await?).await?;
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let body = res.bytes().await?;
    let data = Payload::classify(content_type.as_deref(), body, unzip).into_bytes()?;
    if let Some(dst) = sink {
        write_to(dst, &data).await?;
    }
    Ok(data)
}

/// Write data to a local file, replacing it if it exists.
pub(crate) async fn write_to(dst: &Utf8Path, data: &[u8]) -> Result<(), std::io::Error> {
    let mut file = File::create(dst.as_std_path()).await?;
    file.write_all(data).await?;
    file.flush().await
}
