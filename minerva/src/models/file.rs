use crate::identity::{Identified, Ref};
use crate::schema::Record;
use crate::types::FileId;
use serde::Deserialize;

/// A file uploaded to MINERVA, e.g. as input of a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    pub id: Option<FileId>,
    pub filename: Option<String>,
    pub length: Option<u64>,
    pub owner: Option<String>,
    pub uploaded_data_length: Option<u64>,
}

impl File {
    /// Whether all announced bytes were uploaded.
    pub fn is_complete(&self) -> bool {
        matches!((self.length, self.uploaded_data_length), (Some(l), Some(u)) if l == u)
    }
}

impl Record for File {
    const KIND: &'static str = "file";
}

impl Identified for File {
    type Id = FileId;
    const ID_FIELD: &'static str = "id";

    fn own_id(&self) -> Option<&FileId> {
        self.id.as_ref()
    }
}

impl<'a> From<FileId> for Ref<'a, File> {
    fn from(id: FileId) -> Self {
        Ref::Id(id)
    }
}

impl<'a> From<u32> for Ref<'a, File> {
    fn from(id: u32) -> Self {
        Ref::Id(FileId(id))
    }
}
