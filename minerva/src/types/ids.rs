use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;
use std::fmt;

/// Map (a.k.a. model) ID, unique within its project.
#[derive(Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct MapId(pub u32);

/// Uploaded file ID
#[derive(Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct FileId(pub u32);

/// Configuration option ID
#[derive(Copy, Clone, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct OptionId(pub u32);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for MapId {
    fn from(id: u32) -> Self {
        MapId(id)
    }
}

impl From<u32> for FileId {
    fn from(id: u32) -> Self {
        FileId(id)
    }
}
