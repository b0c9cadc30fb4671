//! Formats MINERVA can convert maps to and from, and which route downloads them.

use crate::errors::FormatError;
use crate::urls::{CONVERT, CONVERT_IMAGE};
use std::fmt;
use std::str::FromStr;

/// Namespace of MINERVA's image generators. Everything else is a document-model converter.
const IMAGE_GENERATORS: &str = "lcsb.mapviewer.converter.graphics.";

/// A map format, by the short name users know it by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub enum Format {
    Sbgnml,
    #[default]
    CellDesigner,
    Sbml,
    Gpml,
    Png,
    Pdf,
    Svg,
}

/// The action of a map resource which produces a download.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DownloadAction {
    /// `downloadModel`
    Model,
    /// `downloadImage`
    Image,
}

impl Format {
    pub const ALL: [Format; 7] = [
        Format::Sbgnml,
        Format::CellDesigner,
        Format::Sbml,
        Format::Gpml,
        Format::Png,
        Format::Pdf,
        Format::Svg,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Format::Sbgnml => "sbgnml",
            Format::CellDesigner => "celldesigner",
            Format::Sbml => "sbml",
            Format::Gpml => "gpml",
            Format::Png => "png",
            Format::Pdf => "pdf",
            Format::Svg => "svg",
        }
    }

    /// Canonical handler class of this format.
    pub fn handler(self) -> &'static str {
        match self {
            Format::Sbgnml => "lcsb.mapviewer.converter.model.sbgnml.SbgnmlXmlConverter",
            Format::CellDesigner => {
                "lcsb.mapviewer.converter.model.celldesigner.CellDesignerXmlParser"
            }
            Format::Sbml => "lcsb.mapviewer.converter.model.sbml.SbmlParser",
            Format::Gpml => "lcsb.mapviewer.wikipathway.GpmlParser",
            Format::Png => "lcsb.mapviewer.converter.graphics.PngImageGenerator",
            Format::Pdf => "lcsb.mapviewer.converter.graphics.PdfImageGenerator",
            Format::Svg => "lcsb.mapviewer.converter.graphics.SvgImageGenerator",
        }
    }

    /// Name MINERVA lists this format under in its converter listings.
    fn display_name(self) -> &'static str {
        match self {
            Format::Sbgnml => "SBGN-ML",
            Format::CellDesigner => "CellDesigner_SBML",
            Format::Sbml => "SBML",
            Format::Gpml => "GPML",
            Format::Png => "png",
            Format::Pdf => "pdf",
            Format::Svg => "svg",
        }
    }

    pub fn is_image(self) -> bool {
        self.download_action() == DownloadAction::Image
    }

    pub fn download_action(self) -> DownloadAction {
        DownloadAction::for_handler(self.handler())
    }

    /// Conversion endpoint producing this format.
    pub(crate) fn conversion_url(self) -> &'static str {
        if self.is_image() {
            CONVERT_IMAGE
        } else {
            CONVERT
        }
    }

    /// Look up a format by a name MINERVA uses for it: either the handler class
    /// or the display name.
    pub fn from_minerva_name(name: &str) -> Option<Format> {
        Format::ALL
            .into_iter()
            .find(|f| f.handler() == name || f.display_name() == name)
    }
}

impl DownloadAction {
    pub fn for_handler(handler: &str) -> Self {
        if handler.starts_with(IMAGE_GENERATORS) {
            DownloadAction::Image
        } else {
            DownloadAction::Model
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DownloadAction::Model => "downloadModel",
            DownloadAction::Image => "downloadImage",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DownloadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormatError::Unknown(s.to_string()))
    }
}
