//! Defines models for requests sent to MINERVA.
use crate::formats::Format;
use serde::Serialize;

/// Form data of `doLogin`.
#[derive(Serialize)]
pub(crate) struct LoginForm<'a> {
    pub login: &'a str,
    pub password: &'a str,
}

/// Query string for creating a file.
#[derive(Serialize)]
pub(crate) struct NewFileQuery<'a> {
    pub filename: &'a str,
    pub length: u64,
}

/// Options for downloading a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDownload {
    pub format: Format,
    /// Extract the content of a zip archive wrapper. On by default.
    pub unzip: bool,
    /// Only export the area inside this polygon.
    pub polygon: Option<Vec<(f64, f64)>>,
    pub element_ids: Option<Vec<String>>,
    pub reaction_ids: Option<Vec<String>>,
    pub background_overlay_id: Option<String>,
    pub zoom_level: Option<f64>,
    pub overlay_ids: Option<Vec<String>>,
}

impl Default for MapDownload {
    fn default() -> Self {
        Self {
            format: Format::default(),
            unzip: true,
            polygon: None,
            element_ids: None,
            reaction_ids: None,
            background_overlay_id: None,
            zoom_level: None,
            overlay_ids: None,
        }
    }
}

impl MapDownload {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub(crate) fn query(&self) -> MapDownloadQuery {
        MapDownloadQuery {
            handler_class: self.format.handler(),
            polygon_string: self.polygon.as_ref().map(|p| polygon_string(p)),
            element_ids: self.element_ids.as_ref().map(|ids| ids.join(",")),
            reaction_ids: self.reaction_ids.as_ref().map(|ids| ids.join(",")),
            background_overlay_id: self.background_overlay_id.clone(),
            zoom_level: self.zoom_level,
            overlay_ids: self.overlay_ids.as_ref().map(|ids| ids.join(",")),
        }
    }
}

/// Query string of `downloadModel` and `downloadImage`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MapDownloadQuery {
    pub handler_class: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_ids: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_overlay_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_ids: Option<String>,
}

/// Points as `x1,y1;x2,y2;...`
fn polygon_string(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_only_handler() {
        let query = MapDownload::default().query();
        assert_eq!(
            query.handler_class,
            "lcsb.mapviewer.converter.model.celldesigner.CellDesignerXmlParser"
        );
        assert_eq!(query.polygon_string, None);
        assert_eq!(query.element_ids, None);
    }

    #[test]
    fn test_query_joins_lists() {
        let options = MapDownload {
            polygon: Some(vec![(0.0, 0.0), (10.5, 0.0), (10.5, 20.0)]),
            element_ids: Some(vec!["1".to_string(), "2".to_string()]),
            overlay_ids: Some(vec!["9".to_string()]),
            zoom_level: Some(3.0),
            ..MapDownload::new(Format::Png)
        };
        let query = options.query();
        assert_eq!(query.polygon_string.as_deref(), Some("0,0;10.5,0;10.5,20"));
        assert_eq!(query.element_ids.as_deref(), Some("1,2"));
        assert_eq!(query.overlay_ids.as_deref(), Some("9"));
        assert_eq!(query.reaction_ids, None);
        assert_eq!(query.zoom_level, Some(3.0));
    }
}
