use aliri_braid::braid;

/// MINERVA user's login.
#[braid(serde)]
pub struct Username;

/// Project ID, e.g. `pdmap_dec23`
#[braid(serde)]
pub struct ProjectId;

/// Canonical name of a converter or image generator, e.g.
/// `lcsb.mapviewer.converter.graphics.PngImageGenerator`
#[braid(serde)]
pub struct HandlerClass;

/// Date as reported by MINERVA.
#[braid(serde)]
pub struct DateString;
