//! Building endpoint URLs from the base URL and path segments.
//!
//! MINERVA addresses RPC-style operations on a resource with a `resource:action`
//! suffix, e.g. `projects/pd/models/42:downloadModel`. [join_urls] leaves the last
//! segment untouched so such a suffix never gets a trailing slash.

use std::fmt::Display;

pub(crate) const LOGIN: &str = "doLogin";
pub(crate) const LOGOUT: &str = "doLogout";
pub(crate) const IS_SESSION_VALID: &str = "users/isSessionValid";
pub(crate) const PROJECTS: &str = "projects/";
pub(crate) const STATISTICS: &str = "statistics";
pub(crate) const MODELS: &str = "models/";
pub(crate) const CONFIGURATION: &str = "configuration/";
pub(crate) const OPTIONS: &str = "configuration/options/";
pub(crate) const FILES: &str = "files/";
pub(crate) const CONVERT: &str = "convert/";
pub(crate) const CONVERT_IMAGE: &str = "convert/image/";
pub(crate) const UPLOAD_CONTENT: &str = "uploadContent";

/// Join URL segments. Every segment except the last is given exactly one
/// trailing `/` (if it does not already end with one), the last is appended verbatim.
pub fn join_urls<S: AsRef<str>>(segments: &[S]) -> String {
    let mut url = String::new();
    if let Some((last, init)) = segments.split_last() {
        for segment in init {
            let segment = segment.as_ref();
            url.push_str(segment);
            if !segment.ends_with('/') {
                url.push('/');
            }
        }
        url.push_str(last.as_ref());
    }
    url
}

/// A `resource:action` suffix, e.g. `42:downloadModel`.
pub fn action(id: impl Display, action: impl Display) -> String {
    format!("{}:{}", id, action)
}
