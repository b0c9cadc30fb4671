use crate::schema::Record;
use crate::types::Username;
use serde::Deserialize;

/// Body of a successful `doLogin` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub info: Option<String>,
    pub login: Option<Username>,
    pub token: Option<String>,
}

/// Body of a `doLogout` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoutResponse {
    pub status: Option<String>,
}

/// Body of a `users/isSessionValid` response, either way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SessionValidity {
    pub login: Option<Username>,
    pub error: Option<String>,
}

impl Record for LoginResponse {
    const KIND: &'static str = "login response";
}

impl Record for LogoutResponse {
    const KIND: &'static str = "logout response";
}
