//! Logging in and out of MINERVA.

use super::base::MinervaClient;
use crate::errors::{check, MinervaError, SessionError};
use crate::models::{LoginResponse, LogoutResponse, SessionValidity};
use crate::requests::LoginForm;
use crate::schema::{decode, Context};
use crate::types::UsernameRef;
use crate::urls::{IS_SESSION_VALID, LOGIN, LOGOUT};
use cookie::Cookie;
use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
use reqwest::Method;
use serde_json::{Map, Value};
use std::fmt;

/// Error message of `users/isSessionValid` for an invalid session.
const ACCESS_DENIED: &str = "Access denied.";

/// Cookies set by MINERVA on login, sent back with every request.
#[derive(Clone)]
pub struct Credential {
    cookies: Vec<(String, String)>,
    header: HeaderValue,
}

impl Credential {
    /// Collect the cookies from the `Set-Cookie` headers of a login response.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Result<Self, SessionError> {
        let cookies: Vec<(String, String)> = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|raw| raw.to_str().ok())
            .filter_map(|raw| Cookie::parse(raw.to_string()).ok())
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();
        if cookies.is_empty() {
            return Err(SessionError::MissingCookie);
        }
        let joined = cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");
        let mut header = HeaderValue::from_str(&joined).map_err(|_| SessionError::MissingCookie)?;
        header.set_sensitive(true);
        Ok(Self { cookies, header })
    }

    /// Names of the cookies held.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cookies.iter().map(|(name, _)| name.as_str())
    }

    /// Value of the `Cookie` header.
    pub(crate) fn header(&self) -> &HeaderValue {
        &self.header
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("names", &self.names().collect::<Vec<_>>())
            .field("values", &"<redacted>")
            .finish()
    }
}

impl MinervaClient {
    /// Log in, keeping the session cookie for all further requests of this client.
    ///
    /// Logging in again replaces the credential of this client (and only this client).
    pub async fn log_in(
        &mut self,
        username: &UsernameRef,
        password: &str,
    ) -> Result<LoginResponse, SessionError> {
        let url = self.endpoint(&[LOGIN]);
        log::debug!("POST {}", url);
        let res = self
            .client
            .post(&url)
            .form(&LoginForm {
                login: username.as_str(),
                password,
            })
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await?;
            return Err(SessionError::Authentication {
                status,
                reason,
                text,
            });
        }
        let credential = Credential::from_headers(res.headers())?;
        let body = res.json().await?;
        let login = decode(body, &Context::new())?;
        log::info!("Logged in to {} as {}", self.url, username);
        self.credential = Some(credential);
        Ok(login)
    }

    /// Invalidate the session on MINERVA and forget the credential.
    pub async fn log_out(&mut self) -> Result<LogoutResponse, SessionError> {
        if self.credential.is_none() {
            return Err(SessionError::NotLoggedIn);
        }
        let url = self.endpoint(&[LOGOUT]);
        let res = check(self.request(Method::GET, &url).send().await?).await?;
        self.credential = None;
        log::info!("Logged out of {}", self.url);
        // MINERVA may answer with an empty body
        let text = res.text().await?;
        let body = serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Map::new()));
        Ok(decode(body, &Context::new())?)
    }

    /// Ask MINERVA whether the session of this client is valid.
    ///
    /// Anything other than a clear yes or a clear "Access denied." is an error.
    pub async fn is_valid(&self) -> Result<bool, SessionError> {
        let url = self.endpoint(&[IS_SESSION_VALID]);
        let res = self.request(Method::GET, &url).send().await?;
        let status = res.status();
        let reason = status.canonical_reason().unwrap_or("unknown reason");
        let text = res.text().await?;
        let body: SessionValidity = serde_json::from_str(&text).unwrap_or_default();
        if status.is_success() {
            if body.login.is_some() {
                Ok(true)
            } else {
                Err(SessionError::UnexpectedResponse { status, text })
            }
        } else if body.error.as_deref() == Some(ACCESS_DENIED) {
            Ok(false)
        } else {
            Err(SessionError::Request(MinervaError::Service {
                status,
                reason,
                text,
            }))
        }
    }

    /// Whether this client holds a credential. Does not ask MINERVA.
    pub fn is_logged_in(&self) -> bool {
        self.credential.is_some()
    }

    /// The credential of this client, if logged in.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }
}
