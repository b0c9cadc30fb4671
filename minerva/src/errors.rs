//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidBaseUrl {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidBaseUrl);

/// Errors representing failed interactions with MINERVA.
#[derive(thiserror::Error, Debug)]
pub enum MinervaError {
    /// Error response with an explanation from MINERVA.
    #[error("({status:?} {reason:?}): {text}")]
    Service {
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    /// Error response without explanation from MINERVA.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),
}

impl From<reqwest_middleware::Error> for MinervaError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => MinervaError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => MinervaError::Raw(e),
        }
    }
}

/// Fail with [MinervaError::Service] if the response status is not a success.
pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, MinervaError> {
    let status = res.status();
    if status.is_client_error() || status.is_server_error() {
        let reason = status.canonical_reason().unwrap_or("unknown reason");
        let text = res.text().await.map_err(MinervaError::Raw)?;
        Err(MinervaError::Service {
            status,
            reason,
            text,
        })
    } else {
        Ok(res)
    }
}

/// Errors of session management: logging in, logging out, and probing a session.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// Login rejected by MINERVA.
    #[error("login rejected ({status:?} {reason:?}): {text}")]
    Authentication {
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    /// Operation requires a credential but the client does not hold one.
    #[error("must log in first before logging out")]
    NotLoggedIn,

    /// Login accepted but no session cookie came with it.
    #[error("login response does not carry a usable session cookie")]
    MissingCookie,

    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Response which is neither a clear yes nor a clear no.
    #[error("unexpected response ({status:?}): {text}")]
    UnexpectedResponse { status: StatusCode, text: String },

    #[error(transparent)]
    Request(#[from] MinervaError),
}

impl From<reqwest_middleware::Error> for SessionError {
    fn from(e: reqwest_middleware::Error) -> Self {
        SessionError::Request(e.into())
    }
}

impl From<reqwest::Error> for SessionError {
    fn from(e: reqwest::Error) -> Self {
        SessionError::Request(MinervaError::Raw(e))
    }
}

/// A payload field is present but its value cannot be coerced to the declared type.
#[derive(thiserror::Error, Debug)]
#[error("cannot decode {kind}: {source}")]
pub struct ShapeError {
    pub kind: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Identifiers given by the caller do not add up to a resource URL.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IdentityError {
    #[error("you must either provide a {kind}, a {kind} ID and a parent ID, or a {kind} ID and a parent")]
    MissingParent { kind: &'static str },

    #[error("{kind} does not carry its {field}")]
    MissingId {
        kind: &'static str,
        field: &'static str,
    },
}

/// Downloaded content or a format name does not look like what was expected.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// Archive wrapper must contain exactly one entry.
    #[error("expected exactly one entry in zip archive, found {0}")]
    EntryCount(usize),

    #[error(transparent)]
    Archive(#[from] zip::result::ZipError),

    #[error("\"{0}\" is not a known format")]
    Unknown(String),
}

/// An error which might occur while getting metadata of a resource.
#[derive(thiserror::Error, Debug)]
pub enum GetError {
    #[error(transparent)]
    Request(#[from] MinervaError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl From<reqwest::Error> for GetError {
    fn from(e: reqwest::Error) -> Self {
        GetError::Request(MinervaError::Raw(e))
    }
}

impl From<reqwest_middleware::Error> for GetError {
    fn from(e: reqwest_middleware::Error) -> Self {
        GetError::Request(e.into())
    }
}

/// An error which might occur while uploading, downloading, or converting files.
#[derive(thiserror::Error, Debug)]
pub enum FileIOError {
    #[error(transparent)]
    Request(MinervaError),
    #[error(transparent)]
    Identity(IdentityError),
    #[error(transparent)]
    Format(FormatError),
    #[error(transparent)]
    Shape(ShapeError),
    #[error(transparent)]
    IO(std::io::Error),
}

impl From<reqwest::Error> for FileIOError {
    fn from(e: reqwest::Error) -> Self {
        FileIOError::Request(MinervaError::Raw(e))
    }
}

impl From<reqwest_middleware::Error> for FileIOError {
    fn from(e: reqwest_middleware::Error) -> Self {
        FileIOError::Request(e.into())
    }
}

impl From<MinervaError> for FileIOError {
    fn from(e: MinervaError) -> Self {
        FileIOError::Request(e)
    }
}

impl From<IdentityError> for FileIOError {
    fn from(e: IdentityError) -> Self {
        FileIOError::Identity(e)
    }
}

impl From<FormatError> for FileIOError {
    fn from(e: FormatError) -> Self {
        FileIOError::Format(e)
    }
}

impl From<zip::result::ZipError> for FileIOError {
    fn from(e: zip::result::ZipError) -> Self {
        FileIOError::Format(e.into())
    }
}

impl From<ShapeError> for FileIOError {
    fn from(e: ShapeError) -> Self {
        FileIOError::Shape(e)
    }
}

impl From<GetError> for FileIOError {
    fn from(e: GetError) -> Self {
        match e {
            GetError::Request(e) => FileIOError::Request(e),
            GetError::Shape(e) => FileIOError::Shape(e),
            GetError::Identity(e) => FileIOError::Identity(e),
        }
    }
}

impl From<std::io::Error> for FileIOError {
    fn from(e: std::io::Error) -> Self {
        FileIOError::IO(e)
    }
}
