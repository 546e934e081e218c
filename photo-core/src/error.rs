use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the Cloudinary API.
///
/// The `Display` output is the bare message; callers add their own prefix.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Destroy call answered with something other than `result: "ok"`.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing Cloudinary credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

/// Which side has to act to fix a failed delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Forbidden,
    Configuration,
    Remote,
}

/// Terminal failure of a delete request. `Display` is the public message.
#[derive(Error, Debug)]
pub enum DeleteError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request")]
    InvalidRequest,

    #[error("Missing parameter")]
    MissingParameter,

    #[error("Server configuration missing")]
    ConfigurationMissing(#[from] ConfigError),

    #[error("No device info found for this photo.")]
    NoDeviceInfo,

    #[error("Not authorized to delete this photo.")]
    NotAuthorized,

    #[error("Delete failed: {0}")]
    Remote(#[from] RemoteError),
}

impl DeleteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeleteError::MethodNotAllowed
            | DeleteError::InvalidRequest
            | DeleteError::MissingParameter => ErrorKind::BadRequest,
            DeleteError::NoDeviceInfo | DeleteError::NotAuthorized => ErrorKind::Forbidden,
            DeleteError::ConfigurationMissing(_) => ErrorKind::Configuration,
            DeleteError::Remote(_) => ErrorKind::Remote,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            DeleteError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            DeleteError::InvalidRequest | DeleteError::MissingParameter => StatusCode::BAD_REQUEST,
            DeleteError::NoDeviceInfo | DeleteError::NotAuthorized => StatusCode::FORBIDDEN,
            DeleteError::ConfigurationMissing(_) | DeleteError::Remote(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
