//! Error type returned by every client operation.
//!
//! 400 and 404 have dedicated variants: a bad request means the parameters
//! need adjusting, a missing resource means the country or indicator
//! identifier is unknown. Every other failure, HTTP or transport, lands in
//! [`Error::Api`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    /// HTTP 400: invalid parameters, e.g. a year outside the supported range.
    #[error("{message}")]
    BadRequest { message: String },

    /// HTTP 404: unknown country code or indicator.
    #[error("{message}")]
    NotFound { message: String },

    /// Any other HTTP status, a transport failure (`status_code == None`),
    /// or a success response that could not be decoded.
    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },
}

/// Discriminator for [`Error`] without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Api,
}

impl Error {
    pub(crate) fn http(status: u16, message: String) -> Self {
        match status {
            400 => Error::BadRequest { message },
            404 => Error::NotFound { message },
            _ => Error::Api {
                message,
                status_code: Some(status),
                source: None,
            },
        }
    }

    pub(crate) fn transport(url: &str, err: reqwest::Error) -> Self {
        Error::Api {
            message: format!("Network error calling {url}: {err}"),
            status_code: None,
            source: Some(Box::new(err)),
        }
    }

    pub(crate) fn malformed(
        status: u16,
        message: impl Into<String>,
        source: Option<BoxError>,
    ) -> Self {
        Error::Api {
            message: message.into(),
            status_code: Some(status),
            source,
        }
    }

    /// HTTP status associated with the error. `None` for transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::BadRequest { .. } => Some(400),
            Error::NotFound { .. } => Some(404),
            Error::Api { status_code, .. } => *status_code,
        }
    }

    /// The server's detail message, or a description of the local failure.
    pub fn message(&self) -> &str {
        match self {
            Error::BadRequest { message }
            | Error::NotFound { message }
            | Error::Api { message, .. } => message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BadRequest { .. } => ErrorKind::BadRequest,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Api { .. } => ErrorKind::Api,
        }
    }

    /// True when no HTTP response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Api {
                status_code: None,
                ..
            }
        )
    }
}
