use std::fmt;
use std::io;
use std::result;

use crate::contacts::validation::FieldErrors;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    Io(String),
    Validation(FieldErrors),
    Transport(String),
    NotFound(String),
}

impl Error {
    /// A missing delete target is reported by the backend, so it counts
    /// as a transport failure as well.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::NotFound(_))
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Error::Validation(errs) => Some(errs),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Validation(errs) => write!(f, "Validation error: {}", errs),
            Error::Transport(msg)   => write!(f, "{}", msg),
            Error::NotFound(msg)    => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Argument(format!("Invalid url: {}", err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(format!("Http error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Argument(format!("Json error: {}", err))
    }
}

impl From<FieldErrors> for Error {
    fn from(errs: FieldErrors) -> Self {
        Error::Validation(errs)
    }
}

pub type Result<T> = result::Result<T, Error>;
