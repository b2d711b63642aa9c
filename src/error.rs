//! Error types returned by color conversion and the wrapper codecs.

use std::error::Error as StdError;
use std::fmt;

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned when converting, decoding or encoding a [`Color`](crate::Color).
///
/// The [`kind`](Error::kind) tells the caller what went wrong; the underlying cause (if any) is
/// available through [`source`](std::error::Error::source).
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input was not a valid string in the wire format.
    #[error("malformed input")]
    MalformedInput,
    /// The input was a valid string, but not the token of any known color.
    #[error("invalid value")]
    InvalidValue,
    /// Attempted to encode a wrapper that holds no color.
    #[error("wrapper holds no value")]
    Unset,
}

/// A string that does not name any [`Color`](crate::Color).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color `{value}`")]
pub struct InvalidColorError {
    pub value: String,
}

impl InvalidColorError {
    const PREFIX: &'static str = "unknown color `";

    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }

    // Inverse of the `Display` impl. Used to recover the offending string after it has passed
    // through `serde::de::Error::custom`.
    fn parse(msg: &str) -> Option<Self> {
        msg.strip_prefix(Self::PREFIX)?
            .strip_suffix('`')
            .map(Self::new)
    }
}

/// An empty [`Wrapper`](crate::Wrapper) was passed to an encoder.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot encode a wrapper that holds no color")]
pub struct UnsetWrapperError;

impl From<InvalidColorError> for Error {
    fn from(error: InvalidColorError) -> Self {
        Self::new(ErrorKind::InvalidValue).with_source(error)
    }
}

impl From<UnsetWrapperError> for Error {
    fn from(error: UnsetWrapperError) -> Self {
        Self::new(ErrorKind::Unset).with_source(error)
    }
}

/// Sorts a `serde_json` error into one of the [`ErrorKind`]s.
///
/// Errors raised by this crate's own serde impls are recognized by their message and rebuilt as
/// typed sources; everything else is [`ErrorKind::MalformedInput`].
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        use serde_json::error::Category;

        if error.classify() == Category::Data {
            let msg = error.to_string();
            let msg = strip_position(&msg, &error);

            if let Some(invalid) = InvalidColorError::parse(msg) {
                return invalid.into();
            }

            if msg == UnsetWrapperError.to_string() {
                return UnsetWrapperError.into();
            }
        }

        Self::new(ErrorKind::MalformedInput).with_source(error)
    }
}

// `serde_json` appends " at line N column M" to positioned errors.
fn strip_position<'a>(msg: &'a str, error: &serde_json::Error) -> &'a str {
    if error.line() == 0 {
        return msg;
    }

    let suffix = format!(" at line {} column {}", error.line(), error.column());
    msg.strip_suffix(suffix.as_str()).unwrap_or(msg)
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Set this error's underlying `source`.
    pub fn with_source<E: Into<BoxError>>(mut self, source: E) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn new_malformed<E: Into<BoxError>>(source: E) -> Self {
        Self::new(ErrorKind::MalformedInput).with_source(source)
    }

    /// Consumes the error, returning its source.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_malformed(&self) -> bool {
        self.kind == ErrorKind::MalformedInput
    }

    pub fn is_invalid_value(&self) -> bool {
        self.kind == ErrorKind::InvalidValue
    }

    /// The string that failed to resolve to a color, if this is an
    /// [`ErrorKind::InvalidValue`] error.
    pub fn invalid_value(&self) -> Option<&str> {
        self.find_source::<InvalidColorError>()
            .map(|e| e.value.as_str())
    }

    /// Check if any error in this error's `source` chain match the given [`ErrorKind`].
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        if self.kind == kind {
            return true;
        }

        let mut source = self.source();

        while let Some(e) = source {
            match e.downcast_ref::<Self>() {
                Some(found) if found.kind == kind => return true,
                _ => source = e.source(),
            }
        }

        false
    }

    /// Recurse through this error's `source` chain, returning the first matching error type.
    pub fn find_source<E: StdError + 'static>(&self) -> Option<&E> {
        let mut source = self.source();

        while let Some(e) = source {
            match e.downcast_ref::<E>() {
                Some(found) => return Some(found),
                None => source = e.source(),
            }
        }

        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref source) = self.source {
            write!(f, "{}: {}", self.kind, source)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}
