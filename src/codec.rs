//! Carriers for color tokens, and helpers for whole JSON documents.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A trait describing how a color token is carried on the wire. This is provided to allow
/// wrappers to be read from formats other than a JSON string literal.
///
/// # Example
///
/// ```
/// use color_enum::codec::TokenCodec;
/// use color_enum::{Color, Error, Wrapper};
///
/// // Tokens written as `color:<name>`
/// #[derive(Debug, Clone)]
/// pub struct PrefixedCodec;
///
/// impl TokenCodec for PrefixedCodec {
///     fn decode_token(raw: &str) -> Result<String, Error> {
///         Ok(raw.trim_start_matches("color:").to_owned())
///     }
///
///     fn encode_token(token: &str) -> Result<String, Error> {
///         Ok(format!("color:{}", token))
///     }
/// }
///
/// assert_eq!(Wrapper::decode_with::<PrefixedCodec>("color:red")?, Color::Red);
/// assert_eq!(Wrapper::new(Color::Blue).encode_with::<PrefixedCodec>()?, "color:blue");
/// # Ok::<(), Error>(())
/// ```
pub trait TokenCodec {
    /// Extracts the token string from its wire representation. Fails with
    /// [`ErrorKind::MalformedInput`](crate::ErrorKind::MalformedInput) if `raw` is not a valid
    /// string in this format.
    fn decode_token(raw: &str) -> Result<String>;

    /// Converts a token string into its wire representation.
    fn encode_token(token: &str) -> Result<String>;
}

/// Tokens carried as JSON string literals, e.g. `"blue"`.
#[derive(Debug, Clone)]
pub struct JsonCodec;

impl TokenCodec for JsonCodec {
    fn decode_token(raw: &str) -> Result<String> {
        // Any JSON error here means `raw` was not a string literal, so it is never reclassified.
        serde_json::from_str(raw).map_err(Error::new_malformed)
    }

    fn encode_token(token: &str) -> Result<String> {
        serde_json::to_string(token).map_err(Error::new_malformed)
    }
}

/// The raw string is the token itself, with no quoting.
#[derive(Debug, Clone)]
pub struct PlainCodec;

impl TokenCodec for PlainCodec {
    fn decode_token(raw: &str) -> Result<String> {
        Ok(raw.to_owned())
    }

    fn encode_token(token: &str) -> Result<String> {
        Ok(token.to_owned())
    }
}

/// Deserializes a JSON document, reporting failures with this crate's [`ErrorKind`]s.
///
/// An unknown color anywhere in the document is an
/// [`ErrorKind::InvalidValue`](crate::ErrorKind::InvalidValue) error; any other problem with the
/// input is [`ErrorKind::MalformedInput`](crate::ErrorKind::MalformedInput).
///
/// [`ErrorKind`]: crate::ErrorKind
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Like [`from_str`], but for an already parsed [`serde_json::Value`].
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Serializes a value to a JSON string. Fails with
/// [`ErrorKind::Unset`](crate::ErrorKind::Unset) if it contains an empty
/// [`Wrapper`](crate::Wrapper).
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
