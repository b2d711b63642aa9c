use crate::codec::{JsonCodec, TokenCodec};
use crate::color::{from_string, Color};
use crate::error::{Result, UnsetWrapperError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wrapper type for putting a [`Color`] in another struct and having it serialize as its
/// string token.
///
/// A wrapper starts out empty ([`Wrapper::default`]) and is populated by decoding, or is built
/// from a known [`Color`] for encoding. If the string in the input is not a valid color,
/// deserializing fails; encoding an empty wrapper also fails rather than producing `null`.
///
/// # Example
///
/// ```
/// use color_enum::{Color, Wrapper};
///
/// #[derive(serde::Deserialize)]
/// struct Thing {
///     color: Wrapper,
/// }
///
/// let thing: Thing = color_enum::codec::from_str(r#"{"color":"blue"}"#)?;
///
/// // Can be compared to the inner enum type
/// assert_eq!(thing.color, Color::Blue);
/// assert_eq!(thing.color.to_string(), "blue");
///
/// // Encoding produces a JSON string literal
/// assert_eq!(Wrapper::new(Color::Red).encode()?, r#""red""#);
/// # Ok::<(), color_enum::Error>(())
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wrapper(Option<Color>);

impl Wrapper {
    /// Creates a populated wrapper.
    pub const fn new(color: Color) -> Self {
        Self(Some(color))
    }

    /// Returns the held color, or `None` if the wrapper has not been populated.
    pub const fn color(&self) -> Option<Color> {
        self.0
    }

    pub const fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_inner(self) -> Option<Color> {
        self.0
    }

    /// Returns the canonical token of the held color.
    pub fn as_str(&self) -> Option<&'static str> {
        self.0.as_ref().map(Color::as_str)
    }

    /// Decodes a JSON string literal (e.g. `"blue"`, with the quotes) into a populated wrapper.
    pub fn decode(token: &str) -> Result<Self> {
        Self::decode_with::<JsonCodec>(token)
    }

    /// Decodes a token using the given carrier format.
    pub fn decode_with<C: TokenCodec>(raw: &str) -> Result<Self> {
        let token = C::decode_token(raw)?;
        Ok(Self::new(from_string(&token)?))
    }

    /// Encodes the held color as a JSON string literal.
    pub fn encode(&self) -> Result<String> {
        self.encode_with::<JsonCodec>()
    }

    /// Encodes the held color using the given carrier format.
    pub fn encode_with<C: TokenCodec>(&self) -> Result<String> {
        let token = self.as_str().ok_or(UnsetWrapperError)?;
        C::encode_token(token)
    }
}

impl From<Color> for Wrapper {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl PartialEq<Color> for Wrapper {
    fn eq(&self, rhs: &Color) -> bool {
        self.0.as_ref() == Some(rhs)
    }
}

impl PartialEq<Wrapper> for Color {
    fn eq(&self, rhs: &Wrapper) -> bool {
        rhs == self
    }
}

/// An empty wrapper renders as `<unset>`.
impl fmt::Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(color) => fmt::Display::fmt(&color, f),
            None => f.write_str("<unset>"),
        }
    }
}

impl Serialize for Wrapper {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(color) => color.serialize(serializer),
            None => Err(serde::ser::Error::custom(UnsetWrapperError)),
        }
    }
}

impl<'de> Deserialize<'de> for Wrapper {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Color::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PlainCodec;
    use crate::error::ErrorKind;
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn empty_by_default() {
        let wrapper = Wrapper::default();
        assert!(!wrapper.is_set());
        assert_eq!(wrapper.color(), None);
        assert_eq!(wrapper.as_str(), None);
        assert_eq!(wrapper.to_string(), "<unset>");
    }

    #[test]
    fn partial_eq() {
        assert_eq!(Wrapper::new(Color::Red), Wrapper::from(Color::Red));
        assert_ne!(Wrapper::new(Color::Red), Wrapper::new(Color::Blue));

        // Equality between wrapper and unwrapped color, both directions
        assert_eq!(Wrapper::new(Color::Blue), Color::Blue);
        assert_eq!(Color::Blue, Wrapper::new(Color::Blue));
        assert_ne!(Wrapper::new(Color::Blue), Color::Red);
        assert_ne!(Wrapper::default(), Color::Red);
    }

    #[test]
    fn decode() -> Result {
        assert_eq!(Wrapper::decode(r#""red""#)?, Color::Red);
        assert_eq!(Wrapper::decode(r#""blue""#)?, Color::Blue);

        let err = Wrapper::decode(r#""green""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.invalid_value(), Some("green"));

        for malformed in &["42", "{}", "[\"red\"]", "null", "red", "\"red"] {
            let err = Wrapper::decode(malformed).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "input: {}", malformed);
        }

        Ok(())
    }

    #[test]
    fn encode() -> Result {
        assert_eq!(Wrapper::new(Color::Red).encode()?, r#""red""#);
        assert_eq!(Wrapper::new(Color::Blue).encode()?, r#""blue""#);

        let err = Wrapper::default().encode().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unset);

        Ok(())
    }

    #[test]
    fn round_trip() -> Result {
        for color in Color::ALL {
            let encoded = Wrapper::new(*color).encode()?;
            let decoded = Wrapper::decode(&encoded)?;
            assert_eq!(decoded, *color);
            assert_eq!(decoded.encode()?, encoded);
        }

        Ok(())
    }

    #[test]
    fn plain_codec() -> Result {
        assert_eq!(Wrapper::decode_with::<PlainCodec>("blue")?, Color::Blue);
        assert_eq!(Wrapper::new(Color::Red).encode_with::<PlainCodec>()?, "red");

        let err = Wrapper::decode_with::<PlainCodec>("\"blue\"").unwrap_err();
        assert_eq!(err.invalid_value(), Some("\"blue\""));

        Ok(())
    }

    #[test]
    fn serialize() -> Result {
        assert_eq!(serde_json::to_value(Wrapper::new(Color::Red))?, json!("red"));
        assert!(serde_json::to_value(Wrapper::default()).is_err());
        Ok(())
    }

    #[test]
    fn deserialize() -> Result {
        assert_eq!(
            serde_json::from_value::<Wrapper>(json!("blue"))?,
            Wrapper::new(Color::Blue),
        );

        assert!(serde_json::from_value::<Wrapper>(json!("green")).is_err());
        assert!(serde_json::from_value::<Wrapper>(json!(42)).is_err());

        Ok(())
    }
}
