//! The closed set of colors, and conversion from their string tokens.
//!
//! Every variant has exactly one canonical token, used both for [`Display`](std::fmt::Display)
//! and on the wire. [`from_string`] is the only way to turn an arbitrary string into a
//! [`Color`], and it rejects anything that is not one of [`Color::TOKENS`].

mod wrapper;

pub use crate::color::wrapper::Wrapper;

use crate::error::{InvalidColorError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;
use std::io;
use std::str::FromStr;

macro_rules! define_colors {
    (
        $(
            $(#[$docs:meta])*
            ($rust_name:ident, $token:literal),
        )+
    ) => {
        /// A color "enum". Use the variants directly when the value is known, or
        /// [`from_string`] when it comes from outside the program.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Color {
            $(
                $(#[$docs])*
                #[doc = concat!("Token: `", $token, "`")]
                $rust_name,
            )+
        }

        impl Color {
            /// Every color, in declaration order.
            pub const ALL: &'static [Color] = &[$(Color::$rust_name,)+];

            /// The canonical token of every color, in the same order as [`Color::ALL`].
            pub const TOKENS: &'static [&'static str] = &[$($token,)+];

            /// Returns the canonical token.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Color::$rust_name => $token,
                    )+
                }
            }
        }
    };
}

// Adding a row here is all it takes to extend the lookup table; `Color::do_thing` will then
// refuse to compile until the new variant is handled.
define_colors! {
    /// The color red.
    (Red, "red"),
    /// The color blue.
    (Blue, "blue"),
}

/// Looks up the color whose canonical token is exactly `s`.
///
/// Matching is case-sensitive and does no trimming.
///
/// # Example
///
/// ```
/// use color_enum::{from_string, Color, ErrorKind};
///
/// assert_eq!(from_string("blue")?, Color::Blue);
///
/// let err = from_string("Blue").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidValue);
/// assert_eq!(err.invalid_value(), Some("Blue"));
/// # Ok::<(), color_enum::Error>(())
/// ```
pub fn from_string(s: &str) -> Result<Color> {
    match Color::lookup(s) {
        Some(color) => {
            tracing::trace!(token = s, "resolved color");
            Ok(color)
        }
        None => {
            tracing::debug!(token = s, "rejected unknown color token");
            Err(InvalidColorError::new(s).into())
        }
    }
}

impl Color {
    fn lookup(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|color| color.as_str() == s)
    }

    /// Writes a line that is specific to this color.
    ///
    /// The `match` has no wildcard arm: every new variant must be handled here.
    ///
    /// # Example
    ///
    /// ```
    /// use color_enum::Color;
    ///
    /// let mut out = Vec::new();
    /// Color::Red.do_thing(&mut out)?;
    /// assert_eq!(out, b"red DoThing\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn do_thing<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        tracing::debug!(color = %self, "doing thing");

        match self {
            Color::Red => writeln!(out, "red DoThing"),
            Color::Blue => writeln!(out, "blue DoThing"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        from_string(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::Error;

    fn try_from(s: &str) -> Result<Self> {
        from_string(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a color string (one of {:?})", Color::TOKENS)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // The message is recognized again by `Error::from(serde_json::Error)`.
        Color::lookup(value).ok_or_else(|| E::custom(InvalidColorError::new(value)))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ColorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn tokens_match_variants() {
        assert_eq!(Color::ALL.len(), Color::TOKENS.len());

        for (color, token) in Color::ALL.iter().zip(Color::TOKENS) {
            assert_eq!(color.as_str(), *token);
            assert_eq!(color.to_string(), *token);
        }

        assert_eq!(Color::Red.as_str(), "red");
        assert_eq!(Color::Blue.as_str(), "blue");
    }

    #[test]
    fn from_string_known() -> Result {
        for color in Color::ALL {
            assert_eq!(from_string(color.as_str())?, *color);
            assert_eq!(color.as_str().parse::<Color>()?, *color);
            assert_eq!(Color::try_from(color.as_str())?, *color);
        }

        Ok(())
    }

    #[test]
    fn from_string_unknown() {
        for s in &["green", "", "Red", "BLUE", " red", "red ", "blue\n", "rouge"] {
            let err = from_string(s).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue, "input: {:?}", s);
            assert_eq!(err.invalid_value(), Some(*s));
        }
    }

    #[test]
    fn do_thing_is_distinct_per_color() -> Result {
        let mut outputs = Vec::new();

        for color in Color::ALL {
            let mut out = Vec::new();
            color.do_thing(&mut out)?;
            outputs.push(String::from_utf8(out)?);
        }

        assert_eq!(outputs, vec!["red DoThing\n", "blue DoThing\n"]);

        Ok(())
    }

    #[test]
    fn serialize() -> Result {
        assert_eq!(serde_json::to_value(Color::Red)?, json!("red"));
        assert_eq!(serde_json::to_value(Color::Blue)?, json!("blue"));
        Ok(())
    }

    #[test]
    fn deserialize() -> Result {
        assert_eq!(serde_json::from_value::<Color>(json!("red"))?, Color::Red);
        assert_eq!(serde_json::from_value::<Color>(json!("blue"))?, Color::Blue);

        let err = serde_json::from_value::<Color>(json!("green")).unwrap_err();
        assert_eq!(err.to_string(), "unknown color `green`");

        assert!(serde_json::from_value::<Color>(json!(42)).is_err());

        Ok(())
    }
}
