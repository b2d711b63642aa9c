//! A closed set of colors with validated string conversion, and a [`Wrapper`] type that lets a
//! [`Color`] live in a serde struct as a plain string.
//!
//! ```
//! use color_enum::{Color, Wrapper};
//!
//! #[derive(serde::Deserialize)]
//! struct Thing {
//!     color: Wrapper,
//! }
//!
//! let thing: Thing = color_enum::codec::from_str(r#"{"color":"blue"}"#)?;
//! assert_eq!(thing.color, Color::Blue);
//!
//! let err = color_enum::codec::from_str::<Thing>(r#"{"color":"green"}"#).err().unwrap();
//! assert_eq!(err.invalid_value(), Some("green"));
//! # Ok::<(), color_enum::Error>(())
//! ```

pub mod codec;
pub mod color;
pub mod error;

pub use crate::color::{from_string, Color, Wrapper};
pub use crate::error::{Error, ErrorKind, Result};
