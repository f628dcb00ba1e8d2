//! Schema-driven binary serializer.
//!
//! Records are encoded as the concatenation of their fields' encodings, in
//! declaration order. There are no headers, type tags or separators: the
//! reader must know which type to decode.
//!
//! * `bool`, `u8`, `i8`, `char`: 1 byte.
//! * Wider integers and floats: fixed width, little-endian.
//! * `String`: 2-byte little-endian byte length, then UTF-8 bytes.
//! * [`Array<T>`]: 1-byte element count, then each element.
//! * Structs with `#[derive(ComplexType)]`: each field in order.
//!
//! ```
//! use ser_schema::{Array, Codec, ComplexType};
//!
//! #[derive(ComplexType, Clone, PartialEq)]
//! #[complex(id = "user-profile")]
//! struct Profile {
//! 	first_name: String,
//! 	last_name: String,
//! 	age: u8,
//! 	female: bool,
//! }
//!
//! let profile = Profile {
//! 	first_name: "Kuyugama".to_string(),
//! 	last_name: "Hikamiya".to_string(),
//! 	age: 24,
//! 	female: false,
//! };
//! let bytes = profile.serialize().unwrap();
//! assert_eq!(Profile::deserialize(&bytes).unwrap(), profile);
//!
//! let profiles = Array::from([profile.clone()]);
//! let bytes = profiles.serialize().unwrap();
//! assert_eq!(Array::<Profile>::deserialize(&bytes).unwrap(), vec![profile]);
//! ```
//!
//! Types can also be defined at runtime with [`schema`].

#[cfg(feature = "derive")]
pub use ser_schema_derive::ComplexType;

mod array;
pub use array::Array;

mod codec;
pub use codec::Codec;

mod complex;
pub use complex::{fmt_fields, ComplexType};

mod cursor;
pub use cursor::Cursor;

mod error;
pub use error::{Error, ErrorKind, Result};

mod impls;

mod options;
pub use options::{DecodeOptions, TrailingBytes, MAX_ARRAY_LEN, MAX_STRING_LEN};

pub mod schema;

/// Serialize a value to a new buffer.
pub fn serialize<T: Codec>(value: &T) -> Result<Vec<u8>> {
	value.serialize()
}

/// Deserialize a value which must occupy the whole of `bytes`.
pub fn deserialize<T: Codec>(bytes: &[u8]) -> Result<T> {
	T::deserialize(bytes)
}
