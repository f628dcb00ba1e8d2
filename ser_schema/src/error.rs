//! Error type shared by every codec.

use std::string::FromUtf8Error;

/// Errors produced while constructing, encoding or decoding values.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// Decoder needed more bytes than the buffer had left.
	#[error("buffer underflow: needed {needed} bytes, {remaining} remaining")]
	Underflow { needed: usize, remaining: usize },

	/// Value cannot be represented by its encoding.
	#[error("{what} out of range: {value} not in {min}..={max}")]
	Range {
		what: &'static str,
		value: i128,
		min: i128,
		max: i128,
	},

	/// Value supplied to a typed slot is of the wrong type.
	#[error("type mismatch: expected {expected}, found {found}")]
	Type { expected: String, found: String },

	/// Removal from an empty container.
	#[error("cannot pop from an empty array")]
	Empty,

	/// Boolean byte other than `0x00` or `0x01`.
	#[error("invalid boolean byte {0:#04x}")]
	InvalidBool(u8),

	/// String bytes are not valid UTF-8.
	#[error("invalid utf-8 in string: {0}")]
	InvalidUtf8(#[from] FromUtf8Error),

	/// Bytes left over after the top-level value was decoded.
	#[error("{0} trailing bytes after decoded value")]
	TrailingBytes(usize),

	#[error("unknown field `{field}` for type `{type_name}`")]
	UnknownField { type_name: String, field: String },

	#[error("missing field `{field}` for type `{type_name}`")]
	MissingField { type_name: String, field: String },

	#[error("duplicate field `{field}` in type `{type_name}`")]
	DuplicateField { type_name: String, field: String },
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	/// Not enough input to decode.
	Underflow,
	/// Value outside the capacity of its encoding.
	Range,
	/// Value, or field name, does not match its declared type.
	Type,
	/// Removal from an empty container.
	Empty,
	/// Input is complete but malformed.
	Invalid,
}

impl Error {
	/// Get the kind of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Error::Underflow { .. } => ErrorKind::Underflow,
			Error::Range { .. } => ErrorKind::Range,
			Error::Type { .. }
			| Error::UnknownField { .. }
			| Error::MissingField { .. }
			| Error::DuplicateField { .. } => ErrorKind::Type,
			Error::Empty => ErrorKind::Empty,
			Error::InvalidBool(_) | Error::InvalidUtf8(_) | Error::TrailingBytes(_) => {
				ErrorKind::Invalid
			}
		}
	}

	pub(crate) fn range(what: &'static str, value: i128, min: i128, max: i128) -> Self {
		Error::Range {
			what,
			value,
			min,
			max,
		}
	}

	pub(crate) fn mismatch(expected: impl ToString, found: impl ToString) -> Self {
		Error::Type {
			expected: expected.to_string(),
			found: found.to_string(),
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
