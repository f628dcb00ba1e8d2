/// Maximum byte length of an encoded string (2-byte length prefix).
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// Maximum number of elements in an encoded array (1-byte count prefix).
pub const MAX_ARRAY_LEN: usize = u8::MAX as usize;

/// What to do with bytes left in the buffer once a top-level value is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingBytes {
	/// Fail with [`Error::TrailingBytes`](crate::Error::TrailingBytes).
	#[default]
	Reject,
	/// Leave them unconsumed.
	Ignore,
}

/// Options for top-level decoding.
///
/// Default is strict: a buffer must contain exactly one encoded value.
///
/// ```
/// use ser_schema::{Codec, DecodeOptions};
///
/// let value = u8::deserialize_with(&[7, 0xff], &DecodeOptions::lenient()).unwrap();
/// assert_eq!(value, 7);
/// assert!(u8::deserialize(&[7, 0xff]).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
	pub trailing_bytes: TrailingBytes,
}

impl DecodeOptions {
	/// Strict options. Same as `DecodeOptions::default()`.
	pub const fn strict() -> Self {
		Self {
			trailing_bytes: TrailingBytes::Reject,
		}
	}

	/// Options which ignore trailing bytes.
	pub const fn lenient() -> Self {
		Self {
			trailing_bytes: TrailingBytes::Ignore,
		}
	}

	/// Set trailing bytes policy.
	pub const fn trailing_bytes(mut self, trailing_bytes: TrailingBytes) -> Self {
		self.trailing_bytes = trailing_bytes;
		self
	}
}
