use std::any;

use crate::{schema::FieldType, Cursor, DecodeOptions, Result};

/// Trait for types which can be encoded to and decoded from bytes.
///
/// Implemented for the primitive types, `String`, [`Array`], and any struct
/// with `#[derive(ComplexType)]`.
///
/// `decode` must consume exactly the bytes which `encode` produced for an
/// equal value. Nothing else is written: no type tags, no separators.
///
/// [`Array`]: crate::Array
pub trait Codec: Sized {
	/// Append encoding of `self` to `out`.
	///
	/// On error, `out` may contain a partial encoding. Use
	/// [`serialize_into`](Codec::serialize_into) to get all-or-nothing output.
	fn encode(&self, out: &mut Vec<u8>) -> Result<()>;

	/// Decode a value from front of `cursor`, consuming exactly its bytes.
	fn decode(cursor: &mut Cursor<'_>) -> Result<Self>;

	/// Number of bytes `encode` will write, if encoding succeeds.
	fn encoded_len(&self) -> usize;

	/// Runtime description of this type.
	fn field_type() -> FieldType;

	/// Serialize `self` to a new buffer.
	fn serialize(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(self.encoded_len());
		self.encode(&mut out)?;
		log::trace!(
			"serialized {} into {} bytes",
			any::type_name::<Self>(),
			out.len()
		);
		Ok(out)
	}

	/// Serialize `self` onto end of `out`.
	///
	/// If encoding fails, `out` is left as it was.
	fn serialize_into(&self, out: &mut Vec<u8>) -> Result<()> {
		let start = out.len();
		out.reserve(self.encoded_len());
		self.encode(out).map_err(|err| {
			out.truncate(start);
			err
		})
	}

	/// Deserialize a value which must occupy the whole of `bytes`.
	fn deserialize(bytes: &[u8]) -> Result<Self> {
		Self::deserialize_with(bytes, &DecodeOptions::default())
	}

	/// Deserialize a value from start of `bytes`, with trailing bytes handled
	/// according to `options`.
	fn deserialize_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		log::trace!(
			"deserializing {} from {} bytes",
			any::type_name::<Self>(),
			bytes.len()
		);
		let mut cursor = Cursor::new(bytes);
		let value = Self::decode(&mut cursor)?;
		cursor.finish(options)?;
		Ok(value)
	}

	/// Get number of bytes one encoded value occupies at start of `bytes`.
	fn measure(bytes: &[u8]) -> Result<usize> {
		let mut cursor = Cursor::new(bytes);
		Self::decode(&mut cursor)?;
		Ok(cursor.position())
	}
}
