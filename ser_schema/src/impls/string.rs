use crate::{
	schema::{FieldType, PrimitiveKind},
	Codec, Cursor, Error, Result, MAX_STRING_LEN,
};

/// Append a string as 2-byte little-endian byte length followed by UTF-8 bytes.
pub(crate) fn encode_str(s: &str, out: &mut Vec<u8>) -> Result<()> {
	let len = u16::try_from(s.len())
		.map_err(|_| Error::range("string length", s.len() as i128, 0, MAX_STRING_LEN as i128))?;
	out.extend_from_slice(&len.to_le_bytes());
	out.extend_from_slice(s.as_bytes());
	Ok(())
}

pub(crate) fn decode_string(cursor: &mut Cursor<'_>) -> Result<String> {
	let len = u16::from_le_bytes(cursor.take_array()?) as usize;
	let bytes = cursor.take(len)?;
	Ok(String::from_utf8(bytes.to_vec())?)
}

impl Codec for String {
	#[inline]
	fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
		encode_str(self, out)
	}

	#[inline]
	fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		decode_string(cursor)
	}

	#[inline]
	fn encoded_len(&self) -> usize {
		2 + self.len()
	}

	#[inline]
	fn field_type() -> FieldType {
		FieldType::Primitive(PrimitiveKind::String)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn length_prefixed() {
		assert_eq!(
			"abc".to_string().serialize().unwrap(),
			vec![0x03, 0x00, b'a', b'b', b'c']
		);
		assert_eq!(String::new().serialize().unwrap(), vec![0x00, 0x00]);
		// Length is in bytes, not chars
		assert_eq!("é".to_string().serialize().unwrap(), vec![0x02, 0x00, 0xc3, 0xa9]);
	}

	#[test]
	fn max_length() {
		let s = "x".repeat(MAX_STRING_LEN);
		let bytes = s.serialize().unwrap();
		assert_eq!(bytes.len(), MAX_STRING_LEN + 2);
		assert_eq!(&bytes[..2], &[0xff, 0xff]);
		assert_eq!(String::deserialize(&bytes).unwrap(), s);

		let too_long = "x".repeat(MAX_STRING_LEN + 1);
		assert_eq!(
			too_long.serialize(),
			Err(Error::Range {
				what: "string length",
				value: 65536,
				min: 0,
				max: 65535
			})
		);
	}

	#[test]
	fn no_partial_output() {
		let mut out = vec![0xaa];
		let too_long = "x".repeat(MAX_STRING_LEN + 1);
		assert!(too_long.serialize_into(&mut out).is_err());
		assert_eq!(out, vec![0xaa]);
	}

	#[test]
	fn truncated() {
		assert_eq!(String::deserialize(&[0x05]).unwrap_err().kind(), ErrorKind::Underflow);
		assert_eq!(
			String::deserialize(&[0x05, 0x00, b'a', b'b']),
			Err(Error::Underflow {
				needed: 5,
				remaining: 2
			})
		);
	}

	#[test]
	fn invalid_utf8() {
		let err = String::deserialize(&[0x01, 0x00, 0xff]).unwrap_err();
		assert!(matches!(err, Error::InvalidUtf8(_)));
		assert_eq!(err.kind(), ErrorKind::Invalid);
	}
}
