use crate::{
	schema::{FieldType, PrimitiveKind},
	Codec, Cursor, Error, Result,
};

macro_rules! impl_primitive {
	($ty:ty, $kind:ident) => {
		impl Codec for $ty {
			#[inline]
			fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
				out.extend_from_slice(&self.to_le_bytes());
				Ok(())
			}

			#[inline]
			fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
				Ok(<$ty>::from_le_bytes(cursor.take_array()?))
			}

			#[inline(always)]
			fn encoded_len(&self) -> usize {
				std::mem::size_of::<$ty>()
			}

			#[inline]
			fn field_type() -> FieldType {
				FieldType::Primitive(PrimitiveKind::$kind)
			}
		}
	};
}

impl_primitive!(u8, U8);
impl_primitive!(u16, U16);
impl_primitive!(u32, U32);
impl_primitive!(u64, U64);

impl_primitive!(i8, I8);
impl_primitive!(i16, I16);
impl_primitive!(i32, I32);
impl_primitive!(i64, I64);

impl_primitive!(f32, F32);
impl_primitive!(f64, F64);

impl Codec for bool {
	#[inline]
	fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
		out.push(*self as u8);
		Ok(())
	}

	#[inline]
	fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		match cursor.read_u8()? {
			0 => Ok(false),
			1 => Ok(true),
			byte => Err(Error::InvalidBool(byte)),
		}
	}

	#[inline(always)]
	fn encoded_len(&self) -> usize {
		1
	}

	#[inline]
	fn field_type() -> FieldType {
		FieldType::Primitive(PrimitiveKind::Bool)
	}
}

/// `char` is a single byte, so only U+0000 to U+00FF can be encoded.
impl Codec for char {
	#[inline]
	fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
		let code = *self as u32;
		let byte = u8::try_from(code).map_err(|_| Error::range("char", code as i128, 0, 0xff))?;
		out.push(byte);
		Ok(())
	}

	#[inline]
	fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(char::from(cursor.read_u8()?))
	}

	#[inline(always)]
	fn encoded_len(&self) -> usize {
		1
	}

	#[inline]
	fn field_type() -> FieldType {
		FieldType::Primitive(PrimitiveKind::Char)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn little_endian() {
		assert_eq!(0x0102u16.serialize().unwrap(), vec![0x02, 0x01]);
		assert_eq!(
			0x01020304u32.serialize().unwrap(),
			vec![0x04, 0x03, 0x02, 0x01]
		);
		assert_eq!((-2i16).serialize().unwrap(), vec![0xfe, 0xff]);
		assert_eq!(1.0f32.serialize().unwrap(), vec![0x00, 0x00, 0x80, 0x3f]);
		assert_eq!(u64::deserialize(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 1);
	}

	#[test]
	fn bools() {
		assert_eq!(true.serialize().unwrap(), vec![0x01]);
		assert_eq!(false.serialize().unwrap(), vec![0x00]);
		assert_eq!(bool::deserialize(&[0x01]), Ok(true));
		assert_eq!(bool::deserialize(&[0x00]), Ok(false));
		assert_eq!(bool::deserialize(&[0x02]), Err(Error::InvalidBool(0x02)));
	}

	#[test]
	fn chars() {
		assert_eq!('a'.serialize().unwrap(), vec![b'a']);
		assert_eq!(char::deserialize(&[0xe9]), Ok('é'));
		assert_eq!('é'.serialize().unwrap(), vec![0xe9]);
		assert_eq!('€'.serialize().unwrap_err().kind(), ErrorKind::Range);
	}

	#[test]
	fn underflow() {
		assert_eq!(
			u32::deserialize(&[1, 2, 3]),
			Err(Error::Underflow {
				needed: 4,
				remaining: 3
			})
		);
		assert_eq!(u8::deserialize(&[]).unwrap_err().kind(), ErrorKind::Underflow);
		assert_eq!(bool::deserialize(&[]).unwrap_err().kind(), ErrorKind::Underflow);
	}

	#[test]
	fn measure() {
		assert_eq!(u16::measure(&[1, 2, 3]), Ok(2));
		assert_eq!(f64::measure(&[0; 8]), Ok(8));
	}
}
