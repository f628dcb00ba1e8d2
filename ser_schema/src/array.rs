use std::{
	fmt,
	ops::{Deref, DerefMut},
};

use crate::{schema::FieldType, Codec, Cursor, Error, Result, MAX_ARRAY_LEN};

/// Homogeneous sequence of `T`.
///
/// Encoded as a 1-byte element count followed by each element's own encoding.
/// No per-element framing is added, as every element's encoding is
/// self-delimiting. An array with more than 255 elements can be built, but
/// cannot be serialized.
///
/// ```
/// use ser_schema::{Array, Codec};
///
/// let mut arr = Array::from([1u8, 2, 3]);
/// assert_eq!(arr.serialize().unwrap(), vec![3, 1, 2, 3]);
/// assert_eq!(arr.pop().unwrap(), 3);
/// assert_eq!(arr, [1, 2]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Array<T> {
	items: Vec<T>,
}

impl<T> Array<T> {
	/// Create new empty [`Array`].
	pub fn new() -> Self {
		Self { items: Vec::new() }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			items: Vec::with_capacity(capacity),
		}
	}

	/// Add element to end.
	#[inline]
	pub fn append(&mut self, item: T) {
		self.items.push(item);
	}

	/// Add element to end. Alias for [`append`](Array::append).
	#[inline]
	pub fn push(&mut self, item: T) {
		self.append(item);
	}

	/// Insert element at `index`, shifting later elements along.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn insert(&mut self, index: usize, item: T) {
		self.items.insert(index, item);
	}

	/// Remove and return last element.
	///
	/// Fails with [`Error::Empty`] if array has no elements.
	pub fn pop(&mut self) -> Result<T> {
		self.items.pop().ok_or(Error::Empty)
	}

	pub fn into_vec(self) -> Vec<T> {
		self.items
	}
}

impl<T: Codec> Codec for Array<T> {
	fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
		let count = u8::try_from(self.items.len()).map_err(|_| {
			Error::range(
				"array length",
				self.items.len() as i128,
				0,
				MAX_ARRAY_LEN as i128,
			)
		})?;
		out.push(count);
		for item in &self.items {
			item.encode(out)?;
		}
		Ok(())
	}

	fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
		let count = cursor.read_u8()? as usize;
		let mut items = Vec::with_capacity(count);
		for _ in 0..count {
			items.push(T::decode(cursor)?);
		}
		Ok(Self { items })
	}

	fn encoded_len(&self) -> usize {
		1 + self.items.iter().map(Codec::encoded_len).sum::<usize>()
	}

	fn field_type() -> FieldType {
		FieldType::Array(Box::new(T::field_type()))
	}
}

impl<T> Deref for Array<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		&self.items
	}
}

impl<T> DerefMut for Array<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		&mut self.items
	}
}

impl<T> From<Vec<T>> for Array<T> {
	fn from(items: Vec<T>) -> Self {
		Self { items }
	}
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
	fn from(items: [T; N]) -> Self {
		Self {
			items: items.into(),
		}
	}
}

impl<T> From<Array<T>> for Vec<T> {
	fn from(array: Array<T>) -> Self {
		array.items
	}
}

impl<T> FromIterator<T> for Array<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl<T> Extend<T> for Array<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.items.extend(iter);
	}
}

impl<T> IntoIterator for Array<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a Array<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: PartialEq> PartialEq<Vec<T>> for Array<T> {
	fn eq(&self, other: &Vec<T>) -> bool {
		self.items == *other
	}
}

impl<T: PartialEq> PartialEq<[T]> for Array<T> {
	fn eq(&self, other: &[T]) -> bool {
		self.items == other
	}
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Array<T> {
	fn eq(&self, other: &[T; N]) -> bool {
		self.items == other
	}
}

impl<T: PartialEq> PartialEq<Array<T>> for Vec<T> {
	fn eq(&self, other: &Array<T>) -> bool {
		*self == other.items
	}
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.items).finish()
	}
}

/// Renders as `[a, b, c]`, using each element's `Debug` form.
impl<T: fmt::Debug> fmt::Display for Array<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (index, item) in self.items.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{:?}", item)?;
		}
		f.write_str("]")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{schema::PrimitiveKind, ErrorKind};

	#[test]
	fn count_prefixed() {
		let mut arr = Array::from([1u8, 2, 3]);
		assert_eq!(arr.serialize().unwrap(), vec![0x03, 0x01, 0x02, 0x03]);
		arr.pop().unwrap();
		assert_eq!(arr.serialize().unwrap(), vec![0x02, 0x01, 0x02]);
	}

	#[test]
	fn empty() {
		let arr = Array::<String>::new();
		assert_eq!(arr.serialize().unwrap(), vec![0x00]);
		assert_eq!(Array::<String>::deserialize(&[0x00]).unwrap(), arr);
	}

	#[test]
	fn pop_empty() {
		let mut arr = Array::<u8>::new();
		assert_eq!(arr.pop(), Err(Error::Empty));
		assert_eq!(arr.pop().unwrap_err().kind(), ErrorKind::Empty);
	}

	#[test]
	fn capacity_boundary() {
		let mut arr: Array<u8> = (0..=254).collect();
		assert_eq!(arr.len(), 255);
		let bytes = arr.serialize().unwrap();
		assert_eq!(bytes.len(), 256);
		assert_eq!(bytes[0], 0xff);
		assert_eq!(Array::<u8>::deserialize(&bytes).unwrap(), arr);

		arr.append(0);
		assert_eq!(
			arr.serialize(),
			Err(Error::Range {
				what: "array length",
				value: 256,
				min: 0,
				max: 255
			})
		);
	}

	#[test]
	fn strings_self_delimit() {
		let arr = Array::from(vec!["ab".to_string(), String::new()]);
		let bytes = arr.serialize().unwrap();
		assert_eq!(bytes, vec![0x02, 0x02, 0x00, b'a', b'b', 0x00, 0x00]);
		assert_eq!(Array::<String>::deserialize(&bytes).unwrap(), arr);
	}

	#[test]
	fn short_count() {
		assert_eq!(
			Array::<u8>::deserialize(&[0x03, 0x01, 0x02]).unwrap_err().kind(),
			ErrorKind::Underflow
		);
	}

	#[test]
	fn sequence_operations() {
		let mut arr = Array::from([2u16]);
		arr.insert(0, 1);
		arr.extend([3, 4]);
		arr.push(5);
		assert_eq!(arr, vec![1, 2, 3, 4, 5]);
		assert_eq!(vec![1, 2, 3, 4, 5], arr);
		assert_eq!(arr[..], [1, 2, 3, 4, 5][..]);
		arr[0] = 10;
		assert_eq!(arr.iter().sum::<u16>(), 24);
		assert_eq!(arr.to_string(), "[10, 2, 3, 4, 5]");
	}

	#[test]
	fn nested() {
		let arr = Array::from([Array::from([1u8]), Array::new()]);
		let bytes = arr.serialize().unwrap();
		assert_eq!(bytes, vec![0x02, 0x01, 0x01, 0x00]);
		assert_eq!(Array::<Array<u8>>::deserialize(&bytes).unwrap(), arr);
		assert_eq!(
			Array::<Array<u8>>::field_type(),
			FieldType::Array(Box::new(FieldType::Array(Box::new(FieldType::Primitive(
				PrimitiveKind::U8
			)))))
		);
	}
}
