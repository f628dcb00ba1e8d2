use std::{fmt, sync::Arc};

use super::{ComplexTypeDef, FieldType, PrimitiveKind};
use crate::{impls::string::encode_str, Codec, Cursor, Error, Result, MAX_ARRAY_LEN};

/// A value of any [`FieldType`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Bool(bool),
	U8(u8),
	U16(u16),
	U32(u32),
	U64(u64),
	I8(i8),
	I16(i16),
	I32(i32),
	I64(i64),
	F32(f32),
	F64(f64),
	Char(char),
	String(String),
	Complex(ComplexValue),
	Array(ArrayValue),
}

impl Value {
	/// Create an integer value of kind `kind`.
	///
	/// Fails with [`Error::Range`] if `value` does not fit in `kind`,
	/// or [`Error::Type`] if `kind` is not an integer kind.
	///
	/// ```
	/// use ser_schema::schema::{PrimitiveKind, Value};
	///
	/// assert_eq!(Value::integer(PrimitiveKind::U8, 24), Ok(Value::U8(24)));
	/// assert!(Value::integer(PrimitiveKind::U8, 256).is_err());
	/// ```
	pub fn integer(kind: PrimitiveKind, value: i128) -> Result<Self> {
		let (min, max) = kind
			.int_range()
			.ok_or_else(|| Error::mismatch(kind, "integer"))?;
		if value < min || value > max {
			return Err(Error::range(kind.name(), value, min, max));
		}

		// Range checked above
		let value = match kind {
			PrimitiveKind::U8 => Value::U8(value as u8),
			PrimitiveKind::U16 => Value::U16(value as u16),
			PrimitiveKind::U32 => Value::U32(value as u32),
			PrimitiveKind::U64 => Value::U64(value as u64),
			PrimitiveKind::I8 => Value::I8(value as i8),
			PrimitiveKind::I16 => Value::I16(value as i16),
			PrimitiveKind::I32 => Value::I32(value as i32),
			PrimitiveKind::I64 => Value::I64(value as i64),
			_ => unreachable!(),
		};
		Ok(value)
	}

	/// Get primitive kind of value. `None` for complex values and arrays.
	pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
		let kind = match self {
			Value::Bool(_) => PrimitiveKind::Bool,
			Value::U8(_) => PrimitiveKind::U8,
			Value::U16(_) => PrimitiveKind::U16,
			Value::U32(_) => PrimitiveKind::U32,
			Value::U64(_) => PrimitiveKind::U64,
			Value::I8(_) => PrimitiveKind::I8,
			Value::I16(_) => PrimitiveKind::I16,
			Value::I32(_) => PrimitiveKind::I32,
			Value::I64(_) => PrimitiveKind::I64,
			Value::F32(_) => PrimitiveKind::F32,
			Value::F64(_) => PrimitiveKind::F64,
			Value::Char(_) => PrimitiveKind::Char,
			Value::String(_) => PrimitiveKind::String,
			Value::Complex(_) | Value::Array(_) => return None,
		};
		Some(kind)
	}

	/// Get the [`FieldType`] this value belongs to.
	pub fn field_type(&self) -> FieldType {
		match self {
			Value::Complex(complex) => FieldType::Complex(complex.definition().clone()),
			Value::Array(array) => FieldType::array_of(array.element_type().clone()),
			_ => match self.primitive_kind() {
				Some(kind) => FieldType::Primitive(kind),
				None => unreachable!(),
			},
		}
	}

	/// Name of value's type, for diagnostics.
	pub fn type_name(&self) -> String {
		self.field_type().to_string()
	}

	/// Append encoding of value to `out`.
	pub fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
		match self {
			Value::Bool(value) => value.encode(out),
			Value::U8(value) => value.encode(out),
			Value::U16(value) => value.encode(out),
			Value::U32(value) => value.encode(out),
			Value::U64(value) => value.encode(out),
			Value::I8(value) => value.encode(out),
			Value::I16(value) => value.encode(out),
			Value::I32(value) => value.encode(out),
			Value::I64(value) => value.encode(out),
			Value::F32(value) => value.encode(out),
			Value::F64(value) => value.encode(out),
			Value::Char(value) => value.encode(out),
			Value::String(value) => encode_str(value, out),
			Value::Complex(value) => value.encode(out),
			Value::Array(value) => value.encode(out),
		}
	}

	pub fn encoded_len(&self) -> usize {
		match self {
			Value::Bool(_) | Value::U8(_) | Value::I8(_) | Value::Char(_) => 1,
			Value::U16(_) | Value::I16(_) => 2,
			Value::U32(_) | Value::I32(_) | Value::F32(_) => 4,
			Value::U64(_) | Value::I64(_) | Value::F64(_) => 8,
			Value::String(value) => value.encoded_len(),
			Value::Complex(value) => value.encoded_len(),
			Value::Array(value) => value.encoded_len(),
		}
	}

	/// Serialize value to a new buffer.
	pub fn serialize(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(self.encoded_len());
		self.encode(&mut out)?;
		log::trace!("serialized {} into {} bytes", self.type_name(), out.len());
		Ok(out)
	}
}

/// Renders like the equivalent Rust value's `Debug`. Complex values and
/// arrays use their own `Display`.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Bool(value) => write!(f, "{:?}", value),
			Value::U8(value) => write!(f, "{:?}", value),
			Value::U16(value) => write!(f, "{:?}", value),
			Value::U32(value) => write!(f, "{:?}", value),
			Value::U64(value) => write!(f, "{:?}", value),
			Value::I8(value) => write!(f, "{:?}", value),
			Value::I16(value) => write!(f, "{:?}", value),
			Value::I32(value) => write!(f, "{:?}", value),
			Value::I64(value) => write!(f, "{:?}", value),
			Value::F32(value) => write!(f, "{:?}", value),
			Value::F64(value) => write!(f, "{:?}", value),
			Value::Char(value) => write!(f, "{:?}", value),
			Value::String(value) => write!(f, "{:?}", value),
			Value::Complex(value) => fmt::Display::fmt(value, f),
			Value::Array(value) => fmt::Display::fmt(value, f),
		}
	}
}

macro_rules! impl_from {
	($ty:ty, $variant:ident) => {
		impl From<$ty> for Value {
			#[inline]
			fn from(value: $ty) -> Self {
				Value::$variant(value)
			}
		}
	};
}

impl_from!(bool, Bool);
impl_from!(u8, U8);
impl_from!(u16, U16);
impl_from!(u32, U32);
impl_from!(u64, U64);
impl_from!(i8, I8);
impl_from!(i16, I16);
impl_from!(i32, I32);
impl_from!(i64, I64);
impl_from!(f32, F32);
impl_from!(f64, F64);
impl_from!(char, Char);
impl_from!(String, String);
impl_from!(ComplexValue, Complex);
impl_from!(ArrayValue, Array);

impl From<&str> for Value {
	#[inline]
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

/// Instance of a [`ComplexTypeDef`].
///
/// Always holds a value of the declared type for every field, in declaration
/// order.
#[derive(Clone, Debug)]
pub struct ComplexValue {
	def: Arc<ComplexTypeDef>,
	values: Vec<Value>,
}

impl ComplexValue {
	/// Create new [`ComplexValue`] from field values given by name, in any
	/// order.
	///
	/// Every field must be given exactly once. Fails with
	/// [`Error::UnknownField`], [`Error::DuplicateField`],
	/// [`Error::MissingField`] or [`Error::Type`].
	pub fn new<I, N, V>(def: &Arc<ComplexTypeDef>, fields: I) -> Result<Self>
	where
		I: IntoIterator<Item = (N, V)>,
		N: AsRef<str>,
		V: Into<Value>,
	{
		let mut slots: Vec<Option<Value>> = vec![None; def.fields().len()];
		for (name, value) in fields {
			let name = name.as_ref();
			let index = def
				.field_index(name)
				.ok_or_else(|| Error::UnknownField {
					type_name: def.name().to_string(),
					field: name.to_string(),
				})?;

			let value = value.into();
			def.fields()[index].ty().check(&value)?;

			let slot = &mut slots[index];
			if slot.is_some() {
				return Err(Error::DuplicateField {
					type_name: def.name().to_string(),
					field: name.to_string(),
				});
			}
			*slot = Some(value);
		}

		let values = slots
			.into_iter()
			.zip(def.fields())
			.map(|(slot, field)| {
				slot.ok_or_else(|| Error::MissingField {
					type_name: def.name().to_string(),
					field: field.name().to_string(),
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Self::from_parts(def.clone(), values))
	}

	/// Caller must ensure `values` match `def`'s fields.
	pub(crate) fn from_parts(def: Arc<ComplexTypeDef>, values: Vec<Value>) -> Self {
		debug_assert_eq!(def.fields().len(), values.len());
		Self { def, values }
	}

	#[inline]
	pub fn definition(&self) -> &Arc<ComplexTypeDef> {
		&self.def
	}

	#[inline]
	pub fn type_name(&self) -> &str {
		self.def.name()
	}

	/// Get value of field `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.def.field_index(name).map(|index| &self.values[index])
	}

	/// Replace value of field `name`. Returns previous value.
	pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<Value> {
		let index = self.def.field_index(name).ok_or_else(|| Error::UnknownField {
			type_name: self.def.name().to_string(),
			field: name.to_string(),
		})?;

		let value = value.into();
		self.def.fields()[index].ty().check(&value)?;
		Ok(std::mem::replace(&mut self.values[index], value))
	}

	/// Iterate over fields as `(name, value)` pairs, in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.def
			.fields()
			.iter()
			.map(|field| field.name())
			.zip(&self.values)
	}

	pub fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
		for value in &self.values {
			value.encode(out)?;
		}
		Ok(())
	}

	pub fn encoded_len(&self) -> usize {
		self.values.iter().map(Value::encoded_len).sum()
	}

	/// Serialize to a new buffer.
	pub fn serialize(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(self.encoded_len());
		self.encode(&mut out)?;
		log::trace!("serialized {} into {} bytes", self.def.name(), out.len());
		Ok(out)
	}
}

/// Values are equal if they're of the same type and all fields are equal.
impl PartialEq for ComplexValue {
	fn eq(&self, other: &Self) -> bool {
		(Arc::ptr_eq(&self.def, &other.def) || self.def == other.def)
			&& self.values == other.values
	}
}

/// Renders as `Name(field=value, ...)`.
impl fmt::Display for ComplexValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.def.name())?;
		for (index, (name, value)) in self.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}={}", name, value)?;
		}
		f.write_str(")")
	}
}

/// Homogeneous sequence of [`Value`]s, all of one element type.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayValue {
	element: FieldType,
	items: Vec<Value>,
}

impl ArrayValue {
	/// Create new empty [`ArrayValue`].
	pub fn new(element: impl Into<FieldType>) -> Self {
		Self {
			element: element.into(),
			items: Vec::new(),
		}
	}

	/// Create new [`ArrayValue`] containing `items`.
	///
	/// Fails with [`Error::Type`] if any item is not of type `element`.
	pub fn with_items<I, V>(element: impl Into<FieldType>, items: I) -> Result<Self>
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		let mut array = Self::new(element);
		array.extend(items)?;
		Ok(array)
	}

	#[inline]
	pub fn element_type(&self) -> &FieldType {
		&self.element
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[inline]
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.items.get(index)
	}

	#[inline]
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.items.iter()
	}

	#[inline]
	pub fn as_slice(&self) -> &[Value] {
		&self.items
	}

	/// Add element to end.
	///
	/// Fails with [`Error::Type`] if `item` is not of array's element type.
	pub fn append(&mut self, item: impl Into<Value>) -> Result<()> {
		let item = item.into();
		self.element.check(&item)?;
		self.items.push(item);
		Ok(())
	}

	/// Insert element at `index`.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn insert(&mut self, index: usize, item: impl Into<Value>) -> Result<()> {
		let item = item.into();
		self.element.check(&item)?;
		self.items.insert(index, item);
		Ok(())
	}

	/// Add elements to end.
	///
	/// Either all items are added, or none are.
	pub fn extend<I, V>(&mut self, items: I) -> Result<()>
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		let items = items
			.into_iter()
			.map(|item| {
				let item = item.into();
				self.element.check(&item)?;
				Ok(item)
			})
			.collect::<Result<Vec<_>>>()?;
		self.items.extend(items);
		Ok(())
	}

	/// Remove and return last element.
	///
	/// Fails with [`Error::Empty`] if array has no elements.
	pub fn pop(&mut self) -> Result<Value> {
		self.items.pop().ok_or(Error::Empty)
	}

	pub fn encode(&self, out: &mut Vec<u8>) -> Result<()> {
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

	/// Decode an array of `element` values from front of `cursor`.
	pub fn decode(element: &FieldType, cursor: &mut Cursor<'_>) -> Result<Self> {
		let count = cursor.read_u8()? as usize;
		let mut items = Vec::with_capacity(count);
		for _ in 0..count {
			items.push(element.decode(cursor)?);
		}
		Ok(Self {
			element: element.clone(),
			items,
		})
	}

	pub fn encoded_len(&self) -> usize {
		1 + self.items.iter().map(Value::encoded_len).sum::<usize>()
	}

	/// Serialize to a new buffer.
	pub fn serialize(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(self.encoded_len());
		self.encode(&mut out)?;
		Ok(out)
	}
}

impl PartialEq<[Value]> for ArrayValue {
	fn eq(&self, other: &[Value]) -> bool {
		self.items == other
	}
}

impl PartialEq<Vec<Value>> for ArrayValue {
	fn eq(&self, other: &Vec<Value>) -> bool {
		self.items == *other
	}
}

impl<'a> IntoIterator for &'a ArrayValue {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

/// Renders as `[a, b, c]`.
impl fmt::Display for ArrayValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (index, item) in self.items.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", item)?;
		}
		f.write_str("]")
	}
}
