//! Runtime schemas.
//!
//! Types declared at runtime, rather than with `#[derive(ComplexType)]`.
//! A [`FieldType`] is a closed set of codecs: a primitive, a complex type, or
//! an array of another [`FieldType`]. Values of these types are [`Value`]s,
//! which are type checked when they're put into a [`ComplexValue`] or
//! [`ArrayValue`].
//!
//! Runtime and derived types with the same layout produce identical bytes.
//!
//! ```
//! use ser_schema::schema::{ComplexTypeDef, ComplexValue, FieldType, PrimitiveKind};
//!
//! let point = ComplexTypeDef::builder("Point")
//! 	.field("x", FieldType::Primitive(PrimitiveKind::U8))
//! 	.field("y", FieldType::Primitive(PrimitiveKind::U8))
//! 	.build()
//! 	.unwrap();
//!
//! let value = ComplexValue::new(&point, [("x", 1u8), ("y", 2u8)]).unwrap();
//! let bytes = value.serialize().unwrap();
//! assert_eq!(bytes, vec![1, 2]);
//! assert_eq!(point.deserialize(&bytes).unwrap(), value);
//! assert_eq!(value.to_string(), "Point(x=1, y=2)");
//! ```

use std::{collections::HashSet, fmt, sync::Arc};

use crate::{Codec, Cursor, DecodeOptions, Error, Result};

mod value;
pub use value::{ArrayValue, ComplexValue, Value};

/// Primitive types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
	Bool,
	U8,
	U16,
	U32,
	U64,
	I8,
	I16,
	I32,
	I64,
	F32,
	F64,
	Char,
	String,
}

impl PrimitiveKind {
	pub fn name(self) -> &'static str {
		match self {
			PrimitiveKind::Bool => "bool",
			PrimitiveKind::U8 => "u8",
			PrimitiveKind::U16 => "u16",
			PrimitiveKind::U32 => "u32",
			PrimitiveKind::U64 => "u64",
			PrimitiveKind::I8 => "i8",
			PrimitiveKind::I16 => "i16",
			PrimitiveKind::I32 => "i32",
			PrimitiveKind::I64 => "i64",
			PrimitiveKind::F32 => "f32",
			PrimitiveKind::F64 => "f64",
			PrimitiveKind::Char => "char",
			PrimitiveKind::String => "string",
		}
	}

	/// Range of an integer kind. `None` for non-integer kinds.
	pub fn int_range(self) -> Option<(i128, i128)> {
		let range = match self {
			PrimitiveKind::U8 => (0, u8::MAX as i128),
			PrimitiveKind::U16 => (0, u16::MAX as i128),
			PrimitiveKind::U32 => (0, u32::MAX as i128),
			PrimitiveKind::U64 => (0, u64::MAX as i128),
			PrimitiveKind::I8 => (i8::MIN as i128, i8::MAX as i128),
			PrimitiveKind::I16 => (i16::MIN as i128, i16::MAX as i128),
			PrimitiveKind::I32 => (i32::MIN as i128, i32::MAX as i128),
			PrimitiveKind::I64 => (i64::MIN as i128, i64::MAX as i128),
			_ => return None,
		};
		Some(range)
	}

	/// Decode a value of this kind, using the same codec as the Rust type.
	pub fn decode(self, cursor: &mut Cursor<'_>) -> Result<Value> {
		let value = match self {
			PrimitiveKind::Bool => Value::Bool(bool::decode(cursor)?),
			PrimitiveKind::U8 => Value::U8(u8::decode(cursor)?),
			PrimitiveKind::U16 => Value::U16(u16::decode(cursor)?),
			PrimitiveKind::U32 => Value::U32(u32::decode(cursor)?),
			PrimitiveKind::U64 => Value::U64(u64::decode(cursor)?),
			PrimitiveKind::I8 => Value::I8(i8::decode(cursor)?),
			PrimitiveKind::I16 => Value::I16(i16::decode(cursor)?),
			PrimitiveKind::I32 => Value::I32(i32::decode(cursor)?),
			PrimitiveKind::I64 => Value::I64(i64::decode(cursor)?),
			PrimitiveKind::F32 => Value::F32(f32::decode(cursor)?),
			PrimitiveKind::F64 => Value::F64(f64::decode(cursor)?),
			PrimitiveKind::Char => Value::Char(char::decode(cursor)?),
			PrimitiveKind::String => Value::String(String::decode(cursor)?),
		};
		Ok(value)
	}
}

impl fmt::Display for PrimitiveKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Type of a field or array element.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldType {
	Primitive(PrimitiveKind),
	Complex(Arc<ComplexTypeDef>),
	Array(Box<FieldType>),
}

impl FieldType {
	/// Shortcut for `FieldType::Array(Box::new(element))`.
	pub fn array_of(element: FieldType) -> Self {
		FieldType::Array(Box::new(element))
	}

	/// Check if `value` is of this type.
	pub fn accepts(&self, value: &Value) -> bool {
		match (self, value) {
			(FieldType::Primitive(kind), value) => value.primitive_kind() == Some(*kind),
			(FieldType::Complex(def), Value::Complex(complex)) => {
				Arc::ptr_eq(def, complex.definition()) || **def == **complex.definition()
			}
			(FieldType::Array(element), Value::Array(array)) => **element == *array.element_type(),
			_ => false,
		}
	}

	/// Fail with [`Error::Type`] if `value` is not of this type.
	pub fn check(&self, value: &Value) -> Result<()> {
		if self.accepts(value) {
			Ok(())
		} else {
			log::debug!("rejected {} value for {} slot", value.type_name(), self);
			Err(Error::mismatch(self, value.type_name()))
		}
	}

	/// Decode a value of this type from front of `cursor`.
	pub fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Value> {
		match self {
			FieldType::Primitive(kind) => kind.decode(cursor),
			FieldType::Complex(def) => Ok(Value::Complex(def.decode(cursor)?)),
			FieldType::Array(element) => Ok(Value::Array(ArrayValue::decode(element, cursor)?)),
		}
	}

	/// Deserialize a value which must occupy the whole of `bytes`.
	pub fn deserialize(&self, bytes: &[u8]) -> Result<Value> {
		self.deserialize_with(bytes, &DecodeOptions::default())
	}

	pub fn deserialize_with(&self, bytes: &[u8], options: &DecodeOptions) -> Result<Value> {
		log::trace!("deserializing {} from {} bytes", self, bytes.len());
		let mut cursor = Cursor::new(bytes);
		let value = self.decode(&mut cursor)?;
		cursor.finish(options)?;
		Ok(value)
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldType::Primitive(kind) => f.write_str(kind.name()),
			FieldType::Complex(def) => f.write_str(def.name()),
			FieldType::Array(element) => write!(f, "Array[{}]", element),
		}
	}
}

impl From<PrimitiveKind> for FieldType {
	fn from(kind: PrimitiveKind) -> Self {
		FieldType::Primitive(kind)
	}
}

impl From<Arc<ComplexTypeDef>> for FieldType {
	fn from(def: Arc<ComplexTypeDef>) -> Self {
		FieldType::Complex(def)
	}
}

/// A named, typed slot in a [`ComplexTypeDef`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
	name: String,
	ty: FieldType,
}

impl FieldDescriptor {
	pub fn new(name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
		Self {
			name: name.into(),
			ty: ty.into(),
		}
	}

	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn ty(&self) -> &FieldType {
		&self.ty
	}
}

/// Definition of a complex type: a name, an optional type ID, and an ordered
/// list of fields.
///
/// Field order is the order of fields in encoded output.
///
/// Type ID is metadata for an external registry. It is not encoded, and not
/// used to look types up.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexTypeDef {
	name: String,
	type_id: Option<String>,
	fields: Vec<FieldDescriptor>,
}

impl ComplexTypeDef {
	/// Create new [`ComplexTypeDef`].
	///
	/// Fails with [`Error::DuplicateField`] if 2 fields have the same name.
	pub fn new(
		name: impl Into<String>,
		type_id: Option<String>,
		fields: Vec<FieldDescriptor>,
	) -> Result<Self> {
		let name = name.into();
		let mut seen = HashSet::with_capacity(fields.len());
		for field in &fields {
			if !seen.insert(field.name()) {
				return Err(Error::DuplicateField {
					type_name: name,
					field: field.name().to_string(),
				});
			}
		}

		Ok(Self {
			name,
			type_id,
			fields,
		})
	}

	/// Rust struct field names are already unique, so no check needed.
	pub(crate) fn from_derived(
		name: &str,
		type_id: Option<&str>,
		fields: Vec<FieldDescriptor>,
	) -> Self {
		Self {
			name: name.to_string(),
			type_id: type_id.map(str::to_string),
			fields,
		}
	}

	pub fn builder(name: impl Into<String>) -> ComplexTypeDefBuilder {
		ComplexTypeDefBuilder {
			name: name.into(),
			type_id: None,
			fields: Vec::new(),
		}
	}

	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[inline]
	pub fn type_id(&self) -> Option<&str> {
		self.type_id.as_deref()
	}

	#[inline]
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|field| field.name() == name)
	}

	pub fn field_index(&self, name: &str) -> Option<usize> {
		self.fields.iter().position(|field| field.name() == name)
	}

	/// Decode a value of this type from front of `cursor`.
	pub fn decode(self: &Arc<Self>, cursor: &mut Cursor<'_>) -> Result<ComplexValue> {
		let values = self
			.fields
			.iter()
			.map(|field| field.ty().decode(cursor))
			.collect::<Result<Vec<_>>>()?;
		Ok(ComplexValue::from_parts(self.clone(), values))
	}

	/// Deserialize a value which must occupy the whole of `bytes`.
	pub fn deserialize(self: &Arc<Self>, bytes: &[u8]) -> Result<ComplexValue> {
		self.deserialize_with(bytes, &DecodeOptions::default())
	}

	pub fn deserialize_with(
		self: &Arc<Self>,
		bytes: &[u8],
		options: &DecodeOptions,
	) -> Result<ComplexValue> {
		log::trace!("deserializing {} from {} bytes", self.name, bytes.len());
		let mut cursor = Cursor::new(bytes);
		let value = self.decode(&mut cursor)?;
		cursor.finish(options)?;
		Ok(value)
	}
}

/// Builder for [`ComplexTypeDef`].
#[derive(Clone, Debug)]
pub struct ComplexTypeDefBuilder {
	name: String,
	type_id: Option<String>,
	fields: Vec<FieldDescriptor>,
}

impl ComplexTypeDefBuilder {
	/// Set type ID.
	pub fn id(mut self, type_id: impl Into<String>) -> Self {
		self.type_id = Some(type_id.into());
		self
	}

	/// Add a field after those already added.
	pub fn field(mut self, name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
		self.fields.push(FieldDescriptor::new(name, ty));
		self
	}

	pub fn build(self) -> Result<Arc<ComplexTypeDef>> {
		ComplexTypeDef::new(self.name, self.type_id, self.fields).map(Arc::new)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;

	#[test]
	fn duplicate_field() {
		let err = ComplexTypeDef::builder("Dup")
			.field("a", PrimitiveKind::U8)
			.field("a", PrimitiveKind::Bool)
			.build()
			.unwrap_err();
		assert_eq!(
			err,
			Error::DuplicateField {
				type_name: "Dup".to_string(),
				field: "a".to_string()
			}
		);
		assert_eq!(err.kind(), ErrorKind::Type);
	}

	#[test]
	fn type_id_is_metadata() {
		let with_id = ComplexTypeDef::builder("Flag")
			.id("flag")
			.field("on", PrimitiveKind::Bool)
			.build()
			.unwrap();
		assert_eq!(with_id.type_id(), Some("flag"));
		assert_eq!(with_id.field_index("on"), Some(0));
		assert!(with_id.field("off").is_none());

		let value = ComplexValue::new(&with_id, [("on", true)]).unwrap();
		assert_eq!(value.serialize().unwrap(), vec![0x01]);
	}

	#[test]
	fn display_types() {
		let inner = ComplexTypeDef::builder("Inner").build().unwrap();
		assert_eq!(FieldType::Primitive(PrimitiveKind::U16).to_string(), "u16");
		assert_eq!(FieldType::Complex(inner.clone()).to_string(), "Inner");
		assert_eq!(
			FieldType::array_of(FieldType::array_of(inner.into())).to_string(),
			"Array[Array[Inner]]"
		);
	}

	#[test]
	fn int_ranges() {
		assert_eq!(PrimitiveKind::U8.int_range(), Some((0, 255)));
		assert_eq!(PrimitiveKind::I16.int_range(), Some((-32768, 32767)));
		assert_eq!(PrimitiveKind::String.int_range(), None);
	}
}
