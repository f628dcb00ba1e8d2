use std::fmt;

use crate::{
	schema::{ComplexTypeDef, FieldDescriptor},
	Codec,
};

/// Trait for record types made up of named fields.
///
/// Usually implemented with `#[derive(ComplexType)]`, which also implements
/// [`Codec`] by encoding each field in declaration order, and `Debug` and
/// `Display` rendering as `Name(field=value, ...)`. So don't also derive
/// `Debug`.
///
/// ```
/// use ser_schema::{Codec, ComplexType};
///
/// #[derive(ComplexType, PartialEq)]
/// #[complex(id = "point")]
/// struct Point {
/// 	x: u8,
/// 	y: u8,
/// }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(point.serialize().unwrap(), vec![1, 2]);
/// assert_eq!(point.to_string(), "Point(x=1, y=2)");
/// assert_eq!(Point::TYPE_ID, Some("point"));
/// ```
pub trait ComplexType: Codec {
	/// Name of the type.
	const NAME: &'static str;

	/// Optional type identifier, for use by an external type registry.
	/// Not encoded in output.
	const TYPE_ID: Option<&'static str> = None;

	/// Field descriptors, in declaration order.
	fn fields() -> Vec<FieldDescriptor>;

	/// Runtime definition of this type.
	fn definition() -> ComplexTypeDef {
		ComplexTypeDef::from_derived(Self::NAME, Self::TYPE_ID, Self::fields())
	}
}

/// Write `Name(field=value, ...)` for a complex value, using each field's
/// `Debug` form.
///
/// Used by `#[derive(ComplexType)]`.
pub fn fmt_fields(
	f: &mut fmt::Formatter<'_>,
	name: &str,
	fields: &[(&str, &dyn fmt::Debug)],
) -> fmt::Result {
	write!(f, "{}(", name)?;
	for (index, (field_name, value)) in fields.iter().enumerate() {
		if index > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{}={:?}", field_name, value)?;
	}
	f.write_str(")")
}
