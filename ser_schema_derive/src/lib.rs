use proc_macro2::TokenStream;
use syn::{
	parse_macro_input, parse_quote, Attribute, Data, DeriveInput, GenericParam, Generics, Lit, Meta,
	MetaList, MetaNameValue, NestedMeta,
};

mod structs;
use structs::derive_struct;

#[proc_macro_derive(ComplexType, attributes(complex))]
pub fn complex_type(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	complex_type_impl(input).into()
}

fn complex_type_impl(input: DeriveInput) -> TokenStream {
	let options = get_options(&input.attrs);
	let generics = add_trait_bounds(input.generics);

	match input.data {
		Data::Struct(data) => derive_struct(data, input.ident, options, generics),
		Data::Enum(_) => panic!("Deriving `ComplexType` on enums not supported"),
		Data::Union(_) => panic!("Deriving `ComplexType` on unions not supported"),
	}
}

/// Options from `#[complex(...)]` attribute.
#[derive(Default)]
pub(crate) struct Options {
	/// Type name. Defaults to struct's name.
	pub name: Option<String>,
	/// Type ID.
	pub id: Option<String>,
}

fn get_options(attrs: &[Attribute]) -> Options {
	let mut options = Options::default();

	for attr in attrs.iter().filter(|attr| attr.path.is_ident("complex")) {
		let nested = match attr.parse_meta() {
			Ok(Meta::List(MetaList { nested, .. })) => nested,
			_ => panic!("`#[complex]` needs a list e.g. `#[complex(id = \"my-type\")]`"),
		};

		for item in nested {
			let (path, value) = match item {
				NestedMeta::Meta(Meta::NameValue(MetaNameValue {
					path,
					lit: Lit::Str(lit),
					..
				})) => (path, lit.value()),
				_ => panic!("Malformed `complex` attr. Expected e.g. `#[complex(id = \"my-type\")]`"),
			};

			let slot = if path.is_ident("id") {
				&mut options.id
			} else if path.is_ident("name") {
				&mut options.name
			} else {
				panic!("Unrecognised `#[complex]` option. Valid options are 'id', 'name'");
			};
			if slot.is_some() {
				panic!("Each `#[complex]` option can only be set once");
			}
			*slot = Some(value);
		}
	}

	options
}

/// Add `Codec + Debug` bound to all type params
fn add_trait_bounds(mut generics: Generics) -> Generics {
	for param in &mut generics.params {
		if let GenericParam::Type(type_param) = param {
			type_param.bounds.push(parse_quote!(::ser_schema::Codec));
			type_param.bounds.push(parse_quote!(::std::fmt::Debug));
		}
	}
	generics
}
