use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, DataStruct, Fields, Generics, Ident, Type};

use crate::Options;

pub fn derive_struct(
	data: DataStruct,
	ident: Ident,
	options: Options,
	generics: Generics,
) -> TokenStream {
	let fields = match data.fields {
		Fields::Named(fields) => fields.named.into_iter().collect::<Vec<_>>(),
		Fields::Unit => vec![],
		Fields::Unnamed(_) => {
			panic!("`#[derive(ComplexType)]` is only valid on structs with named fields")
		}
	};

	let field_idents = fields
		.iter()
		.map(|field| field.ident.clone().expect("Missing field name"))
		.collect::<Vec<Ident>>();
	let field_types = fields
		.iter()
		.map(|field| field.ty.clone())
		.collect::<Vec<Type>>();
	// `r#type` is field `type`
	let field_names = field_idents
		.iter()
		.map(|ident| ident.unraw().to_string())
		.collect::<Vec<_>>();

	let name = options.name.unwrap_or_else(|| ident.unraw().to_string());
	let type_id = match options.id {
		Some(id) => quote! { ::std::option::Option::Some(#id) },
		None => quote! { ::std::option::Option::None },
	};

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	// Fields in a struct expression are evaluated in the order written,
	// so `decode` consumes fields in declaration order.
	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_schema::Codec for #ident #type_generics #where_clause {
			fn encode(&self, out: &mut ::std::vec::Vec<u8>) -> ::ser_schema::Result<()> {
				#(::ser_schema::Codec::encode(&self.#field_idents, out)?;)*
				::std::result::Result::Ok(())
			}

			fn decode(cursor: &mut ::ser_schema::Cursor<'_>) -> ::ser_schema::Result<Self> {
				::std::result::Result::Ok(Self {
					#(#field_idents: <#field_types as ::ser_schema::Codec>::decode(cursor)?,)*
				})
			}

			fn encoded_len(&self) -> usize {
				0 #(+ ::ser_schema::Codec::encoded_len(&self.#field_idents))*
			}

			fn field_type() -> ::ser_schema::schema::FieldType {
				::ser_schema::schema::FieldType::Complex(::std::sync::Arc::new(
					<Self as ::ser_schema::ComplexType>::definition(),
				))
			}
		}

		#[automatically_derived]
		impl #impl_generics ::ser_schema::ComplexType for #ident #type_generics #where_clause {
			const NAME: &'static str = #name;
			const TYPE_ID: ::std::option::Option<&'static str> = #type_id;

			fn fields() -> ::std::vec::Vec<::ser_schema::schema::FieldDescriptor> {
				::std::vec![
					#(::ser_schema::schema::FieldDescriptor::new(
						#field_names,
						<#field_types as ::ser_schema::Codec>::field_type(),
					),)*
				]
			}
		}

		#[automatically_derived]
		impl #impl_generics ::std::fmt::Debug for #ident #type_generics #where_clause {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				::ser_schema::fmt_fields(
					f,
					#name,
					&[#((#field_names, &self.#field_idents as &dyn ::std::fmt::Debug),)*],
				)
			}
		}

		#[automatically_derived]
		impl #impl_generics ::std::fmt::Display for #ident #type_generics #where_clause {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				::std::fmt::Debug::fmt(self, f)
			}
		}
	}
}
