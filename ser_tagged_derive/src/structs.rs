use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{
	ext::IdentExt, parse_quote, spanned::Spanned, DataStruct, Field, Fields, Generics, Ident, Index, LitStr, Meta,
	MetaList, NestedMeta,
};

pub fn derive_struct(data: DataStruct, ident: Ident, mut generics: Generics) -> TokenStream {
	let members: Vec<TokenStream> = match data.fields {
		Fields::Named(fields) => fields
			.named
			.iter()
			.filter(|field| !is_ignored(field))
			.map(|field| {
				let field_name = field.ident.as_ref().expect("Missing field name");
				let name = LitStr::new(&field_name.unraw().to_string(), field_name.span());
				get_member(quote! {#field_name}, name, field)
			})
			.collect(),
		Fields::Unnamed(fields) => fields
			.unnamed
			.iter()
			.enumerate()
			.filter(|(_, field)| !is_ignored(field))
			.map(|(index, field)| {
				let name = LitStr::new(&index.to_string(), field.span());
				let index = Index::from(index);
				get_member(quote! {#index}, name, field)
			})
			.collect(),
		Fields::Unit => vec![],
	};

	// `Composite` requires `Default`. For generic types, that may depend on the
	// type params, so bound it explicitly.
	if generics.params.len() > 0 {
		let (_, type_generics, _) = generics.split_for_impl();
		let self_ty: syn::Type = parse_quote!(#ident #type_generics);
		generics
			.make_where_clause()
			.predicates
			.push(parse_quote!(#self_ty: ::std::default::Default));
	}

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics ::ser_tagged::Composite for #ident #type_generics #where_clause {
			fn members() -> ::std::vec::Vec<::ser_tagged::Member<Self>> {
				::std::vec![#(#members),*]
			}
		}

		#[automatically_derived]
		impl #impl_generics ::ser_tagged::Serialize for #ident #type_generics #where_clause {
			fn serialize(
				&self,
				serializer: &mut ::ser_tagged::Serializer,
			) -> ::ser_tagged::Result<()> {
				::ser_tagged::serialize_composite(self, serializer)
			}
		}

		#[automatically_derived]
		impl #impl_generics ::ser_tagged::Deserialize for #ident #type_generics #where_clause {
			fn deserialize_after_marker(
				marker: ::ser_tagged::Marker,
				deserializer: &mut ::ser_tagged::Deserializer<'_>,
			) -> ::ser_tagged::Result<Self> {
				::ser_tagged::deserialize_composite(marker, deserializer)
			}
		}
	}
}

/// Get `Member::new(...)` expression for a field.
fn get_member(field_access: TokenStream, name: LitStr, field: &Field) -> TokenStream {
	let ty = &field.ty;
	quote_spanned! {field.span()=>
		::ser_tagged::Member::<Self>::new(
			#name,
			::std::any::type_name::<#ty>(),
			|value| &value.#field_access,
			|value, deserializer| {
				value.#field_access = ::ser_tagged::Deserialize::deserialize(deserializer)?;
				::std::result::Result::Ok(())
			},
		)
	}
}

/// Check if field has `#[codec(ignore)]` attribute.
fn is_ignored(field: &Field) -> bool {
	let attrs = field
		.attrs
		.iter()
		.filter(|attr| attr.path.is_ident("codec"))
		.map(|attr| attr.parse_meta())
		.collect::<Vec<_>>();

	let mut ignored = false;
	for attr in attrs {
		match attr {
			Ok(Meta::List(MetaList { nested, .. })) => {
				for part in nested {
					match part {
						NestedMeta::Meta(Meta::Path(path)) if path.is_ident("ignore") => {
							ignored = true;
						}
						_ => panic!("Unknown `#[codec]` option. Only `#[codec(ignore)]` is supported"),
					}
				}
			}
			_ => panic!("`#[codec]` needs an option e.g. `#[codec(ignore)]`"),
		}
	}
	ignored
}
