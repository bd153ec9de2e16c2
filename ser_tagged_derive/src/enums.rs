use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Generics, Ident, LitStr};

pub fn derive_enum(data: DataEnum, ident: Ident, generics: Generics) -> TokenStream {
	let variants = data
		.variants
		.into_iter()
		.map(|variant| {
			match variant.fields {
				Fields::Unit => variant.ident,
				_ => panic!(
					"Deriving `Codec` on enums is only supported for fieldless enums. Variant `{}` has fields",
					variant.ident
				),
			}
		})
		.collect::<Vec<_>>();

	// Discriminants are serialized as `i32`. Reject any which would be truncated.
	let range_messages = variants
		.iter()
		.map(|variant| {
			LitStr::new(
				&format!("Discriminant of `{}::{}` does not fit in `i32`", ident, variant),
				variant.span(),
			)
		})
		.collect::<Vec<_>>();

	// `match *self {}` is required for enums with no variants
	let serialize_body = if variants.len() == 0 {
		quote! { match *self {} }
	} else {
		quote! {
			let value = match self {
				#(Self::#variants => Self::#variants as i32,)*
			};
			serializer.serialize_enum(value)
		}
	};

	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

	quote! {
		const _: () = {
			#(
				::std::assert!(
					#ident::#variants as i128 == #ident::#variants as i32 as i128,
					#range_messages
				);
			)*
		};

		#[automatically_derived]
		impl #impl_generics ::ser_tagged::Serialize for #ident #type_generics #where_clause {
			fn serialize(
				&self,
				serializer: &mut ::ser_tagged::Serializer,
			) -> ::ser_tagged::Result<()> {
				#serialize_body
			}
		}

		#[automatically_derived]
		impl #impl_generics ::ser_tagged::Deserialize for #ident #type_generics #where_clause {
			fn deserialize_after_marker(
				marker: ::ser_tagged::Marker,
				deserializer: &mut ::ser_tagged::Deserializer<'_>,
			) -> ::ser_tagged::Result<Self> {
				let value = deserializer.read_enum::<Self>(marker)?;
				#(
					if value == Self::#variants as i32 {
						return ::std::result::Result::Ok(Self::#variants);
					}
				)*
				::std::result::Result::Err(deserializer.unknown_variant::<Self>(value))
			}
		}
	}
}
