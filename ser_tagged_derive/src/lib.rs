use proc_macro2::TokenStream;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, GenericParam, Generics};

mod structs;
use structs::derive_struct;
mod enums;
use enums::derive_enum;

/// Derive `Serialize` and `Deserialize`.
///
/// * Structs are serialized as an `Object` of named members and also get a
///   `Composite` impl. Mark a field `#[codec(ignore)]` to leave it out.
///   Type must implement `Default`.
/// * Fieldless enums are serialized as an `Enum` of their discriminant.
#[proc_macro_derive(Codec, attributes(codec))]
pub fn codec(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	codec_impl(input).into()
}

fn codec_impl(input: DeriveInput) -> TokenStream {
	let generics = add_trait_bounds(input.generics);

	match input.data {
		Data::Struct(data) => derive_struct(data, input.ident, generics),
		Data::Enum(data) => derive_enum(data, input.ident, generics),
		Data::Union(_) => panic!("Deriving `Codec` on unions is not supported"),
	}
}

/// Add `Serialize + Deserialize + 'static` bound to every type param.
fn add_trait_bounds(mut generics: Generics) -> Generics {
	for param in &mut generics.params {
		if let GenericParam::Type(type_param) = param {
			type_param
				.bounds
				.push(parse_quote!(::ser_tagged::Serialize));
			type_param
				.bounds
				.push(parse_quote!(::ser_tagged::Deserialize));
			type_param.bounds.push(parse_quote!('static));
		}
	}
	generics
}
