#[cfg(feature = "derive")]
pub use ser_tagged_derive::Codec;

mod cache;
pub use cache::AccessorCache;

mod composite;
pub use composite::{deserialize_composite, serialize_composite, Accessor, Composite, Member};

mod deserializer;
pub use deserializer::Deserializer;

mod error;
pub use error::{Error, Result};

mod impls;
pub use impls::Timestamp;

mod marker;
pub use marker::Marker;

pub mod raw;

mod serialize;
pub use serialize::{Deserialize, Serialize};

mod serializer;
pub use serializer::{CountSlot, Serializer};

/// Serialize a value to bytes.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
	let mut serializer = Serializer::new();
	serializer.serialize_value(value)?;
	let mut vec = serializer.into_vec();
	vec.shrink_to_fit();
	Ok(vec)
}

/// Deserialize a value of type `T` from bytes.
///
/// Returns `Ok(None)` if `bytes` is empty.
/// Any bytes following the value are ignored.
pub fn deserialize<T: Deserialize>(bytes: &[u8]) -> Result<Option<T>> {
	if bytes.is_empty() {
		return Ok(None);
	}
	Deserializer::new(bytes).deserialize_value().map(Some)
}

/// Deserialize a value of type `T` starting at `*offset` in `bytes`.
///
/// On success, `offset` is advanced to the byte after the value.
/// On failure, `offset` is left unchanged.
pub fn deserialize_at<T: Deserialize>(bytes: &[u8], offset: &mut usize) -> Result<T> {
	let mut deserializer = Deserializer::at(bytes, *offset);
	let value = deserializer.deserialize_value()?;
	*offset = deserializer.offset();
	Ok(value)
}
