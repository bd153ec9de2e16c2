use crate::{Deserializer, Marker, Result, Serializer};

/// Trait for types which can be serialized.
///
/// Object-safe, so values of different types can be serialized through
/// `&dyn Serialize` (see [`Member`](crate::Member)).
pub trait Serialize {
	/// Write marker and payload for this value.
	fn serialize(&self, serializer: &mut Serializer) -> Result<()>;
}

/// Trait for types which can be deserialized.
///
/// The implementing type is the declared type of the value being read.
/// It decides how the payload is decoded. The marker in the input only selects
/// between the encodings the type accepts.
pub trait Deserialize: Sized {
	/// Read marker and then payload for a value of this type.
	///
	/// Containers and objects count towards the deserializer's nesting limit.
	#[inline]
	fn deserialize(deserializer: &mut Deserializer<'_>) -> Result<Self> {
		let marker = deserializer.read_marker()?;
		deserializer.nested(marker, |deserializer| {
			Self::deserialize_after_marker(marker, deserializer)
		})
	}

	/// Read payload for a value of this type, once `marker` has been consumed.
	///
	/// Implementations should return [`Deserializer::type_mismatch`] for any
	/// marker they do not accept.
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self>;
}
