use crate::{Deserialize, Deserializer, Marker, Result, Serialize, Serializer};

impl<T: Serialize> Serialize for Option<T> {
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		match self {
			Some(value) => value.serialize(serializer),
			None => {
				serializer.push_marker(Marker::Null);
				Ok(())
			}
		}
	}
}

impl<T: Deserialize> Deserialize for Option<T> {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		match marker {
			Marker::Null => Ok(None),
			_ => T::deserialize_after_marker(marker, deserializer).map(Some),
		}
	}
}
