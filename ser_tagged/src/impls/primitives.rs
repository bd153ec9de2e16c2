use std::borrow::Cow;

use crate::{Deserialize, Deserializer, Marker, Result, Serialize, Serializer};

/// Implement `Serialize` + `Deserialize` for a fixed-width number.
///
/// First marker is written. Deserializing accepts any of the markers listed.
macro_rules! impl_number {
	($ty:ty, $marker:ident $(| $alt:ident)*) => {
		impl Serialize for $ty {
			#[inline]
			fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
				serializer.push_marker(Marker::$marker);
				serializer.push_raw(*self);
				Ok(())
			}
		}

		impl Deserialize for $ty {
			#[inline]
			fn deserialize_after_marker(
				marker: Marker,
				deserializer: &mut Deserializer<'_>,
			) -> Result<Self> {
				match marker {
					Marker::$marker $(| Marker::$alt)* => deserializer.read_raw(),
					_ => Err(deserializer.type_mismatch::<Self>(marker)),
				}
			}
		}
	};
}

impl_number!(u8, Byte);
impl_number!(u16, UShort);
impl_number!(u32, UInt32);
impl_number!(u64, UInt64);

impl_number!(i8, SByte);
impl_number!(i16, Short);
// Enum values decode as their bare underlying integer
impl_number!(i32, Int32 | Enum);
impl_number!(i64, Int64);

impl_number!(f32, Float);
impl_number!(f64, Double);

impl Serialize for bool {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.push_marker(if *self { Marker::True } else { Marker::False });
		Ok(())
	}
}

impl Deserialize for bool {
	#[inline]
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		match marker {
			Marker::True => Ok(true),
			Marker::False => Ok(false),
			_ => Err(deserializer.type_mismatch::<Self>(marker)),
		}
	}
}

impl Serialize for str {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.push_str(self)
	}
}

impl Serialize for String {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.push_str(self)
	}
}

impl Deserialize for String {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		match marker {
			Marker::String => Ok(deserializer.read_str()?.to_owned()),
			_ => Err(deserializer.type_mismatch::<Self>(marker)),
		}
	}
}

impl Deserialize for Box<str> {
	#[inline]
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		String::deserialize_after_marker(marker, deserializer).map(String::into_boxed_str)
	}
}

impl Serialize for Cow<'_, str> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.push_str(self)
	}
}

impl Deserialize for Cow<'static, str> {
	#[inline]
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		String::deserialize_after_marker(marker, deserializer).map(Cow::Owned)
	}
}
