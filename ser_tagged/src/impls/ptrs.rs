use crate::{Deserialize, Deserializer, Marker, Result, Serialize, Serializer};

impl<T: Serialize + ?Sized> Serialize for &T {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		(**self).serialize(serializer)
	}
}

impl<T: Serialize + ?Sized> Serialize for Box<T> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		(**self).serialize(serializer)
	}
}

impl<T: Deserialize> Deserialize for Box<T> {
	#[inline]
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		T::deserialize_after_marker(marker, deserializer).map(Box::new)
	}
}

impl<T: Serialize> Serialize for [T] {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_seq(self)
	}
}

impl<T: Serialize> Serialize for Vec<T> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_seq(self)
	}
}

impl<T: Deserialize> Deserialize for Vec<T> {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		if marker != Marker::Array {
			return Err(deserializer.type_mismatch::<Self>(marker));
		}

		let count = deserializer.read_count()?;
		let mut vec = Vec::with_capacity(deserializer.capacity_hint::<T>(count));
		for _ in 0..count {
			vec.push(T::deserialize(deserializer)?);
		}
		Ok(vec)
	}
}

impl<T: Deserialize> Deserialize for Box<[T]> {
	#[inline]
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		Vec::<T>::deserialize_after_marker(marker, deserializer).map(Vec::into_boxed_slice)
	}
}

impl<T: Serialize, const N: usize> Serialize for [T; N] {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_seq(self)
	}
}

impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		if marker != Marker::Array {
			return Err(deserializer.type_mismatch::<Self>(marker));
		}

		// Check count before decoding any elements
		let count = deserializer.read_count()?;
		if count != N {
			return Err(deserializer.length_mismatch::<Self>(N, count));
		}

		let mut vec = Vec::with_capacity(N);
		for _ in 0..N {
			vec.push(T::deserialize(deserializer)?);
		}
		<[T; N]>::try_from(vec).map_err(|vec| deserializer.length_mismatch::<Self>(N, vec.len()))
	}
}
