use std::{
	collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
	hash::{BuildHasher, Hash},
};

use crate::{Deserialize, Deserializer, Marker, Result, Serialize, Serializer};

/// Read count of an `Array` frame, checking marker.
fn read_array_count<C>(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<usize> {
	match marker {
		Marker::Array => deserializer.read_count(),
		_ => Err(deserializer.type_mismatch::<C>(marker)),
	}
}

/// Read count of a `Table` frame, checking marker.
fn read_table_count<C>(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<usize> {
	match marker {
		Marker::Table => deserializer.read_count(),
		_ => Err(deserializer.type_mismatch::<C>(marker)),
	}
}

impl<T: Serialize> Serialize for VecDeque<T> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_seq(self)
	}
}

impl<T: Deserialize> Deserialize for VecDeque<T> {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		let count = read_array_count::<Self>(marker, deserializer)?;
		let mut deque = VecDeque::with_capacity(deserializer.capacity_hint::<T>(count));
		for _ in 0..count {
			deque.push_back(T::deserialize(deserializer)?);
		}
		Ok(deque)
	}
}

impl<T: Serialize, S> Serialize for HashSet<T, S> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_seq(self)
	}
}

impl<T, S> Deserialize for HashSet<T, S>
where
	T: Deserialize + Eq + Hash,
	S: BuildHasher + Default,
{
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		let count = read_array_count::<Self>(marker, deserializer)?;
		let mut set =
			HashSet::with_capacity_and_hasher(deserializer.capacity_hint::<T>(count), S::default());
		for _ in 0..count {
			set.insert(T::deserialize(deserializer)?);
		}
		Ok(set)
	}
}

impl<T: Serialize> Serialize for BTreeSet<T> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_seq(self)
	}
}

impl<T: Deserialize + Ord> Deserialize for BTreeSet<T> {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		let count = read_array_count::<Self>(marker, deserializer)?;
		let mut set = BTreeSet::new();
		for _ in 0..count {
			set.insert(T::deserialize(deserializer)?);
		}
		Ok(set)
	}
}

impl<K: Serialize, V: Serialize, S> Serialize for HashMap<K, V, S> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_map(self)
	}
}

impl<K, V, S> Deserialize for HashMap<K, V, S>
where
	K: Deserialize + Eq + Hash,
	V: Deserialize,
	S: BuildHasher + Default,
{
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		let count = read_table_count::<Self>(marker, deserializer)?;
		let mut map =
			HashMap::with_capacity_and_hasher(deserializer.capacity_hint::<(K, V)>(count), S::default());
		for _ in 0..count {
			let key = K::deserialize(deserializer)?;
			let value = V::deserialize(deserializer)?;
			map.insert(key, value);
		}
		Ok(map)
	}
}

impl<K: Serialize, V: Serialize> Serialize for BTreeMap<K, V> {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.serialize_map(self)
	}
}

impl<K: Deserialize + Ord, V: Deserialize> Deserialize for BTreeMap<K, V> {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		let count = read_table_count::<Self>(marker, deserializer)?;
		let mut map = BTreeMap::new();
		for _ in 0..count {
			let key = K::deserialize(deserializer)?;
			let value = V::deserialize(deserializer)?;
			map.insert(key, value);
		}
		Ok(map)
	}
}
