use std::{any::type_name, collections::HashMap, fmt};

use log::debug;

use crate::{AccessorCache, Deserializer, Marker, Result, Serialize, Serializer};

/// Trait for record types which are serialized as an `Object` of named
/// members.
///
/// Usually implemented with `#[derive(Codec)]`.
///
/// Deserializing starts from `Default::default()` and then assigns each member
/// found in the input. Members which are not in the input keep their default
/// value.
pub trait Composite: Default + 'static {
	/// Describe the members which are serialized, in serialization order.
	///
	/// Called once per type. Result is cached in [`AccessorCache`].
	fn members() -> Vec<Member<Self>>;
}

/// Read and write access to one named member of `T`.
pub struct Member<T> {
	name: &'static str,
	type_name: &'static str,
	get: fn(&T) -> &dyn Serialize,
	set: fn(&mut T, &mut Deserializer<'_>) -> Result<()>,
}

impl<T> Member<T> {
	/// Create [`Member`].
	///
	/// * `get` projects the member's value out of `T`.
	/// * `set` deserializes a value of the member's declared type and assigns it.
	pub fn new(
		name: &'static str,
		type_name: &'static str,
		get: fn(&T) -> &dyn Serialize,
		set: fn(&mut T, &mut Deserializer<'_>) -> Result<()>,
	) -> Self {
		Self {
			name,
			type_name,
			get,
			set,
		}
	}

	/// Get member name.
	#[inline]
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Get name of member's declared type.
	#[inline]
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Get member's value from `value`.
	#[inline]
	pub fn get<'a>(&self, value: &'a T) -> &'a dyn Serialize {
		(self.get)(value)
	}

	/// Deserialize member's value and assign it into `value`.
	#[inline]
	pub fn set(&self, value: &mut T, deserializer: &mut Deserializer<'_>) -> Result<()> {
		(self.set)(value, deserializer)
	}
}

impl<T> fmt::Debug for Member<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Member")
			.field("name", &self.name)
			.field("type_name", &self.type_name)
			.finish()
	}
}

/// Projection of a [`Composite`] type's members, built once per type.
pub struct Accessor<T> {
	members: Vec<Member<T>>,
	index: HashMap<&'static str, usize>,
}

impl<T: Composite> Accessor<T> {
	/// Build accessor for `T`.
	///
	/// If `T::members()` lists a name more than once, lookups by name find the
	/// first.
	pub fn build() -> Self {
		let members = T::members();
		let mut index = HashMap::with_capacity(members.len());
		for (pos, member) in members.iter().enumerate() {
			index.entry(member.name).or_insert(pos);
		}
		Self { members, index }
	}
}

impl<T> Accessor<T> {
	/// Get all members, in serialization order.
	#[inline]
	pub fn members(&self) -> &[Member<T>] {
		&self.members
	}

	/// Find member by name.
	#[inline]
	pub fn member(&self, name: &str) -> Option<&Member<T>> {
		self.index.get(name).map(|&pos| &self.members[pos])
	}

	/// Number of members.
	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns `true` if type has no members.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Project `value` into an ordered list of `(name, value)` pairs.
	pub fn project<'a>(&self, value: &'a T) -> Vec<(&'static str, &'a dyn Serialize)> {
		self.members
			.iter()
			.map(|member| (member.name, member.get(value)))
			.collect()
	}
}

/// Serialize a [`Composite`] as an `Object`.
///
/// Output is `Object` marker, member count, then for each member its name as a
/// `String` followed by its value.
pub fn serialize_composite<T: Composite>(value: &T, serializer: &mut Serializer) -> Result<()> {
	let accessor = AccessorCache::global().get_or_build::<T>();

	let slot = serializer.reserve_count(Marker::Object);
	let mut count = 0;
	for (name, member_value) in accessor.project(value) {
		serializer.push_str(name)?;
		member_value.serialize(serializer)?;
		count += 1;
	}
	serializer.patch_count(slot, count)
}

/// Deserialize a [`Composite`] from an `Object`, once `marker` has been
/// consumed.
///
/// Members in the input which `T` does not have are skipped.
pub fn deserialize_composite<T: Composite>(
	marker: Marker,
	deserializer: &mut Deserializer<'_>,
) -> Result<T> {
	if marker != Marker::Object {
		return Err(deserializer.type_mismatch::<T>(marker));
	}

	let accessor = AccessorCache::global().get_or_build::<T>();

	let mut value = T::default();
	let count = deserializer.read_count()?;
	for _ in 0..count {
		deserializer.expect_marker(Marker::String)?;
		let name = deserializer.read_str()?;
		match accessor.member(name) {
			Some(member) => member.set(&mut value, deserializer)?,
			None => {
				debug!("Skipping unknown member `{}` of `{}`", name, type_name::<T>());
				deserializer.skip_value()?;
			}
		}
	}
	Ok(value)
}
