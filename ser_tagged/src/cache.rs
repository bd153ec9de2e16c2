use std::{
	any::{type_name, Any, TypeId},
	collections::HashMap,
	sync::OnceLock,
};

use log::{debug, trace};
use parking_lot::RwLock;

use crate::{Accessor, Composite};

type Entry = &'static (dyn Any + Send + Sync);

/// Cache of [`Accessor`]s, keyed by type.
///
/// Append-only. An accessor is built the first time its type is serialized or
/// deserialized and then lives for the rest of the process. Accessors are
/// leaked, so a cache other than [`AccessorCache::global`] should be
/// long-lived too.
pub struct AccessorCache {
	accessors: RwLock<HashMap<TypeId, Entry>>,
}

impl AccessorCache {
	/// Create empty cache.
	pub fn new() -> Self {
		Self {
			accessors: RwLock::new(HashMap::new()),
		}
	}

	/// Get process-wide cache used by the serializer.
	pub fn global() -> &'static AccessorCache {
		static GLOBAL: OnceLock<AccessorCache> = OnceLock::new();
		GLOBAL.get_or_init(AccessorCache::new)
	}

	/// Get accessor for `T`, building it if it is not in the cache.
	///
	/// If several threads build the same accessor at once, only one is
	/// published and all callers get that one.
	pub fn get_or_build<T: Composite>(&self) -> &'static Accessor<T> {
		if let Some(accessor) = self.get::<T>() {
			return accessor;
		}

		// Build outside lock
		let built = Accessor::<T>::build();

		let mut accessors = self.accessors.write();
		let existing = accessors
			.get(&TypeId::of::<T>())
			.copied()
			.and_then(|entry| entry.downcast_ref::<Accessor<T>>());
		if let Some(accessor) = existing {
			trace!("Discarding duplicate accessor for `{}`", type_name::<T>());
			return accessor;
		}

		let accessor: &'static Accessor<T> = Box::leak(Box::new(built));
		accessors.insert(TypeId::of::<T>(), accessor);
		debug!(
			"Built accessor for `{}` with {} members",
			type_name::<T>(),
			accessor.len()
		);
		accessor
	}

	/// Get accessor for `T` if it is already in the cache.
	pub fn get<T: Composite>(&self) -> Option<&'static Accessor<T>> {
		self.accessors
			.read()
			.get(&TypeId::of::<T>())
			.copied()
			.and_then(|entry| entry.downcast_ref::<Accessor<T>>())
	}

	/// Returns `true` if cache contains accessor for `T`.
	#[inline]
	pub fn contains<T: Composite>(&self) -> bool {
		self.accessors.read().contains_key(&TypeId::of::<T>())
	}

	/// Number of cached accessors.
	#[inline]
	pub fn len(&self) -> usize {
		self.accessors.read().len()
	}

	/// Returns `true` if cache is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.accessors.read().is_empty()
	}
}

impl Default for AccessorCache {
	fn default() -> Self {
		Self::new()
	}
}
