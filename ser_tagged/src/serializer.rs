use crate::{raw::RawBits, Error, Marker, Result, Serialize};

/// Maximum value of a count field (containers and objects).
const MAX_COUNT: usize = u32::MAX as usize;
/// Maximum length of a string.
const MAX_STR_LEN: usize = i32::MAX as usize;

/// Position of a count field which has been written as a placeholder,
/// to be filled in later with [`Serializer::patch_count`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "placeholder count must be patched"]
pub struct CountSlot {
	pos: usize,
}

/// Serializer which writes tagged values into a growable buffer.
///
/// Every value is written as a marker byte followed by its payload.
/// Containers and objects are written as marker, a 4-byte count, and then
/// their elements. The count is written as a placeholder first and patched
/// once all elements have been written, so iterators of unknown length can be
/// serialized in a single pass.
pub struct Serializer {
	buf: Vec<u8>,
}

impl Serializer {
	/// Create new [`Serializer`] without allocating any memory for output
	/// buffer. Memory will be allocated when first value is serialized.
	///
	/// If you know, or can estimate, the amount of buffer space that's going to
	/// be needed in advance, allocating upfront with [`with_capacity`] can
	/// improve performance vs `new`.
	///
	/// [`with_capacity`]: Serializer::with_capacity
	pub fn new() -> Self {
		Self { buf: Vec::new() }
	}

	/// Create new [`Serializer`] with pre-allocated buffer with capacity of
	/// `capacity` bytes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
		}
	}

	/// Serialize a value and everything it contains.
	///
	/// The entry point for serializing.
	#[inline]
	pub fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		value.serialize(self)
	}

	/// Serialize an enum's underlying value.
	#[inline]
	pub fn serialize_enum(&mut self, value: i32) -> Result<()> {
		self.push_marker(Marker::Enum);
		self.push_raw(value);
		Ok(())
	}

	/// Serialize items of an iterator as an `Array`.
	///
	/// Length of iterator does not need to be known in advance.
	pub fn serialize_seq<I>(&mut self, items: I) -> Result<()>
	where
		I: IntoIterator,
		I::Item: Serialize,
	{
		let slot = self.reserve_count(Marker::Array);
		let mut count = 0;
		for item in items {
			item.serialize(self)?;
			count += 1;
		}
		self.patch_count(slot, count)
	}

	/// Serialize `(key, value)` pairs of an iterator as a `Table`.
	///
	/// Each key is written followed by its value.
	pub fn serialize_map<I, K, V>(&mut self, entries: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Serialize,
		V: Serialize,
	{
		let slot = self.reserve_count(Marker::Table);
		let mut count = 0;
		for (key, value) in entries {
			key.serialize(self)?;
			value.serialize(self)?;
			count += 1;
		}
		self.patch_count(slot, count)
	}

	/// Push a marker byte to output.
	#[inline]
	pub fn push_marker(&mut self, marker: Marker) {
		self.buf.push(marker.as_byte());
	}

	/// Push bit pattern of a fixed-width number to output.
	#[inline]
	pub fn push_raw<T: RawBits>(&mut self, value: T) {
		value.write_raw(&mut self.buf);
	}

	/// Push raw bytes to output.
	#[inline]
	pub fn push_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	/// Push a string: `String` marker, 4-byte length, UTF-8 bytes.
	pub fn push_str(&mut self, s: &str) -> Result<()> {
		if s.len() > MAX_STR_LEN {
			return Err(Error::LengthOverflow {
				len: s.len(),
				max: MAX_STR_LEN,
			});
		}
		self.push_marker(Marker::String);
		self.push_raw(s.len() as i32);
		self.push_bytes(s.as_bytes());
		Ok(())
	}

	/// Push marker followed by a zero count placeholder.
	///
	/// Returns a [`CountSlot`] to pass to [`patch_count`] once the real count
	/// is known.
	///
	/// [`patch_count`]: Serializer::patch_count
	pub fn reserve_count(&mut self, marker: Marker) -> CountSlot {
		self.push_marker(marker);
		let slot = CountSlot { pos: self.pos() };
		self.push_raw(0u32);
		slot
	}

	/// Overwrite count placeholder with final count.
	pub fn patch_count(&mut self, slot: CountSlot, count: usize) -> Result<()> {
		if count > MAX_COUNT {
			return Err(Error::LengthOverflow {
				len: count,
				max: MAX_COUNT,
			});
		}
		let mut bytes = Vec::with_capacity(u32::WIDTH);
		(count as u32).write_raw(&mut bytes);
		self.buf[slot.pos..slot.pos + u32::WIDTH].copy_from_slice(&bytes);
		Ok(())
	}

	/// Get current position in output.
	#[inline]
	pub fn pos(&self) -> usize {
		self.buf.len()
	}

	/// Get current capacity of output.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Get output written so far.
	#[inline]
	pub fn as_slice(&self) -> &[u8] {
		self.buf.as_slice()
	}

	/// Consume serializer and return output.
	#[inline]
	pub fn into_vec(self) -> Vec<u8> {
		self.buf
	}
}

impl Default for Serializer {
	fn default() -> Self {
		Self::new()
	}
}
