use std::{any::type_name, mem::size_of};

use crate::{raw::RawBits, Deserialize, Error, Marker, Result};

/// Deserializer which reads tagged values from a byte slice.
///
/// Holds the read cursor. After reading any complete value, the cursor points
/// to the byte immediately following that value.
/// Containers and objects can be nested at most [`MAX_DEPTH`] deep.
///
/// [`MAX_DEPTH`]: Deserializer::MAX_DEPTH
pub struct Deserializer<'de> {
	bytes: &'de [u8],
	offset: usize,
	marker_offset: usize,
	depth: usize,
	max_depth: usize,
}

/// Upper bound on bytes pre-allocated for a container before its elements
/// have been read.
const MAX_PREALLOC_BYTES: usize = 1024 * 1024;

impl<'de> Deserializer<'de> {
	/// Default limit on nesting of containers and objects.
	pub const MAX_DEPTH: usize = 128;

	/// Create new [`Deserializer`] reading from start of `bytes`.
	pub fn new(bytes: &'de [u8]) -> Self {
		Self::at(bytes, 0)
	}

	/// Create new [`Deserializer`] reading from `offset` in `bytes`.
	pub fn at(bytes: &'de [u8], offset: usize) -> Self {
		Self {
			bytes,
			offset,
			marker_offset: offset,
			depth: 0,
			max_depth: Self::MAX_DEPTH,
		}
	}

	/// Set limit on nesting of containers and objects.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Run `f` one nesting level deeper, if `marker` opens a container or
	/// object.
	///
	/// Fails with [`Error::DepthLimitExceeded`] if this would exceed the
	/// nesting limit.
	pub fn nested<T>(&mut self, marker: Marker, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
		if !marker.is_container() {
			return f(self);
		}

		if self.depth >= self.max_depth {
			return Err(Error::DepthLimitExceeded {
				max: self.max_depth,
				offset: self.marker_offset,
			});
		}
		self.depth += 1;
		let result = f(self);
		self.depth -= 1;
		result
	}

	/// Deserialize a value of type `T`.
	///
	/// The entry point for deserializing. `T` (not the input) decides how the
	/// value is decoded. The marker is only used to choose a branch and to
	/// check the input is what `T` expects.
	#[inline]
	pub fn deserialize_value<T: Deserialize>(&mut self) -> Result<T> {
		T::deserialize(self)
	}

	/// Get current position of cursor.
	#[inline]
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Get number of bytes after the cursor.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.offset)
	}

	/// Returns `true` if cursor is at end of input.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Read a marker byte.
	pub fn read_marker(&mut self) -> Result<Marker> {
		let marker = self.peek_marker()?;
		self.marker_offset = self.offset;
		self.offset += 1;
		Ok(marker)
	}

	/// Get next marker without advancing cursor.
	pub fn peek_marker(&self) -> Result<Marker> {
		let byte = *self.bytes.get(self.offset).ok_or(Error::OutOfRange {
			offset: self.offset,
			needed: 1,
			len: self.bytes.len(),
		})?;
		Marker::from_byte(byte).ok_or(Error::UnknownMarker {
			byte,
			offset: self.offset,
		})
	}

	/// Read a marker and check it is `expected`.
	pub fn expect_marker(&mut self, expected: Marker) -> Result<()> {
		let found = self.read_marker()?;
		if found == expected {
			Ok(())
		} else {
			Err(Error::UnexpectedMarker {
				expected,
				found,
				offset: self.marker_offset,
			})
		}
	}

	/// Read `len` raw bytes.
	pub fn read_bytes(&mut self, len: usize) -> Result<&'de [u8]> {
		let out_of_range = Error::OutOfRange {
			offset: self.offset,
			needed: len,
			len: self.bytes.len(),
		};
		let end = self.offset.checked_add(len).ok_or(out_of_range.clone())?;
		let bytes = self.bytes.get(self.offset..end).ok_or(out_of_range)?;
		self.offset = end;
		Ok(bytes)
	}

	/// Read a fixed-width number.
	#[inline]
	pub fn read_raw<T: RawBits>(&mut self) -> Result<T> {
		let bytes = self.read_bytes(T::WIDTH)?;
		Ok(T::read_raw(bytes))
	}

	/// Read a 4-byte element count of a container or object.
	#[inline]
	pub fn read_count(&mut self) -> Result<usize> {
		Ok(self.read_raw::<u32>()? as usize)
	}

	/// Read length-prefixed UTF-8 string payload.
	/// `String` marker must already have been consumed.
	pub fn read_str(&mut self) -> Result<&'de str> {
		let bytes = self.read_str_bytes()?;
		std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
			offset: self.offset - bytes.len(),
		})
	}

	fn read_str_bytes(&mut self) -> Result<&'de [u8]> {
		let len_offset = self.offset;
		let len = self.read_raw::<i32>()?;
		if len < 0 {
			return Err(Error::NegativeLength {
				len,
				offset: len_offset,
			});
		}
		self.read_bytes(len as usize)
	}

	/// Read an enum's underlying value, after its marker.
	///
	/// `T` is the enum type, used only for the error if marker is not `Enum`.
	pub fn read_enum<T: ?Sized>(&mut self, marker: Marker) -> Result<i32> {
		match marker {
			Marker::Enum => self.read_raw(),
			_ => Err(self.type_mismatch::<T>(marker)),
		}
	}

	/// Skip over one complete value of any type.
	///
	/// Only markers are used to find the end of the value, so this works
	/// without knowing the value's type.
	pub fn skip_value(&mut self) -> Result<()> {
		let marker = self.read_marker()?;
		self.nested(marker, |deserializer| deserializer.skip_after_marker(marker))
	}

	fn skip_after_marker(&mut self, marker: Marker) -> Result<()> {
		match marker {
			Marker::String => {
				self.read_str_bytes()?;
			}
			Marker::Array => {
				let count = self.read_count()?;
				for _ in 0..count {
					self.skip_value()?;
				}
			}
			Marker::Table => {
				let count = self.read_count()?;
				for _ in 0..count {
					self.skip_value()?;
					self.skip_value()?;
				}
			}
			Marker::Object => {
				let count = self.read_count()?;
				for _ in 0..count {
					self.expect_marker(Marker::String)?;
					self.read_str_bytes()?;
					self.skip_value()?;
				}
			}
			Marker::Byte
			| Marker::SByte
			| Marker::Short
			| Marker::UShort
			| Marker::Int32
			| Marker::UInt32
			| Marker::Int64
			| Marker::UInt64
			| Marker::Float
			| Marker::Double
			| Marker::Enum
			| Marker::DateTime
			| Marker::True
			| Marker::False
			| Marker::Null => {
				let width = marker.fixed_width().unwrap_or(0);
				self.read_bytes(width)?;
			}
		}
		Ok(())
	}

	/// Capacity to pre-allocate for a container of `count` elements of type `T`.
	///
	/// Every element takes at least 1 byte, so a count larger than the remaining
	/// input is corrupt. Capacity is also capped at 1 MiB of elements, so a bad
	/// count cannot cause a huge allocation even for large `T`. Containers
	/// with more elements grow as they are read.
	#[inline]
	pub fn capacity_hint<T>(&self, count: usize) -> usize {
		let max_elements = MAX_PREALLOC_BYTES / size_of::<T>().max(1);
		count.min(self.remaining()).min(max_elements)
	}

	/// Create error for a marker which cannot be decoded as `T`.
	///
	/// Error points at offset of last marker read.
	pub fn type_mismatch<T: ?Sized>(&self, found: Marker) -> Error {
		Error::TypeMismatch {
			type_name: type_name::<T>(),
			found,
			offset: self.marker_offset,
		}
	}

	/// Create error for an integer which is not a discriminant of enum `T`.
	pub fn unknown_variant<T: ?Sized>(&self, value: i32) -> Error {
		Error::UnknownVariant {
			type_name: type_name::<T>(),
			value,
			offset: self.marker_offset,
		}
	}

	/// Create error for a fixed-size container receiving wrong number of
	/// elements.
	pub fn length_mismatch<T: ?Sized>(&self, expected: usize, found: usize) -> Error {
		Error::LengthMismatch {
			type_name: type_name::<T>(),
			expected,
			found,
			offset: self.marker_offset,
		}
	}
}
