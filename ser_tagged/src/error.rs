use thiserror::Error;

use crate::Marker;

/// Errors produced while serializing or deserializing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	/// Input ended before a complete value could be read.
	#[error("out of range: need {needed} bytes at offset {offset}, but input is {len} bytes")]
	OutOfRange {
		offset: usize,
		needed: usize,
		len: usize,
	},

	/// Byte at `offset` is not a known marker.
	#[error("unknown marker byte 0x{byte:02x} at offset {offset}")]
	UnknownMarker { byte: u8, offset: usize },

	/// A specific marker was required but a different one was found.
	#[error("expected {expected} marker at offset {offset}, found {found}")]
	UnexpectedMarker {
		expected: Marker,
		found: Marker,
		offset: usize,
	},

	/// Marker does not encode a value which can be decoded as `type_name`.
	#[error("type mismatch: cannot decode {found} at offset {offset} as `{type_name}`")]
	TypeMismatch {
		type_name: &'static str,
		found: Marker,
		offset: usize,
	},

	/// String bytes are not valid UTF-8.
	#[error("invalid UTF-8 in string at offset {offset}")]
	InvalidUtf8 { offset: usize },

	/// String length prefix is negative.
	#[error("negative string length {len} at offset {offset}")]
	NegativeLength { len: i32, offset: usize },

	/// String or container is too long for its 32-bit length field.
	#[error("length {len} exceeds the maximum of {max}")]
	LengthOverflow { len: usize, max: usize },

	/// Fixed-size array received a different number of elements.
	#[error("expected {expected} elements for `{type_name}`, found {found} at offset {offset}")]
	LengthMismatch {
		type_name: &'static str,
		expected: usize,
		found: usize,
		offset: usize,
	},

	/// Integer does not match any variant of enum `type_name`.
	#[error("{value} is not a valid discriminant for `{type_name}` (offset {offset})")]
	UnknownVariant {
		type_name: &'static str,
		value: i32,
		offset: usize,
	},

	/// Containers or objects are nested deeper than the deserializer allows.
	#[error("nesting deeper than {max} levels at offset {offset}")]
	DepthLimitExceeded { max: usize, offset: usize },

	/// Point in time cannot be represented as a tick count or `SystemTime`.
	#[error("timestamp is outside the representable range")]
	TimestampOutOfRange,
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
