use std::fmt;

/// One-byte tag written before every value in the output.
///
/// Byte values are printable ASCII so a hex dump of serialized output can be
/// read by eye.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Marker {
	Byte = b'b',
	SByte = b'B',
	Short = b'h',
	UShort = b'H',
	Int32 = b'i',
	UInt32 = b'I',
	Int64 = b'l',
	UInt64 = b'L',
	Float = b'f',
	Double = b'd',
	Enum = b'e',
	String = b's',
	/// List-like container: `Vec<T>`, `[T; N]`, sets etc.
	Array = b'a',
	/// Map-like container: `HashMap<K, V>`, `BTreeMap<K, V>`.
	Table = b't',
	DateTime = b'D',
	True = b'T',
	False = b'F',
	Object = b'o',
	/// Absent value (`Option::None`). Carries no payload.
	Null = b'n',
}

impl Marker {
	/// All markers, in declaration order.
	pub const ALL: [Marker; 19] = [
		Marker::Byte,
		Marker::SByte,
		Marker::Short,
		Marker::UShort,
		Marker::Int32,
		Marker::UInt32,
		Marker::Int64,
		Marker::UInt64,
		Marker::Float,
		Marker::Double,
		Marker::Enum,
		Marker::String,
		Marker::Array,
		Marker::Table,
		Marker::DateTime,
		Marker::True,
		Marker::False,
		Marker::Object,
		Marker::Null,
	];

	/// Get byte value of marker.
	#[inline]
	pub const fn as_byte(self) -> u8 {
		self as u8
	}

	/// Get marker for a byte, or `None` if byte is not a marker.
	#[inline]
	pub const fn from_byte(byte: u8) -> Option<Marker> {
		let marker = match byte {
			b'b' => Marker::Byte,
			b'B' => Marker::SByte,
			b'h' => Marker::Short,
			b'H' => Marker::UShort,
			b'i' => Marker::Int32,
			b'I' => Marker::UInt32,
			b'l' => Marker::Int64,
			b'L' => Marker::UInt64,
			b'f' => Marker::Float,
			b'd' => Marker::Double,
			b'e' => Marker::Enum,
			b's' => Marker::String,
			b'a' => Marker::Array,
			b't' => Marker::Table,
			b'D' => Marker::DateTime,
			b'T' => Marker::True,
			b'F' => Marker::False,
			b'o' => Marker::Object,
			b'n' => Marker::Null,
			_ => return None,
		};
		Some(marker)
	}

	/// Width in bytes of the fixed payload following this marker.
	///
	/// `None` for variable-length values (strings, containers, objects).
	pub const fn fixed_width(self) -> Option<usize> {
		match self {
			Marker::Byte | Marker::SByte => Some(1),
			Marker::Short | Marker::UShort => Some(2),
			Marker::Int32 | Marker::UInt32 | Marker::Float | Marker::Enum => Some(4),
			Marker::Int64 | Marker::UInt64 | Marker::Double | Marker::DateTime => Some(8),
			Marker::True | Marker::False | Marker::Null => Some(0),
			Marker::String | Marker::Array | Marker::Table | Marker::Object => None,
		}
	}

	/// Returns `true` for markers followed by a count and nested values.
	#[inline]
	pub const fn is_container(self) -> bool {
		matches!(self, Marker::Array | Marker::Table | Marker::Object)
	}

	/// Name of the value category this marker represents.
	pub const fn name(self) -> &'static str {
		match self {
			Marker::Byte => "Byte",
			Marker::SByte => "SByte",
			Marker::Short => "Short",
			Marker::UShort => "UShort",
			Marker::Int32 => "Int32",
			Marker::UInt32 => "UInt32",
			Marker::Int64 => "Int64",
			Marker::UInt64 => "UInt64",
			Marker::Float => "Float",
			Marker::Double => "Double",
			Marker::Enum => "Enum",
			Marker::String => "String",
			Marker::Array => "Array",
			Marker::Table => "Table",
			Marker::DateTime => "DateTime",
			Marker::True => "True",
			Marker::False => "False",
			Marker::Object => "Object",
			Marker::Null => "Null",
		}
	}
}

impl fmt::Display for Marker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ('{}')", self.name(), self.as_byte() as char)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn byte_mapping_is_injective_and_invertible() {
		let mut seen = HashSet::new();
		for marker in Marker::ALL {
			assert!(seen.insert(marker.as_byte()), "duplicate byte for {marker}");
			assert_eq!(Marker::from_byte(marker.as_byte()), Some(marker));
		}
	}

	#[test]
	fn unknown_bytes_are_rejected() {
		let known: HashSet<u8> = Marker::ALL.iter().map(|m| m.as_byte()).collect();
		for byte in 0..=u8::MAX {
			if !known.contains(&byte) {
				assert_eq!(Marker::from_byte(byte), None);
			}
		}
	}

	#[test]
	fn containers() {
		let containers = Marker::ALL
			.iter()
			.filter(|marker| marker.is_container())
			.copied()
			.collect::<Vec<_>>();
		assert_eq!(containers, [Marker::Array, Marker::Table, Marker::Object]);
	}

	#[test]
	fn display() {
		assert_eq!(Marker::Int32.to_string(), "Int32 ('i')");
		assert_eq!(Marker::Null.to_string(), "Null ('n')");
	}
}
