//! Raw bit-pattern copies of fixed-width numbers.
//!
//! This is the only place where numbers are converted to and from bytes.
//! Values are copied in the host's native byte order, so output must only be
//! read on a platform with the same numeric representation as the writer.

/// Fixed-width numeric types which are written as a copy of their in-memory
/// bit pattern.
pub trait RawBits: Copy {
	/// Size of value in bytes.
	const WIDTH: usize;

	/// Append bit pattern of value to `out`.
	fn write_raw(&self, out: &mut Vec<u8>);

	/// Read value from bit pattern in `bytes`.
	///
	/// `bytes` must be exactly `WIDTH` bytes long. Callers check bounds before
	/// calling; a slice of wrong length is a bug in the caller.
	fn read_raw(bytes: &[u8]) -> Self;
}

macro_rules! impl_raw_bits {
	($ty:ty) => {
		impl RawBits for $ty {
			const WIDTH: usize = std::mem::size_of::<$ty>();

			#[inline]
			fn write_raw(&self, out: &mut Vec<u8>) {
				out.extend_from_slice(&self.to_ne_bytes());
			}

			#[inline]
			fn read_raw(bytes: &[u8]) -> Self {
				let mut buf = [0u8; std::mem::size_of::<$ty>()];
				buf.copy_from_slice(bytes);
				<$ty>::from_ne_bytes(buf)
			}
		}
	};
}

impl_raw_bits!(u8);
impl_raw_bits!(u16);
impl_raw_bits!(u32);
impl_raw_bits!(u64);

impl_raw_bits!(i8);
impl_raw_bits!(i16);
impl_raw_bits!(i32);
impl_raw_bits!(i64);

impl_raw_bits!(f32);
impl_raw_bits!(f64);
