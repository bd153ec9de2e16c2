use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{Deserialize, Deserializer, Error, Marker, Result, Serialize, Serializer};

/// Nanoseconds in one tick.
const NANOS_PER_TICK: u64 = 100;

/// Point in time, as a count of 100-nanosecond ticks since
/// 0001-01-01T00:00:00 UTC.
///
/// Serialized as `DateTime` marker followed by the tick count as a 64-bit
/// integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
	ticks: i64,
}

impl Timestamp {
	/// Ticks per second.
	pub const TICKS_PER_SECOND: i64 = 10_000_000;

	/// Tick count of 1970-01-01T00:00:00 UTC.
	pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

	/// Create [`Timestamp`] from a tick count.
	#[inline]
	pub const fn from_ticks(ticks: i64) -> Self {
		Self { ticks }
	}

	/// Get tick count.
	#[inline]
	pub const fn ticks(self) -> i64 {
		self.ticks
	}

	/// Convert a [`SystemTime`] to [`Timestamp`], rounding down to a whole tick.
	///
	/// Times before the Unix epoch also round down (away from the epoch), so a
	/// timestamp is never later than the time it was made from.
	///
	/// Returns `None` if time is outside the range of a 64-bit tick count.
	pub fn from_system_time(time: SystemTime) -> Option<Self> {
		let ticks = match time.duration_since(UNIX_EPOCH) {
			Ok(after) => Self::UNIX_EPOCH_TICKS.checked_add(duration_to_ticks(after, false)?)?,
			Err(before) => {
				Self::UNIX_EPOCH_TICKS.checked_sub(duration_to_ticks(before.duration(), true)?)?
			}
		};
		Some(Self::from_ticks(ticks))
	}

	/// Convert to [`SystemTime`].
	///
	/// Returns `None` if the platform's `SystemTime` cannot represent this
	/// point in time.
	pub fn to_system_time(self) -> Option<SystemTime> {
		let since_epoch = self.ticks.checked_sub(Self::UNIX_EPOCH_TICKS)?;
		let nanos = since_epoch.unsigned_abs().checked_mul(NANOS_PER_TICK)?;
		let duration = Duration::from_nanos(nanos);
		if since_epoch >= 0 {
			UNIX_EPOCH.checked_add(duration)
		} else {
			UNIX_EPOCH.checked_sub(duration)
		}
	}
}

fn duration_to_ticks(duration: Duration, round_up: bool) -> Option<i64> {
	let nanos = duration.as_nanos();
	let mut ticks = nanos / NANOS_PER_TICK as u128;
	if round_up && nanos % NANOS_PER_TICK as u128 != 0 {
		ticks += 1;
	}
	i64::try_from(ticks).ok()
}

impl Serialize for Timestamp {
	#[inline]
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		serializer.push_marker(Marker::DateTime);
		serializer.push_raw(self.ticks);
		Ok(())
	}
}

impl Deserialize for Timestamp {
	#[inline]
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		match marker {
			Marker::DateTime => deserializer.read_raw().map(Self::from_ticks),
			_ => Err(deserializer.type_mismatch::<Self>(marker)),
		}
	}
}

impl Serialize for SystemTime {
	fn serialize(&self, serializer: &mut Serializer) -> Result<()> {
		Timestamp::from_system_time(*self)
			.ok_or(Error::TimestampOutOfRange)?
			.serialize(serializer)
	}
}

impl Deserialize for SystemTime {
	fn deserialize_after_marker(marker: Marker, deserializer: &mut Deserializer<'_>) -> Result<Self> {
		Timestamp::deserialize_after_marker(marker, deserializer)?
			.to_system_time()
			.ok_or(Error::TimestampOutOfRange)
	}
}
