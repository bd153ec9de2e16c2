#![allow(dead_code, unused_imports)]

mod game_data;
pub use game_data::{generate_data as generate_game_data, GameType, Item, Player, Players};

use std::fmt::Debug;

use ser_tagged::{deserialize, serialize, Deserialize, Serialize};

/// Serialize `value`, deserialize output as `T`, and check it equals `value`.
/// Returns serialized bytes.
pub fn round_trip<T>(value: &T) -> Vec<u8>
where T: Serialize + Deserialize + Debug + PartialEq {
	let bytes = serialize(value).unwrap();
	let output = deserialize::<T>(&bytes).unwrap().unwrap();
	assert_eq!(&output, value);
	bytes
}

/// Build expected output from parts.
pub fn bytes(parts: &[&[u8]]) -> Vec<u8> {
	parts.concat()
}

/// `Int32` value.
pub fn int32(value: i32) -> Vec<u8> {
	bytes(&[b"i", &value.to_ne_bytes()])
}

/// `String` value.
pub fn string(s: &str) -> Vec<u8> {
	bytes(&[b"s", &(s.len() as i32).to_ne_bytes(), s.as_bytes()])
}

/// Count field.
pub fn count(n: u32) -> [u8; 4] {
	n.to_ne_bytes()
}
