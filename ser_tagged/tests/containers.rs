use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

mod common;
use common::{bytes, count, int32, round_trip, string};
use ser_tagged::{deserialize, serialize, Error, Marker};

#[test]
fn vec_layout() {
	let out = round_trip(&vec![1i32, 2, 3]);
	assert_eq!(
		out,
		bytes(&[b"a", &count(3), &int32(1), &int32(2), &int32(3)])
	);
}

#[test]
fn slices_and_arrays_share_vec_layout() {
	let expected = serialize(&vec![1i32, 2, 3]).unwrap();
	assert_eq!(serialize(&[1i32, 2, 3][..]).unwrap(), expected);
	assert_eq!(serialize(&[1i32, 2, 3]).unwrap(), expected);
	assert_eq!(deserialize::<[i32; 3]>(&expected).unwrap(), Some([1, 2, 3]));
	assert_eq!(
		deserialize::<Box<[i32]>>(&expected).unwrap(),
		Some(vec![1, 2, 3].into_boxed_slice())
	);
	assert_eq!(
		deserialize::<VecDeque<i32>>(&expected).unwrap(),
		Some(VecDeque::from(vec![1, 2, 3]))
	);
}

#[test]
fn empty_containers() {
	assert_eq!(round_trip(&Vec::<String>::new()), bytes(&[b"a", &count(0)]));
	assert_eq!(round_trip(&BTreeMap::<u8, u8>::new()), bytes(&[b"t", &count(0)]));
	round_trip(&HashMap::<String, i64>::new());
	round_trip(&HashSet::<u32>::new());
	round_trip(&[0u8; 0]);
}

#[test]
fn map_layout() {
	let mut map = BTreeMap::new();
	map.insert("a".to_string(), 1i32);
	map.insert("b".to_string(), 2i32);
	let out = round_trip(&map);
	assert_eq!(
		out,
		bytes(&[
			b"t",
			&count(2),
			&string("a"),
			&int32(1),
			&string("b"),
			&int32(2),
		])
	);
}

#[test]
fn hash_collections() {
	let map = (0..50)
		.map(|i| (format!("key{i}"), vec![i; i as usize % 4]))
		.collect::<HashMap<String, Vec<u16>>>();
	round_trip(&map);

	let set = (0..50u64).map(|i| i * 7).collect::<HashSet<_>>();
	round_trip(&set);

	let set = ["x", "y", "z"]
		.iter()
		.map(|s| s.to_string())
		.collect::<BTreeSet<_>>();
	let out = round_trip(&set);
	assert_eq!(out[0], b'a');
}

#[test]
fn nested_containers() {
	let value = vec![vec![], vec![Some(1u8), None], vec![None]];
	round_trip(&value);

	let mut map = BTreeMap::new();
	map.insert(1u32, vec![BTreeMap::from([(true, "t".to_string())])]);
	map.insert(2u32, vec![]);
	round_trip(&map);
}

#[test]
fn option_none_is_null() {
	assert_eq!(round_trip(&None::<i32>), b"n".to_vec());
	assert_eq!(round_trip(&Some(3i32)), int32(3));
	assert_eq!(
		round_trip(&vec![Some("a".to_string()), None]),
		bytes(&[b"a", &count(2), &string("a"), b"n"])
	);
}

#[test]
fn fixed_array_length_mismatch() {
	let out = serialize(&vec![1i32, 2]).unwrap();
	assert_eq!(
		deserialize::<[i32; 3]>(&out).unwrap_err(),
		Error::LengthMismatch {
			type_name: "[i32; 3]",
			expected: 3,
			found: 2,
			offset: 0
		}
	);
}

#[test]
fn container_shape_must_match_marker() {
	let out = serialize(&vec![1i32]).unwrap();
	assert!(matches!(
		deserialize::<HashMap<i32, i32>>(&out),
		Err(Error::TypeMismatch {
			found: Marker::Array,
			..
		})
	));

	let out = serialize(&BTreeMap::from([(1i32, 1i32)])).unwrap();
	assert!(matches!(
		deserialize::<Vec<i32>>(&out),
		Err(Error::TypeMismatch {
			found: Marker::Table,
			..
		})
	));
}

#[test]
fn element_type_mismatch_reports_element_offset() {
	let out = serialize(&vec![1i32, 2]).unwrap();
	assert_eq!(
		deserialize::<Vec<u32>>(&out).unwrap_err(),
		Error::TypeMismatch {
			type_name: "u32",
			found: Marker::Int32,
			offset: 5
		}
	);
}

#[test]
fn truncated_last_element_is_out_of_range() {
	let out = serialize(&vec![1i32, 2, 3]).unwrap();
	let err = deserialize::<Vec<i32>>(&out[..out.len() - 2]).unwrap_err();
	assert_eq!(
		err,
		Error::OutOfRange {
			offset: 16,
			needed: 4,
			len: 18
		}
	);
}

#[test]
fn corrupt_count_does_not_over_allocate() {
	let input = bytes(&[b"a", &count(u32::MAX), &int32(1)]);
	assert!(matches!(
		deserialize::<Vec<i32>>(&input),
		Err(Error::OutOfRange { .. })
	));
}

#[test]
fn serialize_seq_from_iterator() {
	let mut ser = ser_tagged::Serializer::new();
	ser.serialize_seq((1..=3).map(|i| i * 10i32)).unwrap();
	assert_eq!(ser.into_vec(), serialize(&vec![10i32, 20, 30]).unwrap());
}
