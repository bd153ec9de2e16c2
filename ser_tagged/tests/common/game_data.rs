// Shape adapted from https://github.com/djkoloski/rust_serialization_benchmark

use std::{collections::HashMap, ops};

use rand::Rng;
use rand_pcg::Lcg64Xsh32;
use ser_tagged::{Codec, Timestamp};

#[derive(Codec, Clone, Copy, Debug, PartialEq, Default)]
pub enum GameType {
	#[default]
	Survival,
	Creative,
	Adventure,
	Spectator,
}

impl Generate for GameType {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		match rng.gen_range(0..4) {
			0 => GameType::Survival,
			1 => GameType::Creative,
			2 => GameType::Adventure,
			3 => GameType::Spectator,
			_ => unreachable!(),
		}
	}
}

#[derive(Codec, Clone, Debug, PartialEq, Default)]
pub struct Item {
	pub count: i8,
	pub slot: u8,
	pub id: String,
}

impl Generate for Item {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const IDS: [&str; 8] = [
			"dirt",
			"stone",
			"pickaxe",
			"sand",
			"gravel",
			"shovel",
			"chestplate",
			"steak",
		];
		Self {
			count: rng.gen(),
			slot: rng.gen(),
			id: IDS[rng.gen_range(0..IDS.len())].to_string(),
		}
	}
}

#[derive(Codec, Clone, Copy, Debug, PartialEq, Default)]
pub struct Abilities {
	pub walk_speed: f32,
	pub fly_speed: f32,
	pub may_fly: bool,
	pub flying: bool,
	pub invulnerable: bool,
}

impl Generate for Abilities {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			walk_speed: rng.gen(),
			fly_speed: rng.gen(),
			may_fly: rng.gen_bool(0.5),
			flying: rng.gen_bool(0.5),
			invulnerable: rng.gen_bool(0.5),
		}
	}
}

#[derive(Codec, Clone, Debug, PartialEq, Default)]
pub struct Entity {
	pub id: String,
	pub pos: [f64; 3],
	pub motion: [f64; 3],
	pub fire: u16,
	pub on_ground: bool,
	pub portal_cooldown: i32,
	pub uuid: [u32; 4],
	pub custom_name: Option<String>,
}

impl Generate for Entity {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const IDS: [&str; 8] = [
			"cow", "sheep", "zombie", "skeleton", "spider", "creeper", "parrot", "bee",
		];
		const CUSTOM_NAMES: [&str; 8] = [
			"rainbow", "princess", "steve", "johnny", "missy", "coward", "fairy", "howard",
		];

		Self {
			id: IDS[rng.gen_range(0..IDS.len())].to_string(),
			pos: [rng.gen(), rng.gen(), rng.gen()],
			motion: [rng.gen(), rng.gen(), rng.gen()],
			fire: rng.gen(),
			on_ground: rng.gen_bool(0.5),
			portal_cooldown: rng.gen(),
			uuid: [rng.gen(), rng.gen(), rng.gen(), rng.gen()],
			custom_name: rng
				.gen_bool(0.5)
				.then(|| CUSTOM_NAMES[rng.gen_range(0..CUSTOM_NAMES.len())].to_string()),
		}
	}
}

#[derive(Codec, Clone, Debug, PartialEq, Default)]
pub struct Player {
	pub game_type: GameType,
	pub previous_game_type: Option<GameType>,
	pub score: i64,
	pub dimension: String,
	pub selected_item_slot: u32,
	pub selected_item: Item,
	pub spawn: Option<[i64; 3]>,
	pub food_exhaustion_level: f32,
	pub xp_level: u32,
	pub xp_total: u64,
	pub health: f64,
	pub inventory: Vec<Item>,
	pub abilities: Abilities,
	pub shoulder_entity: Option<Box<Entity>>,
	pub stats: HashMap<String, u32>,
	pub last_played: Timestamp,
	pub seen_credits: bool,
}

impl Generate for Player {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const DIMENSIONS: [&str; 3] = ["overworld", "nether", "end"];
		const STATS: [&str; 6] = ["jumps", "deaths", "kills", "blocks", "walked", "flown"];
		const MAX_ITEMS: usize = 40;

		let mut stats = HashMap::new();
		for stat in STATS {
			if rng.gen_bool(0.5) {
				stats.insert(stat.to_string(), rng.gen());
			}
		}

		Self {
			game_type: GameType::generate(rng),
			previous_game_type: rng.gen_bool(0.5).then(|| GameType::generate(rng)),
			score: rng.gen(),
			dimension: DIMENSIONS[rng.gen_range(0..DIMENSIONS.len())].to_string(),
			selected_item_slot: rng.gen(),
			selected_item: Item::generate(rng),
			spawn: rng.gen_bool(0.5).then(|| [rng.gen(), rng.gen(), rng.gen()]),
			food_exhaustion_level: rng.gen(),
			xp_level: rng.gen(),
			xp_total: rng.gen(),
			health: rng.gen(),
			inventory: generate_vec(rng, 0..MAX_ITEMS),
			abilities: Abilities::generate(rng),
			shoulder_entity: rng.gen_bool(0.5).then(|| Box::new(Entity::generate(rng))),
			stats,
			last_played: Timestamp::from_ticks(rng.gen_range(0..i64::MAX)),
			seen_credits: rng.gen_bool(0.5),
		}
	}
}

#[derive(Codec, Clone, Debug, PartialEq, Default)]
pub struct Players {
	pub players: Vec<Player>,
}

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

fn generate_vec<R: Rng, T: Generate>(rng: &mut R, range: ops::Range<usize>) -> Vec<T> {
	let len = rng.gen_range(range);
	let mut result = Vec::with_capacity(len);
	for _ in 0..len {
		result.push(T::generate(rng));
	}
	result
}

pub fn generate_data() -> Players {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;

	let mut rng = Lcg64Xsh32::new(STATE, STREAM);

	const PLAYERS: usize = 100;
	Players {
		players: generate_vec::<_, Player>(&mut rng, PLAYERS..PLAYERS + 1),
	}
}
