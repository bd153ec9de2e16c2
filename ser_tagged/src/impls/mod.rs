mod collections;
mod other;
mod primitives;
mod ptrs;
mod time;

pub use time::Timestamp;
