#![allow(dead_code)]

use rand::Rng;
use rand_pcg::Lcg64Xsh32;
use ser_schema::{Array, ComplexType};

#[derive(ComplexType, Clone, PartialEq)]
#[complex(id = "user-profile")]
pub struct Profile {
	pub first_name: String,
	pub last_name: String,
	pub age: u8,
	pub female: bool,
}

impl Profile {
	pub fn kuyugama() -> Self {
		Self {
			first_name: "Kuyugama".to_string(),
			last_name: "Hikamiya".to_string(),
			age: 24,
			female: false,
		}
	}
}

#[derive(ComplexType, Clone, PartialEq)]
pub struct Team {
	pub name: String,
	pub lead: Profile,
	pub members: Array<Profile>,
	pub scores: Array<u16>,
	pub tags: Array<Array<char>>,
	pub rating: f32,
	pub balance: i64,
	pub funds: f64,
	pub code: u32,
	pub level: i8,
	pub offset: i16,
	pub region: i32,
	pub serial: u64,
}

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

macro_rules! impl_generate {
	($ty:ty) => {
		impl Generate for $ty {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				rng.gen()
			}
		}
	};
}

impl_generate!(bool);
impl_generate!(u8);
impl_generate!(u16);
impl_generate!(u32);
impl_generate!(u64);
impl_generate!(i8);
impl_generate!(i16);
impl_generate!(i32);
impl_generate!(i64);
impl_generate!(f32);
impl_generate!(f64);

impl Generate for char {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		char::from(rng.gen::<u8>())
	}
}

impl Generate for String {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const CHARS: [char; 10] = ['a', 'b', 'z', 'A', 'Z', '0', ' ', 'é', 'ß', '日'];
		let len = rng.gen_range(0..16);
		(0..len)
			.map(|_| CHARS[rng.gen_range(0..CHARS.len())])
			.collect()
	}
}

impl<T: Generate> Generate for Array<T> {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		let len = rng.gen_range(0..6);
		(0..len).map(|_| T::generate(rng)).collect()
	}
}

impl Generate for Profile {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			first_name: String::generate(rng),
			last_name: String::generate(rng),
			age: rng.gen_range(0..120),
			female: rng.gen(),
		}
	}
}

impl Generate for Team {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			name: String::generate(rng),
			lead: Profile::generate(rng),
			members: Array::generate(rng),
			scores: Array::generate(rng),
			tags: Array::generate(rng),
			rating: f32::generate(rng),
			balance: i64::generate(rng),
			funds: f64::generate(rng),
			code: u32::generate(rng),
			level: i8::generate(rng),
			offset: i16::generate(rng),
			region: i32::generate(rng),
			serial: u64::generate(rng),
		}
	}
}

pub fn generate_teams(count: usize) -> Vec<Team> {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;

	let mut rng = Lcg64Xsh32::new(STATE, STREAM);
	(0..count).map(|_| Team::generate(&mut rng)).collect()
}
