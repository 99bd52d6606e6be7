//! Random people lists for exercising the census on larger inputs.

use crate::domain::model::{PersonRecord, Year, MAX_YEAR, MIN_YEAR};
use crate::utils::error::Result;
use rand::Rng;
use serde::Serialize;

pub const MIN_PEOPLE: usize = 1;
pub const MAX_PEOPLE: usize = 9001;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Beatrice", "Carl", "Dorothy", "Edsger", "Emmy", "Frances", "Grace",
    "Hedy", "Ida", "John", "Katherine", "Leslie", "Margaret", "Niklaus", "Radia", "Sophie",
    "Tim", "Vint",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Babbage", "Cerf", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Knuth",
    "Lamarr", "Lamport", "Liskov", "Lovelace", "Noether", "Perlman", "Shannon", "Turing",
    "Wilson", "Wirth",
];

/// Generates `count` valid people. Birth years are uniform over the accepted
/// range and each death year is uniform over `[birth, MAX_YEAR]`.
pub fn generate_people<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<PersonRecord> {
    (0..count)
        .map(|_| {
            let birth_year: Year = rng.gen_range(MIN_YEAR..=MAX_YEAR);
            let death_year: Year = rng.gen_range(birth_year..=MAX_YEAR);
            let name = format!(
                "{} {}",
                FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())],
                LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())]
            );
            PersonRecord::new(name, i64::from(birth_year), i64::from(death_year))
        })
        .collect()
}

/// Serializes people as a tab-indented JSON array.
pub fn to_tab_indented_json(people: &[PersonRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    people.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}
