//! Census and peak invariants checked over generated batches.

use liveliest_year::app::generator::generate_people;
use liveliest_year::domain::model::{PersonRecord, Year, MAX_YEAR, MIN_YEAR};
use liveliest_year::{build_census, find_peak};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn lifespan(record: &PersonRecord) -> std::ops::RangeInclusive<i64> {
    record.birth_year.unwrap()..=record.death_year.unwrap()
}

#[test]
fn test_census_membership_is_complete_for_generated_batches() {
    for seed in 0..10 {
        let people = generate_people(&mut StdRng::seed_from_u64(seed), 200);
        let census = build_census(&people).unwrap();

        for year in MIN_YEAR..=MAX_YEAR {
            let expected = people
                .iter()
                .filter(|p| lifespan(p).contains(&i64::from(year)))
                .count();
            assert_eq!(census.occupancy(year), expected, "seed {} year {}", seed, year);
        }
        assert!(census.iter().all(|(_, names)| !names.is_empty()));
    }
}

#[test]
fn test_peak_matches_maximum_occupancy_for_generated_batches() {
    for seed in 0..10 {
        let people = generate_people(&mut StdRng::seed_from_u64(seed), 300);
        let census = build_census(&people).unwrap();
        let peak = find_peak(&census);

        let max = (MIN_YEAR..=MAX_YEAR)
            .map(|year| census.occupancy(year))
            .max()
            .unwrap_or(0);
        let years: Vec<Year> = (MIN_YEAR..=MAX_YEAR)
            .filter(|year| max > 0 && census.occupancy(*year) == max)
            .collect();

        assert_eq!(peak.max_count, max);
        assert_eq!(peak.liveliest_years, years);
        assert_eq!(find_peak(&census), peak);
    }
}
