use crate::domain::model::{
    Census, PersonRecord, ValidatedPerson, ValidationPolicy, Year, MAX_YEAR, MIN_YEAR,
};
use crate::utils::error::{BatchRejection, ValidationError};
use std::collections::BTreeMap;

/// Checks one record. The first failing check decides the error:
/// name present, name non-blank, both years present, birth year in range,
/// death year in range, death not before birth.
pub fn validate_record(
    index: usize,
    record: &PersonRecord,
) -> Result<ValidatedPerson, ValidationError> {
    let name = record
        .name
        .as_deref()
        .ok_or(ValidationError::MissingName { index })?;
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { index });
    }

    let (birth_year, death_year) = match (record.birth_year, record.death_year) {
        (Some(birth), Some(death)) => (birth, death),
        _ => {
            return Err(ValidationError::MissingYears {
                index,
                name: name.to_string(),
            })
        }
    };

    let birth = year_in_range(birth_year).ok_or_else(|| ValidationError::BirthYearOutOfRange {
        index,
        name: name.to_string(),
        year: birth_year,
    })?;
    let death = year_in_range(death_year).ok_or_else(|| ValidationError::DeathYearOutOfRange {
        index,
        name: name.to_string(),
        year: death_year,
    })?;
    if death < birth {
        return Err(ValidationError::DeathBeforeBirth {
            index,
            name: name.to_string(),
            birth_year,
            death_year,
        });
    }

    Ok(ValidatedPerson::new(name.to_string(), birth, death))
}

fn year_in_range(year: i64) -> Option<Year> {
    Year::try_from(year)
        .ok()
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
}

/// Accumulates validated people into per-year name lists.
///
/// Consumed by [`CensusBuilder::build`]; a rejected batch never yields a census.
#[derive(Debug, Default)]
pub struct CensusBuilder {
    policy: ValidationPolicy,
    years: BTreeMap<Year, Vec<String>>,
    errors: Vec<ValidationError>,
}

impl CensusBuilder {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn build(mut self, records: &[PersonRecord]) -> Result<Census, BatchRejection> {
        for (index, record) in records.iter().enumerate() {
            match validate_record(index, record) {
                Ok(person) => self.add(&person),
                Err(err) => {
                    tracing::warn!(index, field = err.field(), "{}", err);
                    self.errors.push(err);
                    if self.policy == ValidationPolicy::FailFast {
                        break;
                    }
                }
            }
        }

        if let Some(rejection) = BatchRejection::from_errors(self.errors) {
            tracing::debug!(
                rejected = rejection.len(),
                policy = ?self.policy,
                "validation batch rejected"
            );
            return Err(rejection);
        }

        tracing::debug!(
            people = records.len(),
            years = self.years.len(),
            "census built"
        );
        Ok(Census::from_years(self.years))
    }

    fn add(&mut self, person: &ValidatedPerson) {
        // Nothing from a failing batch is kept, so skip the work.
        if !self.errors.is_empty() {
            return;
        }
        for year in person.lifespan() {
            self.years
                .entry(year)
                .or_default()
                .push(person.name().to_string());
        }
    }
}

/// Builds a census, aborting on the first invalid record.
pub fn build_census(records: &[PersonRecord]) -> Result<Census, ValidationError> {
    CensusBuilder::new(ValidationPolicy::FailFast)
        .build(records)
        .map_err(BatchRejection::into_first)
}
