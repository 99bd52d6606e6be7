use crate::domain::model::{Census, LiveliestYearsReport, PeakReport, YearEntry};

/// Finds the highest occupancy in the census and every year that reaches it.
///
/// Years come out in ascending order. An empty census gives a zero count and
/// no years.
pub fn find_peak(census: &Census) -> PeakReport {
    let mut peak = PeakReport::default();

    for (year, names) in census.iter() {
        let count = names.len();
        if count == 0 {
            continue;
        }
        if count > peak.max_count {
            peak.max_count = count;
            peak.liveliest_years.clear();
            peak.liveliest_years.push(year);
        } else if count == peak.max_count {
            peak.liveliest_years.push(year);
        }
    }

    peak
}

impl LiveliestYearsReport {
    /// Pairs each liveliest year with the names alive that year.
    pub fn compose(census: &Census, peak: &PeakReport) -> Self {
        let years = peak
            .liveliest_years
            .iter()
            .map(|&year| YearEntry {
                year,
                names: census.names(year).map(<[String]>::to_vec).unwrap_or_default(),
            })
            .collect();

        Self {
            max_count: peak.max_count,
            years,
        }
    }
}
