//! Chronological aggregation of extracted records.

use serde::Serialize;

use crate::ReportRecord;

/// Rank a semester token for chronological ordering within a year.
///
/// Spring precedes Fall in an academic-year sequence. Matching is
/// case-insensitive; anything else (including the empty string from an
/// unparsed filename) ranks after both known semesters, but such records
/// are kept, never dropped.
pub fn semester_rank(semester: &str) -> u8 {
    if semester.eq_ignore_ascii_case("spring") {
        1
    } else if semester.eq_ignore_ascii_case("fall") {
        2
    } else {
        3
    }
}

/// The pipeline's output: records in canonical chronological order.
///
/// Built once per batch run and read-only afterwards. Sort key is
/// (academic year as a string — 4-digit years compare correctly
/// lexicographically — then semester rank). The sort is stable, so records
/// sharing empty keys keep their relative order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<ReportRecord>,
}

impl ResultSet {
    /// Sort an unordered batch of records into the canonical sequence.
    /// Performs no filtering: record count in equals record count out.
    pub fn from_records(mut records: Vec<ReportRecord>) -> Self {
        records.sort_by(|a, b| {
            (a.academic_year.as_str(), semester_rank(&a.semester))
                .cmp(&(b.academic_year.as_str(), semester_rank(&b.semester)))
        });
        Self { records }
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ReportRecord;
    type IntoIter = std::slice::Iter<'a, ReportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, semester: &str) -> ReportRecord {
        ReportRecord::compose(&format!("{}_{}_Report.pdf", year, semester), "")
    }

    #[test]
    fn orders_spring_before_fall_within_a_year() {
        let set = ResultSet::from_records(vec![
            record("2023", "Fall"),
            record("2022", "Spring"),
            record("2023", "Spring"),
        ]);
        let periods: Vec<&str> = set.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, vec!["2022 Spring", "2023 Spring", "2023 Fall"]);
    }

    #[test]
    fn rank_is_case_insensitive() {
        assert_eq!(semester_rank("spring"), 1);
        assert_eq!(semester_rank("FALL"), 2);
        assert_eq!(semester_rank(""), 3);
        assert_eq!(semester_rank("Summer"), 3);
    }

    #[test]
    fn unparsed_periods_sort_last_within_year_but_are_kept() {
        let unparsed = ReportRecord::compose("scratch.pdf", "");
        let set = ResultSet::from_records(vec![
            record("2023", "Fall"),
            unparsed.clone(),
            record("2023", "Spring"),
        ]);
        assert_eq!(set.len(), 3);
        // Empty year sorts before any 4-digit year lexicographically.
        assert_eq!(set.records()[0], unparsed);
    }

    #[test]
    fn empty_batch_yields_empty_set() {
        let set = ResultSet::from_records(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let records = vec![
            record("2021", "Fall"),
            record("2021", "Spring"),
            record("2020", "fall"),
        ];
        let once = ResultSet::from_records(records.clone());
        let twice = ResultSet::from_records(once.records().to_vec());
        assert_eq!(once.records(), twice.records());
    }
}
