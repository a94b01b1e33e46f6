//! In-memory post-fetch filtering.
//!
//! The service deliberately does not push multi-criteria predicates into
//! SQL: filter operations call "get all" and apply conjunctive predicates
//! here, skipping any predicate whose value is absent. Date bounds are
//! inclusive; identifier comparisons are exact string equality.

use chrono::NaiveDateTime;
use kauri_model::{LabTestRow, ObservationHistoryEntry};

/// Optional conjunctive predicates over lab-test rows.
#[derive(Debug, Clone, Default)]
pub struct LabTestFilter {
    /// Exact patient id match.
    pub patient_id: Option<String>,
    /// Inclusive lower bound on the message datetime.
    pub start_date: Option<NaiveDateTime>,
    /// Inclusive upper bound on the message datetime.
    pub end_date: Option<NaiveDateTime>,
    /// Exact practice id match.
    pub practice_id: Option<String>,
}

impl LabTestFilter {
    /// True when the row passes every present predicate.
    pub fn matches(&self, row: &LabTestRow) -> bool {
        if let Some(patient_id) = &self.patient_id {
            if row.patient_id.as_deref() != Some(patient_id.as_str()) {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if !row.message_datetime.is_some_and(|d| d >= start) {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if !row.message_datetime.is_some_and(|d| d <= end) {
                return false;
            }
        }
        if let Some(practice_id) = &self.practice_id {
            if row.practice_id.as_deref() != Some(practice_id.as_str()) {
                return false;
            }
        }
        true
    }

    /// Applies the filter to a fetched dataset.
    pub fn apply(&self, rows: Vec<LabTestRow>) -> Vec<LabTestRow> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

/// Inclusive date-range filter over a fetched dataset.
pub fn by_date_range(
    rows: Vec<LabTestRow>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<LabTestRow> {
    LabTestFilter {
        start_date: Some(start),
        end_date: Some(end),
        ..Default::default()
    }
    .apply(rows)
}

/// Optional in-memory filters over observation history entries.
pub fn history_entries(
    entries: Vec<ObservationHistoryEntry>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    panel_type: Option<&str>,
) -> Vec<ObservationHistoryEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            if let Some(start) = start {
                if !entry.observation_date_time.is_some_and(|d| d >= start) {
                    return false;
                }
            }
            if let Some(end) = end {
                if !entry.observation_date_time.is_some_and(|d| d <= end) {
                    return false;
                }
            }
            if let Some(panel) = panel_type {
                if !entry
                    .panel_type
                    .as_deref()
                    .is_some_and(|p| p.eq_ignore_ascii_case(panel))
                {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn row(patient: &str, practice: &str, when: NaiveDateTime) -> LabTestRow {
        LabTestRow {
            patient_id: Some(patient.to_string()),
            practice_id: Some(practice.to_string()),
            message_datetime: Some(when),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let rows = vec![row("P001", "PR1", at(2024, 1, 10)), LabTestRow::default()];
        let filtered = LabTestFilter::default().apply(rows);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let rows = vec![
            row("P001", "PR1", at(2024, 1, 1)),
            row("P002", "PR1", at(2024, 1, 15)),
            row("P003", "PR1", at(2024, 1, 31)),
            row("P004", "PR1", at(2024, 2, 1)),
        ];
        let filtered = by_date_range(rows, at(2024, 1, 1), at(2024, 1, 31));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_conjunctive_predicates() {
        let rows = vec![
            row("P001", "PR1", at(2024, 1, 10)),
            row("P001", "PR2", at(2024, 1, 10)),
            row("P002", "PR1", at(2024, 1, 10)),
        ];
        let filter = LabTestFilter {
            patient_id: Some("P001".to_string()),
            practice_id: Some("PR1".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(rows);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_rows_without_dates_fail_date_predicates() {
        let rows = vec![LabTestRow::default()];
        let filtered = by_date_range(rows, at(2000, 1, 1), at(2100, 1, 1));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_history_panel_filter_ignores_case() {
        let entries = vec![
            ObservationHistoryEntry {
                panel_type: Some("CBC".to_string()),
                observation_date_time: Some(at(2024, 3, 1)),
                ..Default::default()
            },
            ObservationHistoryEntry {
                panel_type: Some("Lipids".to_string()),
                observation_date_time: Some(at(2024, 3, 1)),
                ..Default::default()
            },
        ];
        let filtered = history_entries(entries, None, None, Some("cbc"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].panel_type.as_deref(), Some("CBC"));
    }
}
