//! Built-in reference trials.
//!
//! Eight small datasets of eight beds each, all dated 2025. Rows are
//! `(start_month, start_day, end_month, end_day, bed_id)`.

use bed_bundles::Vacancy;
use chrono::NaiveDate;
use tracing::warn;

pub const TRIAL_YEAR: i32 = 2025;

type Row = (u32, u32, u32, u32, u64);

const TRIALS: [[Row; 8]; 8] = [
    [
        (3, 2, 6, 8, 3),
        (3, 15, 12, 21, 0),
        (4, 27, 6, 19, 6),
        (6, 16, 9, 10, 7),
        (6, 30, 8, 11, 1),
        (7, 29, 9, 25, 5),
        (9, 10, 11, 8, 4),
        (11, 16, 12, 26, 2),
    ],
    [
        (1, 18, 6, 30, 7),
        (6, 1, 8, 27, 3),
        (6, 12, 8, 23, 4),
        (6, 28, 12, 24, 6),
        (8, 4, 11, 15, 0),
        (8, 6, 10, 8, 5),
        (9, 29, 11, 28, 2),
        (11, 19, 12, 25, 1),
    ],
    [
        (2, 5, 5, 7, 6),
        (2, 16, 9, 20, 5),
        (2, 19, 11, 23, 4),
        (4, 8, 7, 4, 3),
        (4, 25, 9, 6, 1),
        (4, 29, 7, 13, 2),
        (5, 25, 11, 28, 0),
        (5, 26, 12, 13, 7),
    ],
    [
        (3, 13, 12, 18, 1),
        (4, 3, 10, 6, 5),
        (4, 24, 9, 24, 4),
        (5, 21, 12, 24, 7),
        (8, 22, 10, 7, 3),
        (9, 2, 10, 17, 0),
        (10, 21, 12, 11, 6),
        (10, 25, 12, 10, 2),
    ],
    [
        (1, 11, 3, 28, 1),
        (1, 29, 12, 2, 7),
        (2, 24, 12, 29, 4),
        (2, 28, 11, 26, 2),
        (5, 1, 7, 19, 3),
        (8, 21, 10, 17, 5),
        (8, 26, 10, 23, 0),
        (10, 6, 11, 29, 6),
    ],
    [
        (3, 27, 5, 20, 6),
        (4, 23, 9, 12, 4),
        (7, 23, 10, 16, 1),
        (7, 29, 12, 15, 2),
        (8, 23, 10, 29, 3),
        (10, 12, 12, 12, 7),
        (11, 24, 12, 31, 5),
        (11, 28, 1, 1, 0),
    ],
    [
        (1, 22, 8, 19, 2),
        (4, 20, 8, 4, 5),
        (4, 22, 12, 7, 7),
        (6, 1, 7, 19, 3),
        (6, 14, 10, 17, 6),
        (7, 17, 9, 12, 4),
        (8, 7, 11, 29, 0),
        (8, 22, 12, 10, 1),
    ],
    [
        (1, 18, 5, 19, 0),
        (2, 6, 9, 5, 6),
        (3, 27, 11, 29, 3),
        (5, 7, 6, 18, 5),
        (9, 23, 11, 10, 2),
        (10, 15, 12, 18, 7),
        (11, 11, 12, 29, 1),
        (11, 14, 12, 24, 4),
    ],
];

pub fn count() -> usize {
    TRIALS.len()
}

/// Vacancies of trial `index`, or `None` if there is no such trial.
///
/// Rows whose end date falls before their start date are skipped with a
/// warning.
pub fn load(index: usize) -> Option<Vec<Vacancy>> {
    let rows = TRIALS.get(index)?;
    let vacancies = rows
        .iter()
        .filter_map(|&(sm, sd, em, ed, bed)| {
            let start = NaiveDate::from_ymd_opt(TRIAL_YEAR, sm, sd)?;
            let end = NaiveDate::from_ymd_opt(TRIAL_YEAR, em, ed)?;
            Vacancy::new(bed, start, end)
                .map_err(|e| warn!(trial = index, bed, error = %e, "skipping inverted vacancy"))
                .ok()
        })
        .collect();
    Some(vacancies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trial_loads() {
        for index in 0..count() {
            assert!(load(index).is_some());
        }
        assert!(load(count()).is_none());
    }

    #[test]
    fn test_trial_five_skips_inverted_row() {
        let vacancies = load(5).unwrap();
        assert_eq!(vacancies.len(), 7);
        assert!(vacancies.iter().all(|v| v.bed_id().to_string() != "0"));
    }

    #[test]
    fn test_other_trials_keep_all_rows() {
        for index in (0..count()).filter(|&i| i != 5) {
            assert_eq!(load(index).unwrap().len(), 8, "trial {index}");
        }
    }
}
