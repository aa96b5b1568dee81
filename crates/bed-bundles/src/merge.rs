//! Collapsing back-to-back vacancies of the same bed.
//!
//! Two vacancies of one bed are adjacent when the first ends on the date the
//! second starts. The merge is a single left-to-right pass per bed: once a pair
//! is merged the scan moves on, so a chain of three adjacent vacancies comes
//! out as two (the first two merged, the third untouched). Run it again to
//! collapse further.

use std::collections::BTreeMap;

use tracing::trace;

use crate::vacancy::{BedId, Vacancy};
use crate::window::DateWindow;

/// Merge adjacent vacancies per bed, returning new values.
///
/// Output is grouped by bed (ascending bed id), each group ascending by
/// `start_date`. The input is not modified.
///
/// # Examples
///
/// ```
/// use bed_bundles::{merge::combine_adjacent, Vacancy};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let merged = combine_adjacent(&[
///     Vacancy::new("A", d(5), d(10)).unwrap(),
///     Vacancy::new("A", d(1), d(5)).unwrap(),
/// ]);
/// assert_eq!(merged, vec![Vacancy::new("A", d(1), d(10)).unwrap()]);
/// ```
pub fn combine_adjacent(vacancies: &[Vacancy]) -> Vec<Vacancy> {
    let mut by_bed: BTreeMap<&BedId, Vec<DateWindow>> = BTreeMap::new();
    for vacancy in vacancies {
        by_bed
            .entry(vacancy.bed_id())
            .or_default()
            .push(vacancy.window());
    }

    let mut combined = Vec::with_capacity(vacancies.len());
    for (bed_id, mut windows) in by_bed {
        if windows.len() > 1 {
            windows.sort_by_key(DateWindow::start);
            merge_single_pass(bed_id, &mut windows);
        }
        combined.extend(
            windows
                .into_iter()
                .map(|window| Vacancy::from_window(bed_id.clone(), window)),
        );
    }
    combined
}

fn merge_single_pass(bed_id: &BedId, windows: &mut Vec<DateWindow>) {
    let mut i = 0;
    while i + 1 < windows.len() {
        let (current, next) = (windows[i], windows[i + 1]);
        if current.end() == next.start() {
            let end = current.end().max(next.end());
            windows[i] = DateWindow::from_ordered(current.start(), end);
            windows.remove(i + 1);
            trace!(bed = %bed_id, window = %windows[i], "combined adjacent vacancies");
        }
        i += 1;
    }
}
