//! Bed membership and duplicate detection for bundles.
//!
//! The sweep can reach the same member set through different build orders
//! (A extended with B, B extended with A). Two bundles are the same bundle
//! when they hold the same vacancies, regardless of member order.

use crate::vacancy::{Vacancy, VacancyBundle};

/// Whether `bundle` already has a member on `vacancy`'s bed.
pub fn bundle_contains_bed(bundle: &VacancyBundle, vacancy: &Vacancy) -> bool {
    bundle.bed_ids().any(|bed| bed == vacancy.bed_id())
}

/// Set-equality of members under exact `(bed_id, start_date, end_date)`
/// equality.
///
/// Member bed ids are distinct within a bundle, so equal length plus every
/// member of `a` being found in `b` is enough.
pub fn bundles_equal(a: &VacancyBundle, b: &VacancyBundle) -> bool {
    a.members().len() == b.members().len()
        && a.members().iter().all(|m| b.members().contains(m))
}

/// Whether any bundle in `known` equals `candidate` per [`bundles_equal`].
pub fn bundle_already_present(known: &[VacancyBundle], candidate: &VacancyBundle) -> bool {
    known.iter().any(|b| bundles_equal(b, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::DateWindow;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn v(bed: &str, start: u32, end: u32) -> Vacancy {
        Vacancy::new(bed, d(start), d(end)).unwrap()
    }

    fn bundle(members: &[Vacancy]) -> VacancyBundle {
        let window = DateWindow::new(d(5), d(10)).unwrap();
        VacancyBundle::from_parts(window, members.to_vec())
    }

    #[test]
    fn test_contains_bed_matches_on_bed_only() {
        let b = bundle(&[v("A", 1, 10), v("B", 5, 15)]);
        // Same bed, different dates still counts as the bed being in use
        assert!(bundle_contains_bed(&b, &v("A", 20, 25)));
        assert!(!bundle_contains_bed(&b, &v("C", 1, 10)));
    }

    #[test]
    fn test_equal_ignores_member_order() {
        let ab = bundle(&[v("A", 1, 10), v("B", 5, 15)]);
        let ba = bundle(&[v("B", 5, 15), v("A", 1, 10)]);
        assert!(bundles_equal(&ab, &ba));
    }

    #[test]
    fn test_equal_requires_same_dates() {
        let ab = bundle(&[v("A", 1, 10), v("B", 5, 15)]);
        let ab_other = bundle(&[v("A", 1, 10), v("B", 4, 15)]);
        assert!(!bundles_equal(&ab, &ab_other));
    }

    #[test]
    fn test_equal_requires_same_size() {
        let ab = bundle(&[v("A", 1, 10), v("B", 5, 15)]);
        let abc = bundle(&[v("A", 1, 10), v("B", 5, 15), v("C", 2, 12)]);
        assert!(!bundles_equal(&ab, &abc));
        assert!(!bundles_equal(&abc, &ab));
    }

    #[test]
    fn test_already_present() {
        let known = vec![
            bundle(&[v("A", 1, 10), v("C", 2, 12)]),
            bundle(&[v("A", 1, 10), v("B", 5, 15)]),
        ];
        assert!(bundle_already_present(
            &known,
            &bundle(&[v("B", 5, 15), v("A", 1, 10)])
        ));
        assert!(!bundle_already_present(
            &known,
            &bundle(&[v("B", 5, 15), v("C", 2, 12)])
        ));
        assert!(!bundle_already_present(&[], &known[0]));
    }
}
