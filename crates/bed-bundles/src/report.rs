//! Plain-text rendering of bundles.

use std::fmt;

use crate::vacancy::VacancyBundle;

impl fmt::Display for VacancyBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.window().days();
        writeln!(
            f,
            "Bundle {} [{}] ({} day{})",
            self.size(),
            self.window(),
            days,
            if days == 1 { "" } else { "s" }
        )?;
        writeln!(f, "Members:")?;
        for member in self.members() {
            writeln!(f, "\t{member}")?;
        }
        Ok(())
    }
}

/// One block per bundle, separated by blank lines.
///
/// ```text
/// Bundle 2 [2025-01-05 -> 2025-01-10] (5 days)
/// Members:
///     A: [2025-01-01 -> 2025-01-10]
///     B: [2025-01-05 -> 2025-01-15]
/// ```
pub fn format_bundles(bundles: &[VacancyBundle]) -> String {
    bundles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_bundles, BundleConfig, Vacancy};
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_format_two_sizes() {
        let vacancies = [
            Vacancy::new("A", d(1), d(10)).unwrap(),
            Vacancy::new("B", d(5), d(15)).unwrap(),
        ];
        let bundles = compute_bundles(&vacancies, &BundleConfig::new(d(1)));
        let text = format_bundles(&bundles);

        let expected = "\
Bundle 1 [2025-01-05 -> 2025-01-15] (10 days)
Members:
\tB: [2025-01-05 -> 2025-01-15]

Bundle 2 [2025-01-05 -> 2025-01-10] (5 days)
Members:
\tA: [2025-01-01 -> 2025-01-10]
\tB: [2025-01-05 -> 2025-01-15]
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_singular_day() {
        let vacancies = [Vacancy::new(4u64, d(1), d(2)).unwrap()];
        let bundles = compute_bundles(&vacancies, &BundleConfig::new(d(1)));
        assert!(bundles[0].to_string().starts_with("Bundle 1 [2025-01-01 -> 2025-01-02] (1 day)\n"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_bundles(&[]), "");
    }
}
