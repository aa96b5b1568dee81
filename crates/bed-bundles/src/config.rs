//! Options for a bundle computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Preprocessing switches and the reference date for one computation.
///
/// There is no clock access in this crate: the caller supplies `today`.
///
/// # Examples
///
/// ```
/// use bed_bundles::BundleConfig;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let config = BundleConfig::new(today).with_combine_adjacent_vacancies(false);
/// assert!(config.remove_expired_vacancies);
/// assert!(!config.combine_adjacent_vacancies);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Drop vacancies whose `end_date` is before `today`.
    pub remove_expired_vacancies: bool,
    /// Merge back-to-back vacancies of the same bed before the sweep.
    pub combine_adjacent_vacancies: bool,
    /// Reference date for expiry.
    pub today: NaiveDate,
}

impl BundleConfig {
    /// Both preprocessing steps enabled.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            remove_expired_vacancies: true,
            combine_adjacent_vacancies: true,
            today,
        }
    }

    pub fn with_remove_expired_vacancies(mut self, enabled: bool) -> Self {
        self.remove_expired_vacancies = enabled;
        self
    }

    pub fn with_combine_adjacent_vacancies(mut self, enabled: bool) -> Self {
        self.combine_adjacent_vacancies = enabled;
        self
    }
}
