//! Inclusive calendar-date windows and their intersection geometry.
//!
//! A [`DateWindow`] covers every date from `start` through `end`, both
//! inclusive. Its [`length`] is `end - start`, so a single-day window has a
//! length of zero and is still a valid, non-empty window.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{BundleError, Result};

/// An inclusive `[start, end]` range of calendar dates.
///
/// # Invariants
///
/// `start <= end`, checked by [`DateWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawWindow> for DateWindow {
    type Error = BundleError;

    fn try_from(raw: RawWindow) -> Result<Self> {
        DateWindow::new(raw.start, raw.end)
    }
}

impl DateWindow {
    /// Create a window, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::InvalidWindow`] if `start` is after `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bed_bundles::window::DateWindow;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
    /// assert!(DateWindow::new(d(1), d(10)).is_ok());
    /// assert!(DateWindow::new(d(10), d(1)).is_err());
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(BundleError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a window from bounds already known to be ordered.
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "window bounds out of order");
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Length of the window, see [`length`].
    pub fn length(&self) -> Duration {
        length(self)
    }

    /// Whole days between `start` and `end`.
    pub fn days(&self) -> i64 {
        self.length().num_days()
    }

    /// Whether `other` lies entirely inside this window.
    pub fn contains(&self, other: &DateWindow) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Intersection of two windows, or `None` when they share no date.
///
/// Windows touching on a single date (`a.end == b.start`) overlap on that
/// date and yield a zero-length window.
///
/// # Examples
///
/// ```
/// use bed_bundles::window::{overlap, DateWindow};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let a = DateWindow::new(d(1), d(10)).unwrap();
/// let b = DateWindow::new(d(5), d(15)).unwrap();
/// assert_eq!(overlap(&a, &b), Some(DateWindow::new(d(5), d(10)).unwrap()));
/// ```
pub fn overlap(a: &DateWindow, b: &DateWindow) -> Option<DateWindow> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    (start <= end).then_some(DateWindow { start, end })
}

/// `end - start` of a window; never negative.
pub fn length(window: &DateWindow) -> Duration {
    window.end - window.start
}
