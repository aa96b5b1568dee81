//! Vacancies, bundles of vacancies, and reservations.
//!
//! A [`Vacancy`] is one bed's availability window. A [`VacancyBundle`] is a
//! set of vacancies on pairwise distinct beds together with the window they
//! all share. Both are immutable once built: extending a bundle produces a new
//! bundle owning its own copy of the member list.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{BundleError, Result};
use crate::window::DateWindow;

// ── BedId ───────────────────────────────────────────────────────────────────

/// Opaque bed identifier, either numeric or textual.
///
/// Deserializes from a JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BedId {
    Number(u64),
    Name(String),
}

impl fmt::Display for BedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedId::Number(n) => write!(f, "{n}"),
            BedId::Name(s) => f.write_str(s),
        }
    }
}

impl From<u64> for BedId {
    fn from(n: u64) -> Self {
        BedId::Number(n)
    }
}

impl From<&str> for BedId {
    fn from(s: &str) -> Self {
        BedId::Name(s.to_string())
    }
}

impl From<String> for BedId {
    fn from(s: String) -> Self {
        BedId::Name(s)
    }
}

// ── Vacancy ─────────────────────────────────────────────────────────────────

/// An availability window for exactly one bed.
///
/// # Invariants
///
/// `start_date <= end_date`, enforced on construction and deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVacancy")]
pub struct Vacancy {
    bed_id: BedId,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawVacancy {
    bed_id: BedId,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawVacancy> for Vacancy {
    type Error = BundleError;

    fn try_from(raw: RawVacancy) -> Result<Self> {
        Vacancy::new(raw.bed_id, raw.start_date, raw.end_date)
    }
}

impl Vacancy {
    /// Create a vacancy for `bed_id` free from `start_date` through `end_date`.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::InvalidWindow`] if `start_date > end_date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bed_bundles::Vacancy;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    /// let vacancy = Vacancy::new("A", start, end).unwrap();
    /// assert_eq!(vacancy.window().days(), 9);
    /// ```
    pub fn new(bed_id: impl Into<BedId>, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        let window = DateWindow::new(start_date, end_date)?;
        Ok(Self::from_window(bed_id.into(), window))
    }

    pub(crate) fn from_window(bed_id: BedId, window: DateWindow) -> Self {
        Self {
            bed_id,
            start_date: window.start(),
            end_date: window.end(),
        }
    }

    pub fn bed_id(&self) -> &BedId {
        &self.bed_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn window(&self) -> DateWindow {
        DateWindow::from_ordered(self.start_date, self.end_date)
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.bed_id, self.window())
    }
}

// ── VacancyBundle ───────────────────────────────────────────────────────────

/// A window shared by `size` vacancies on distinct beds.
///
/// # Invariants
///
/// - `size == members.len()`
/// - member bed ids are pairwise distinct
/// - `[start_date, end_date]` lies within every member's window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacancyBundle {
    size: usize,
    start_date: NaiveDate,
    end_date: NaiveDate,
    members: Vec<Vacancy>,
}

impl VacancyBundle {
    /// A size-1 bundle spanning the vacancy's own window.
    pub(crate) fn single(vacancy: Vacancy) -> Self {
        let window = vacancy.window();
        Self::from_parts(window, vec![vacancy])
    }

    /// A bundle over `members` sharing `window`.
    pub(crate) fn from_parts(window: DateWindow, members: Vec<Vacancy>) -> Self {
        Self {
            size: members.len(),
            start_date: window.start(),
            end_date: window.end(),
            members,
        }
    }

    /// A new bundle with `vacancy` placed ahead of this bundle's members,
    /// narrowed to `window`. `self` is left untouched.
    pub(crate) fn extend_with(&self, vacancy: &Vacancy, window: DateWindow) -> Self {
        let mut members = Vec::with_capacity(self.members.len() + 1);
        members.push(vacancy.clone());
        members.extend(self.members.iter().cloned());
        Self::from_parts(window, members)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn window(&self) -> DateWindow {
        DateWindow::from_ordered(self.start_date, self.end_date)
    }

    pub fn length(&self) -> Duration {
        self.window().length()
    }

    pub fn members(&self) -> &[Vacancy] {
        &self.members
    }

    pub fn bed_ids(&self) -> impl Iterator<Item = &BedId> {
        self.members.iter().map(Vacancy::bed_id)
    }
}

// ── Reservation ─────────────────────────────────────────────────────────────

/// An accepted or cancelled booking of whole vacancy windows on one or more
/// beds. Only used by the incremental update entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReservation")]
pub struct Reservation {
    reservation_id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    bed_ids: Vec<BedId>,
}

#[derive(Deserialize)]
struct RawReservation {
    reservation_id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    bed_ids: Vec<BedId>,
}

impl TryFrom<RawReservation> for Reservation {
    type Error = BundleError;

    fn try_from(raw: RawReservation) -> Result<Self> {
        Reservation::new(raw.reservation_id, raw.start_date, raw.end_date, raw.bed_ids)
    }
}

impl Reservation {
    /// # Errors
    ///
    /// Returns [`BundleError::InvalidWindow`] if `start_date > end_date`.
    pub fn new(
        reservation_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        bed_ids: Vec<BedId>,
    ) -> Result<Self> {
        DateWindow::new(start_date, end_date)?;
        Ok(Self {
            reservation_id: reservation_id.into(),
            start_date,
            end_date,
            bed_ids,
        })
    }

    pub fn reservation_id(&self) -> &str {
        &self.reservation_id
    }

    pub fn window(&self) -> DateWindow {
        DateWindow::from_ordered(self.start_date, self.end_date)
    }

    pub fn bed_ids(&self) -> &[BedId] {
        &self.bed_ids
    }
}
