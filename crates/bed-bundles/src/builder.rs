//! The size-by-size sweep that builds vacancy bundles.
//!
//! Size 1 is seeded straight from the vacancies. Size 2 pairs every vacancy
//! with every later vacancy in start-date order. From size 3 on, every vacancy
//! is tried against every bundle tied for longest at the previous size. At
//! each size only the bundles whose shared window is the longest survive (the
//! tie set); the earliest-starting one is that size's answer and the whole tie
//! set seeds the next size.
//!
//! A bundle at size `n` is a previous-size bundle narrowed by one more
//! vacancy, so its window can never be longer than the longest window at
//! `n - 1`. Once a size produces nothing the sweep stops.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::Duration;
use tracing::{debug, instrument, trace};

use crate::config::BundleConfig;
use crate::identity::{bundle_already_present, bundle_contains_bed};
use crate::merge::combine_adjacent;
use crate::vacancy::{BedId, Vacancy, VacancyBundle};
use crate::window::{overlap, DateWindow};

// ── Comparator ──────────────────────────────────────────────────────────────

/// What a vacancy is compared against when growing a size: a raw vacancy
/// (size 2) or a bundle from the previous size (size 3 and up).
#[derive(Debug, Clone, Copy)]
pub enum Comparator<'a> {
    Vacancy(&'a Vacancy),
    Bundle(&'a VacancyBundle),
}

impl<'a> Comparator<'a> {
    pub fn window(&self) -> DateWindow {
        match self {
            Comparator::Vacancy(v) => v.window(),
            Comparator::Bundle(b) => b.window(),
        }
    }

    pub fn bed_ids(&self) -> BTreeSet<&'a BedId> {
        match *self {
            Comparator::Vacancy(v) => BTreeSet::from([v.bed_id()]),
            Comparator::Bundle(b) => b.bed_ids().collect(),
        }
    }

    /// Whether `vacancy`'s bed is already part of this comparator.
    pub fn contains_bed_of(&self, vacancy: &Vacancy) -> bool {
        match self {
            Comparator::Vacancy(v) => v.bed_id() == vacancy.bed_id(),
            Comparator::Bundle(b) => bundle_contains_bed(b, vacancy),
        }
    }

    /// A bundle of `vacancy` followed by this comparator's members, sharing
    /// `window`.
    fn extend(&self, vacancy: &Vacancy, window: DateWindow) -> VacancyBundle {
        match self {
            Comparator::Vacancy(v) => {
                VacancyBundle::from_parts(window, vec![vacancy.clone(), (*v).clone()])
            }
            Comparator::Bundle(b) => b.extend_with(vacancy, window),
        }
    }
}

// ── Tie tracking ────────────────────────────────────────────────────────────

/// Longest-window candidates seen so far for one size.
#[derive(Debug, Default)]
struct TieSet {
    best: Option<Duration>,
    bundles: Vec<VacancyBundle>,
}

impl TieSet {
    /// Strictly longer replaces, equal length joins, shorter is dropped.
    ///
    /// `build` only runs when the window qualifies. With `dedupe` set, a
    /// candidate equal to a bundle already in the set is not added again.
    fn offer(&mut self, window: DateWindow, dedupe: bool, build: impl FnOnce() -> VacancyBundle) {
        let length = window.length();
        match self.best.map(|best| length.cmp(&best)) {
            None | Some(Ordering::Greater) => {
                self.best = Some(length);
                self.bundles.clear();
                self.bundles.push(build());
                trace!(days = length.num_days(), %window, "new longest window");
            }
            Some(Ordering::Equal) => {
                let candidate = build();
                if dedupe && bundle_already_present(&self.bundles, &candidate) {
                    trace!(%window, "skipping bundle with same beds and dates");
                    return;
                }
                self.bundles.push(candidate);
            }
            Some(Ordering::Less) => {}
        }
    }

    fn into_bundles(self) -> Vec<VacancyBundle> {
        self.bundles
    }
}

// ── Sweep ───────────────────────────────────────────────────────────────────

/// Outcome of a full sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleSweep {
    vacancies: Vec<Vacancy>,
    winners: Vec<VacancyBundle>,
    tie_sets: Vec<Vec<VacancyBundle>>,
}

impl BundleSweep {
    /// The vacancies after merging, expiry filtering and sorting.
    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    /// One bundle per reached size, ascending from size 1.
    pub fn bundles(&self) -> &[VacancyBundle] {
        &self.winners
    }

    /// Every bundle tied for the longest window at `size`, earliest start
    /// first. `None` past the largest reached size.
    pub fn ties(&self, size: usize) -> Option<&[VacancyBundle]> {
        size.checked_sub(1)
            .and_then(|idx| self.tie_sets.get(idx))
            .map(Vec::as_slice)
    }

    /// Largest group size for which a bundle exists.
    pub fn max_size(&self) -> usize {
        self.winners.len()
    }

    pub fn into_bundles(self) -> Vec<VacancyBundle> {
        self.winners
    }
}

/// Longest shared window for every reachable group size.
///
/// Returns one bundle per size, ascending and contiguous from size 1. An empty
/// input, or one where no two vacancies overlap, simply yields fewer sizes.
///
/// # Examples
///
/// ```
/// use bed_bundles::{compute_bundles, BundleConfig, Vacancy};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
/// let vacancies = vec![
///     Vacancy::new("A", d(1), d(10)).unwrap(),
///     Vacancy::new("B", d(5), d(15)).unwrap(),
/// ];
/// let bundles = compute_bundles(&vacancies, &BundleConfig::new(d(1)));
///
/// assert_eq!(bundles.len(), 2);
/// assert_eq!(bundles[0].members()[0].bed_id().to_string(), "B");
/// assert_eq!(bundles[1].window().days(), 5);
/// ```
pub fn compute_bundles(vacancies: &[Vacancy], config: &BundleConfig) -> Vec<VacancyBundle> {
    sweep_bundles(vacancies, config).into_bundles()
}

/// Same as [`compute_bundles`], keeping the tie set of every size and the
/// preprocessed vacancies.
#[instrument(level = "debug", skip_all, fields(vacancies = vacancies.len()))]
pub fn sweep_bundles(vacancies: &[Vacancy], config: &BundleConfig) -> BundleSweep {
    if vacancies.is_empty() {
        return BundleSweep::default();
    }

    let working = prepare(vacancies, config);
    let mut winners = Vec::new();
    let mut tie_sets: Vec<Vec<VacancyBundle>> = Vec::new();

    for size in 1..=working.len() {
        let previous: &[VacancyBundle] = tie_sets.last().map(Vec::as_slice).unwrap_or(&[]);
        let mut ties = match size {
            1 => seed_singles(&working),
            2 => {
                let slice = working.as_slice();
                extend_level(slice, move |i| slice[i + 1..].iter().map(Comparator::Vacancy))
            }
            _ => extend_level(&working, move |_| previous.iter().map(Comparator::Bundle)),
        };

        if ties.is_empty() {
            debug!(size, "no bundle found, stopping");
            break;
        }

        ties.sort_by_key(VacancyBundle::start_date);
        let winner = ties[0].clone();
        debug!(
            size,
            days = winner.length().num_days(),
            ties = ties.len(),
            window = %winner.window(),
            "selected bundle"
        );
        winners.push(winner);
        tie_sets.push(ties);
    }

    BundleSweep {
        vacancies: working,
        winners,
        tie_sets,
    }
}

/// Merge, drop expired, sort by start date.
fn prepare(vacancies: &[Vacancy], config: &BundleConfig) -> Vec<Vacancy> {
    let mut working = if config.combine_adjacent_vacancies {
        let merged = combine_adjacent(vacancies);
        if merged.len() < vacancies.len() {
            debug!(
                combined = vacancies.len() - merged.len(),
                "combined adjacent vacancies"
            );
        }
        merged
    } else {
        vacancies.to_vec()
    };

    if config.remove_expired_vacancies {
        let before = working.len();
        working.retain(|v| v.end_date() >= config.today);
        let removed = before - working.len();
        if removed > 0 {
            debug!(removed, today = %config.today, "removed expired vacancies");
        }
    }

    working.sort_by_key(Vacancy::start_date);
    working
}

fn seed_singles(working: &[Vacancy]) -> Vec<VacancyBundle> {
    let mut ties = TieSet::default();
    for vacancy in working {
        ties.offer(vacancy.window(), false, || {
            VacancyBundle::single(vacancy.clone())
        });
    }
    ties.into_bundles()
}

/// Try every vacancy against the comparators `comparators(i)` yields for its
/// position `i`.
fn extend_level<'a, F, I>(working: &'a [Vacancy], comparators: F) -> Vec<VacancyBundle>
where
    F: Fn(usize) -> I,
    I: IntoIterator<Item = Comparator<'a>>,
{
    let mut ties = TieSet::default();
    for (i, vacancy) in working.iter().enumerate() {
        for comparator in comparators(i) {
            if comparator.contains_bed_of(vacancy) {
                trace!(bed = %vacancy.bed_id(), "bed already in bundle");
                continue;
            }
            let Some(window) = overlap(&vacancy.window(), &comparator.window()) else {
                continue;
            };
            ties.offer(window, true, || comparator.extend(vacancy, window));
        }
    }
    ties.into_bundles()
}
