//! # bed-bundles
//!
//! Longest shared availability windows for groups of travelers.
//!
//! Given bed vacancies (one bed, one inclusive date range each), find for
//! every party size n the longest date range during which n distinct beds are
//! all free, and which vacancies make it up.
//!
//! ## Modules
//!
//! - [`window`] — Inclusive date windows, overlap and length
//! - [`vacancy`] — Bed ids, vacancies, bundles and reservations
//! - [`merge`] — Collapse back-to-back vacancies of the same bed
//! - [`identity`] — Bed membership and duplicate bundle detection
//! - [`config`] — Preprocessing switches and the reference date
//! - [`builder`] — The size-by-size bundle sweep
//! - [`incremental`] — Booking/cancellation update contracts
//! - [`report`] — Plain-text bundle report
//! - [`error`] — Error types

pub mod builder;
pub mod config;
pub mod error;
pub mod identity;
pub mod incremental;
pub mod merge;
pub mod report;
pub mod vacancy;
pub mod window;

pub use builder::{compute_bundles, sweep_bundles, BundleSweep, Comparator};
pub use config::BundleConfig;
pub use error::BundleError;
pub use incremental::{apply_booking, apply_cancellation, IncrementalUpdate};
pub use report::format_bundles;
pub use vacancy::{BedId, Reservation, Vacancy, VacancyBundle};
pub use window::{length, overlap, DateWindow};
