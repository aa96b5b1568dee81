//! Updating bundles after a single booking or cancellation.
//!
//! Both entry points are contracts only and currently fail with
//! [`BundleError::NotImplemented`]; callers fall back to a full
//! [`sweep_bundles`](crate::sweep_bundles). The failure is deterministic and
//! not worth retrying.
//!
//! A reservation is assumed to cover whole vacancy windows. Booking part of a
//! window would split vacancies and is out of scope.

use crate::builder::BundleSweep;
use crate::error::{BundleError, Result};
use crate::vacancy::{Reservation, Vacancy};

/// Vacancies and sweep state after applying a reservation.
///
/// The sweep's per-size tie sets are the auxiliary state an incremental
/// implementation would start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementalUpdate {
    pub vacancies: Vec<Vacancy>,
    pub sweep: BundleSweep,
}

/// Take the reserved beds out of availability for the reservation window.
///
/// # Errors
///
/// Always returns [`BundleError::NotImplemented`].
pub fn apply_booking(
    _booking: &Reservation,
    _vacancies: &[Vacancy],
    _sweep: &BundleSweep,
) -> Result<IncrementalUpdate> {
    Err(BundleError::NotImplemented("apply_booking"))
}

/// Put the reserved beds back into availability for the reservation window.
///
/// # Errors
///
/// Always returns [`BundleError::NotImplemented`].
pub fn apply_cancellation(
    _cancellation: &Reservation,
    _vacancies: &[Vacancy],
    _sweep: &BundleSweep,
) -> Result<IncrementalUpdate> {
    Err(BundleError::NotImplemented("apply_cancellation"))
}
