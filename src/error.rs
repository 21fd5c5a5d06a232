//! Error taxonomy for the rise/set engine.
//!
//! Every failure aborts the whole year's computation: band assembly and DST
//! tracking require complete, ordered daily coverage, so no error is
//! recovered mid-year and no partial result is ever returned.

use chrono::NaiveDate;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Latitude or longitude outside the supported ranges. Rejected before
    /// any per-day computation begins.
    #[error("invalid location: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },

    /// The astronomical source could not produce a result for a date. The
    /// formula is deterministic, so this is never retried.
    #[error("astronomical computation failed for {date}: {reason}")]
    AstronomicalComputationFailed { date: NaiveDate, reason: String },
}
