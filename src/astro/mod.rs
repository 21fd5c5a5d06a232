//! The astronomical source boundary.
//!
//! The rise/set engine treats the underlying sun-position formula as a
//! collaborator behind the [`AstronomicalSource`] trait. A default
//! implementation, [`NoaaSource`], is provided in [`noaa`]; hosts with their
//! own ephemeris can plug it in here.
//!
//! ## Infinity convention
//!
//! A source reports polar regimes through infinite hour values, and exactly
//! one convention is honored everywhere in this crate:
//!
//! - sun above the horizon all day (polar day): `rise = -∞`, `set = +∞`
//!   (daylight overruns both ends of the calendar day);
//! - sun below the horizon all day (polar night): `rise = +∞`, `set = -∞`.
//!
//! ## Horizon angles
//!
//! The `horizon_angle` argument selects the event being solved for: `0.0`
//! means true sunrise/sunset (the implementation accounts for refraction and
//! the sun's semidiameter itself), while negative values select twilight
//! depressions such as -6° for civil twilight.

pub mod noaa;

pub use noaa::NoaaSource;

use chrono::NaiveDate;

use crate::error::Result;

/// Raw rise and set hours for one date, as produced by a source.
///
/// Hours are fractional hours of local standard time for the queried date
/// and may fall slightly outside `[0, 24)`; infinite values follow the
/// module-level convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRiseSet {
    pub rise_hour: f64,
    pub set_hour: f64,
}

impl RawRiseSet {
    /// The polar-day pair: daylight overruns both ends of the day.
    pub const fn all_daylight() -> Self {
        Self {
            rise_hour: f64::NEG_INFINITY,
            set_hour: f64::INFINITY,
        }
    }

    /// The polar-night pair: the sun never clears the horizon.
    pub const fn all_nighttime() -> Self {
        Self {
            rise_hour: f64::INFINITY,
            set_hour: f64::NEG_INFINITY,
        }
    }
}

/// A deterministic sun-position formula.
///
/// Implementations must be total over valid inputs: any latitude in
/// `[-90, 90]`, longitude in `(-180, 180]`, and calendar date. Polar
/// regimes are reported through the module-level infinity convention, not
/// through errors; an `Err` is reserved for genuinely failed computation
/// and aborts the whole year.
#[cfg_attr(test, mockall::automock)]
pub trait AstronomicalSource {
    /// Computes the rise and set hours for one date at the given horizon
    /// angle, in local standard time for `utc_offset_hours`.
    fn calc_rise_set(
        &self,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
        date: NaiveDate,
        horizon_angle: f64,
    ) -> Result<RawRiseSet>;
}
