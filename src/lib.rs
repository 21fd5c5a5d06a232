//! # riseset
//!
//! An in-memory engine that computes, for a geographic location and a
//! calendar year, the sunrise and sunset (and optionally twilight) times of
//! every day, classifies each day's daylight regime, corrects for daylight
//! saving time, and groups the days into continuous "bands" that a charting
//! host can render without discontinuities at midnight or at DST
//! boundaries.
//!
//! ## Architecture
//!
//! - **Input**: [`Location`], pre-validated coordinates with a standard
//!   UTC offset and a DST-observance flag
//! - **Collaborators**: [`astro`] for the sun-position formula (a default
//!   hour-angle implementation is included), [`dst`] for per-date DST
//!   lookup (implemented for IANA timezones)
//! - **Engine**: [`chart`], per-day resolution, midnight splitting, and
//!   band assembly, driven by [`RiseSetYearCalculator`]
//! - **Output**: [`RiseSetYear`], an immutable year of classified daily
//!   records plus the assembled [`DaylightBand`]s per [`ChartMode`]
//!
//! The engine is a pure, synchronous computation: no I/O, no shared
//! mutable state, and every call over identical inputs yields an equal
//! result, so callers may compute many locations or years in parallel
//! without coordination.
//!
//! ## Example
//!
//! ```
//! use riseset::{ChartMode, ChartOptions, Location, RiseSetYearCalculator};
//!
//! # fn main() -> riseset::Result<()> {
//! let aberdeen = Location::new(57.1667, -2.0667, 0.0, true)?;
//! let calculator = RiseSetYearCalculator::for_timezone(chrono_tz::Europe::London);
//! let year = calculator.compute(&aberdeen, 2001, &ChartOptions::default())?;
//!
//! for band in year.bands(ChartMode::WithClockShift) {
//!     for entry in band.entries() {
//!         let _ = (entry.date(), entry.sunrise_hour_of_day());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod astro;
pub mod chart;
pub mod constants;
pub mod dst;
pub mod error;
pub mod location;

pub use astro::{AstronomicalSource, NoaaSource, RawRiseSet};
pub use chart::{
    ChartMode, ChartOptions, DailyRiseSet, DaylightBand, DaylightRegime, RiseSetYear,
    RiseSetYearCalculator, TimezoneMode, TwilightKind,
};
pub use dst::{DaylightCalendar, FixedDstRange, NoDaylightTime};
pub use error::{Error, Result};
pub use location::Location;
