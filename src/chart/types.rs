//! Chart-facing vocabulary: daylight regimes, chart modes, options, and the
//! per-day and per-band result records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DST_SHIFT_HOURS, HOURS_PER_DAY};

/// Per-day classification of the daylight pattern at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DaylightRegime {
    /// The sun both rises and sets on this day.
    Normal,
    /// The sun never drops below the horizon (polar day).
    AllDaylight,
    /// The sun never clears the horizon (polar night).
    AllNighttime,
}

/// Twilight depression selected for the optional twilight series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TwilightKind {
    Civil,
    Nautical,
    Astronomical,
}

impl TwilightKind {
    /// The horizon angle in degrees for this twilight definition.
    ///
    /// Negative values place the sun below the horizon.
    pub const fn horizon_angle(&self) -> f64 {
        match self {
            Self::Civil => -6.0,
            Self::Nautical => -12.0,
            Self::Astronomical => -18.0,
        }
    }
}

/// How the UTC offset for astronomical computation is chosen.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum TimezoneMode {
    /// Use the location's registered standard UTC offset.
    #[default]
    UseTimeZone,
    /// Derive the offset from the longitude alone (nearest half hour), so
    /// the chart shape is independent of administrative timezone quirks.
    UseLocalTime,
}

/// The independent series a chart can render for one year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ChartMode {
    /// Rise/set hours with the DST clock shift applied (wall clock).
    WithClockShift,
    /// Rise/set hours in standard time year-round.
    WithoutClockShift,
    /// The twilight series for the selected depression, wall clock.
    Twilight(TwilightKind),
}

/// Options for one year's computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Compute an additional twilight series when set.
    pub twilight: Option<TwilightKind>,
    /// Offset selection for all astronomical computation.
    pub timezone_mode: TimezoneMode,
}

/// Wraps a fractional hour into `[0, 24)`; infinite hours pass through.
fn wrap_hour(hour: f64) -> f64 {
    if hour.is_finite() {
        hour.rem_euclid(HOURS_PER_DAY)
    } else {
        hour
    }
}

/// Sunrise and sunset for one calendar day, classified and DST-corrected.
///
/// Hour values are fractional hours of the day. They may fall outside
/// `[0, 24)` when the DST shift pushes an event past midnight, and they are
/// `±∞` for the polar regimes; the `*_hour_of_day` accessors expose the
/// wrapped wall-clock values used for plotting and splitting. Records are
/// immutable; [`with_new_times`](Self::with_new_times) derives a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRiseSet {
    date: NaiveDate,
    regime: DaylightRegime,
    sunrise_hour: f64,
    sunset_hour: f64,
    in_daylight_savings: bool,
}

impl DailyRiseSet {
    pub(crate) fn new(
        date: NaiveDate,
        regime: DaylightRegime,
        sunrise_hour: f64,
        sunset_hour: f64,
        in_daylight_savings: bool,
    ) -> Self {
        Self {
            date,
            regime,
            sunrise_hour,
            sunset_hour,
            in_daylight_savings,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn regime(&self) -> DaylightRegime {
        self.regime
    }

    /// Raw sunrise hour; may lie outside `[0, 24)` or be infinite.
    pub fn sunrise_hour(&self) -> f64 {
        self.sunrise_hour
    }

    /// Raw sunset hour; may lie outside `[0, 24)` or be infinite.
    pub fn sunset_hour(&self) -> f64 {
        self.sunset_hour
    }

    /// Whether daylight saving time was in effect on this day.
    pub fn in_daylight_savings(&self) -> bool {
        self.in_daylight_savings
    }

    /// Sunrise as a wall-clock hour in `[0, 24)`.
    pub fn sunrise_hour_of_day(&self) -> f64 {
        wrap_hour(self.sunrise_hour)
    }

    /// Sunset as a wall-clock hour in `[0, 24)`.
    pub fn sunset_hour_of_day(&self) -> f64 {
        wrap_hour(self.sunset_hour)
    }

    /// Derives a copy with different event times; date, regime, and DST
    /// status are kept. Used by the midnight splitter to build fragments.
    pub fn with_new_times(&self, sunrise_hour: f64, sunset_hour: f64) -> Self {
        Self {
            sunrise_hour,
            sunset_hour,
            ..self.clone()
        }
    }

    /// Derives the wall-clock copy of a standard-time record: finite hours
    /// gain the one-hour shift when this day is in daylight savings,
    /// infinite hours pass through.
    pub fn with_clock_shift(&self) -> Self {
        if !self.in_daylight_savings {
            return self.clone();
        }
        let shift = |hour: f64| {
            if hour.is_finite() {
                hour + DST_SHIFT_HOURS
            } else {
                hour
            }
        };
        self.with_new_times(shift(self.sunrise_hour), shift(self.sunset_hour))
    }
}

/// One continuous, non-wrapping plot series of daily rise/set entries.
///
/// Entries are in ascending date order and never include an
/// [`AllNighttime`](DaylightRegime::AllNighttime) day. Bands are built by
/// the assembler and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaylightBand {
    index: usize,
    mode: ChartMode,
    entries: Vec<DailyRiseSet>,
}

impl DaylightBand {
    pub(crate) fn new(index: usize, mode: ChartMode) -> Self {
        Self {
            index,
            mode,
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: DailyRiseSet) {
        self.entries.push(entry);
    }

    /// Position of this band in first-opened order within its mode.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The chart mode this band was assembled for.
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    /// The entries of this band, in ascending date order.
    pub fn entries(&self) -> &[DailyRiseSet] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Map from chart mode to that mode's assembled bands.
pub(crate) type BandsByMode = BTreeMap<ChartMode, Vec<DaylightBand>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sunrise: f64, sunset: f64, in_dst: bool) -> DailyRiseSet {
        DailyRiseSet::new(
            NaiveDate::from_ymd_opt(2001, 6, 21).unwrap(),
            DaylightRegime::Normal,
            sunrise,
            sunset,
            in_dst,
        )
    }

    #[test]
    fn test_hour_of_day_wraps_past_midnight() {
        let pushed_past_midnight = record(16.2, 24.8, true);
        assert!((pushed_past_midnight.sunset_hour_of_day() - 0.8).abs() < 1e-9);
        assert!((pushed_past_midnight.sunrise_hour_of_day() - 16.2).abs() < 1e-9);
    }

    #[test]
    fn test_hour_of_day_passes_infinities_through() {
        let polar = DailyRiseSet::new(
            NaiveDate::from_ymd_opt(2001, 12, 21).unwrap(),
            DaylightRegime::AllNighttime,
            f64::INFINITY,
            f64::NEG_INFINITY,
            false,
        );
        assert_eq!(polar.sunrise_hour_of_day(), f64::INFINITY);
        assert_eq!(polar.sunset_hour_of_day(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_with_new_times_keeps_identity_fields() {
        let original = record(8.0, 16.0, true);
        let derived = original.with_new_times(0.5, 7.0);
        assert_eq!(derived.date(), original.date());
        assert_eq!(derived.regime(), original.regime());
        assert!(derived.in_daylight_savings());
        assert_eq!(derived.sunrise_hour(), 0.5);
        assert_eq!(derived.sunset_hour(), 7.0);
        // The original is untouched.
        assert_eq!(original.sunrise_hour(), 8.0);
    }

    #[test]
    fn test_with_clock_shift_only_when_in_dst() {
        let standard = record(8.0, 16.0, false);
        assert_eq!(standard.with_clock_shift(), standard);

        let summer = record(4.0, 21.9, true);
        let shifted = summer.with_clock_shift();
        assert_eq!(shifted.sunrise_hour(), 5.0);
        assert_eq!(shifted.sunset_hour(), 22.9);
    }

    #[test]
    fn test_with_clock_shift_leaves_infinities() {
        let polar = DailyRiseSet::new(
            NaiveDate::from_ymd_opt(2001, 6, 21).unwrap(),
            DaylightRegime::AllDaylight,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        );
        let shifted = polar.with_clock_shift();
        assert_eq!(shifted.sunrise_hour(), f64::NEG_INFINITY);
        assert_eq!(shifted.sunset_hour(), f64::INFINITY);
    }

    #[test]
    fn test_twilight_horizon_angles() {
        assert_eq!(TwilightKind::Civil.horizon_angle(), -6.0);
        assert_eq!(TwilightKind::Nautical.horizon_angle(), -12.0);
        assert_eq!(TwilightKind::Astronomical.horizon_angle(), -18.0);
    }

    #[test]
    fn test_default_options() {
        let options = ChartOptions::default();
        assert_eq!(options.twilight, None);
        assert_eq!(options.timezone_mode, TimezoneMode::UseTimeZone);
    }
}
