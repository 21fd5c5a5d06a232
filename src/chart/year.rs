//! Whole-year orchestration: per-day resolution, DST transition tracking,
//! and band assembly for each chart mode.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::astro::{AstronomicalSource, NoaaSource};
use crate::chart::bands::assemble;
use crate::chart::resolver::resolve;
use crate::chart::types::{
    BandsByMode, ChartMode, ChartOptions, DailyRiseSet, DaylightBand, TimezoneMode,
};
use crate::constants::RISE_SET_HORIZON_ANGLE;
use crate::dst::DaylightCalendar;
use crate::error::Result;
use crate::location::Location;

/// One year of classified rise/set data for a location, with its assembled
/// chart bands.
///
/// Values are immutable once returned; every accessor is read-only. Two
/// computations over identical inputs produce equal values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiseSetYear {
    location: Location,
    year: i32,
    uses_daylight_time: bool,
    dst_start_date: Option<NaiveDate>,
    dst_end_date: Option<NaiveDate>,
    daily_records: Vec<DailyRiseSet>,
    bands: BandsByMode,
}

impl RiseSetYear {
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether the location observes daylight saving time.
    pub fn uses_daylight_time(&self) -> bool {
        self.uses_daylight_time
    }

    /// First date of the year on which DST was newly in effect.
    pub fn dst_start_date(&self) -> Option<NaiveDate> {
        self.dst_start_date
    }

    /// First date of the year on which DST was newly out of effect.
    pub fn dst_end_date(&self) -> Option<NaiveDate> {
        self.dst_end_date
    }

    /// The unsplit base-case records, one per calendar day in date order,
    /// in the wall-clock (with-clock-shift) frame.
    pub fn daily_records(&self) -> &[DailyRiseSet] {
        &self.daily_records
    }

    /// The bands assembled for `mode`; empty when the mode was not computed
    /// (a twilight mode that was not requested).
    pub fn bands(&self, mode: ChartMode) -> &[DaylightBand] {
        self.bands.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The modes bands were assembled for.
    pub fn band_modes(&self) -> impl Iterator<Item = ChartMode> + '_ {
        self.bands.keys().copied()
    }
}

/// Computes [`RiseSetYear`] values from an astronomical source and a DST
/// calendar.
///
/// The calculator is stateless between calls: each computation reads only
/// its arguments and the two collaborators, so independent years and
/// locations may be computed concurrently from the same calculator.
#[derive(Debug, Clone)]
pub struct RiseSetYearCalculator<S = NoaaSource, C = Tz> {
    source: S,
    calendar: C,
}

impl RiseSetYearCalculator {
    /// A calculator with the built-in hour-angle source and an IANA
    /// timezone as the DST calendar.
    pub fn for_timezone(timezone: Tz) -> Self {
        Self::new(NoaaSource, timezone)
    }
}

impl<S, C> RiseSetYearCalculator<S, C>
where
    S: AstronomicalSource,
    C: DaylightCalendar,
{
    pub fn new(source: S, calendar: C) -> Self {
        Self { source, calendar }
    }

    /// Computes the full year of rise/set data for `location`.
    ///
    /// All-or-nothing: the first error aborts the year and nothing partial
    /// is returned.
    ///
    /// # Errors
    /// [`Error::InvalidLocation`](crate::error::Error::InvalidLocation) for
    /// out-of-range coordinates (checked before any per-day work);
    /// [`Error::AstronomicalComputationFailed`](crate::error::Error::AstronomicalComputationFailed)
    /// when the source cannot produce a result for a date.
    pub fn compute(
        &self,
        location: &Location,
        year: i32,
        options: &ChartOptions,
    ) -> Result<RiseSetYear> {
        location.validate()?;

        let uses_daylight_time = location.observes_daylight_time();
        let utc_offset_hours = match options.timezone_mode {
            TimezoneMode::UseTimeZone => location.utc_offset_hours(),
            TimezoneMode::UseLocalTime => location.local_mean_offset(),
        };
        debug!(
            year,
            latitude = location.latitude(),
            longitude = location.longitude(),
            utc_offset_hours,
            "computing rise/set year"
        );

        let mut standard_records = Vec::with_capacity(366);
        let mut twilight_records = options.twilight.map(|_| Vec::with_capacity(366));
        let mut dst_start_date = None;
        let mut dst_end_date = None;
        // Seeded false before January 1 so a year that begins inside DST
        // (southern hemisphere) records its start on the first day.
        let mut previous_in_dst = false;

        for date in days_of_year(year) {
            let in_dst = uses_daylight_time && self.calendar.is_daylight_time(date);
            if in_dst != previous_in_dst {
                if in_dst {
                    if dst_start_date.is_none() {
                        dst_start_date = Some(date);
                        debug!(%date, "daylight saving time begins");
                    }
                } else if dst_end_date.is_none() {
                    dst_end_date = Some(date);
                    debug!(%date, "daylight saving time ends");
                }
                previous_in_dst = in_dst;
            }

            let standard = resolve(
                &self.source,
                location,
                utc_offset_hours,
                date,
                RISE_SET_HORIZON_ANGLE,
                false,
                in_dst,
            )?;
            standard_records.push(standard);

            if let (Some(kind), Some(records)) = (options.twilight, twilight_records.as_mut()) {
                let twilight = resolve(
                    &self.source,
                    location,
                    utc_offset_hours,
                    date,
                    kind.horizon_angle(),
                    false,
                    in_dst,
                )?;
                records.push(twilight);
            }
        }

        // The wall-clock series is derived from the standard-time records;
        // the source is deterministic, so the shift is exact.
        let shifted_records: Vec<DailyRiseSet> = standard_records
            .iter()
            .map(DailyRiseSet::with_clock_shift)
            .collect();

        let mut bands = BandsByMode::new();
        bands.insert(
            ChartMode::WithClockShift,
            assemble(ChartMode::WithClockShift, &shifted_records),
        );
        bands.insert(
            ChartMode::WithoutClockShift,
            assemble(ChartMode::WithoutClockShift, &standard_records),
        );
        if let (Some(kind), Some(records)) = (options.twilight, twilight_records) {
            let shifted_twilight: Vec<DailyRiseSet> =
                records.iter().map(DailyRiseSet::with_clock_shift).collect();
            let mode = ChartMode::Twilight(kind);
            bands.insert(mode, assemble(mode, &shifted_twilight));
        }

        let total_bands: usize = bands.values().map(Vec::len).sum();
        debug!(year, total_bands, "assembled daylight bands");

        Ok(RiseSetYear {
            location: location.clone(),
            year,
            uses_daylight_time,
            dst_start_date,
            dst_end_date,
            daily_records: shifted_records,
            bands,
        })
    }
}

/// Every calendar date of `year` in ascending order; the calendar library
/// supplies leap-year handling.
fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .expect("year out of chrono's supported range")
        .iter_days()
        .take_while(move |date| date.year() == year)
}
