//! Default hour-angle sun-position formula.
//!
//! [`NoaaSource`] implements the classic sunrise equation: solar declination
//! and the equation of time from the NOAA/Meeus low-precision series, with
//! the event hour refined over three passes so the solar coordinates are
//! evaluated at the event itself rather than at noon. Accuracy is well
//! within half a minute of published almanac values for non-polar
//! latitudes, which is far below the one-minute resolution of a plotted
//! daylight chart.

use chrono::{Datelike, NaiveDate};

use crate::astro::{AstronomicalSource, RawRiseSet};
use crate::constants::{RISE_SET_HORIZON_ANGLE, RISE_SET_ZENITH_DEGREES};
use crate::error::{Error, Result};

/// Iterated hour-angle/declination rise-set source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoaaSource;

/// The two horizon crossings solved for each day.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Crossing {
    Rise,
    Set,
}

/// Outcome of solving one crossing: an hour of UT, or a polar regime.
enum CrossingHour {
    At(f64),
    PolarDay,
    PolarNight,
}

impl AstronomicalSource for NoaaSource {
    fn calc_rise_set(
        &self,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
        date: NaiveDate,
        horizon_angle: f64,
    ) -> Result<RawRiseSet> {
        let zenith = zenith_for_horizon(horizon_angle);
        let jd = julian_day(date);

        let rise = crossing_hour_utc(jd, latitude, longitude, zenith, Crossing::Rise)
            .ok_or_else(|| computation_failed(date, latitude))?;
        let set = crossing_hour_utc(jd, latitude, longitude, zenith, Crossing::Set)
            .ok_or_else(|| computation_failed(date, latitude))?;

        let result = match (rise, set) {
            (CrossingHour::At(rise_utc), CrossingHour::At(set_utc)) => RawRiseSet {
                rise_hour: rise_utc + utc_offset_hours,
                set_hour: set_utc + utc_offset_hours,
            },
            (CrossingHour::PolarDay, _) | (_, CrossingHour::PolarDay) => {
                RawRiseSet::all_daylight()
            }
            _ => RawRiseSet::all_nighttime(),
        };
        Ok(result)
    }
}

fn computation_failed(date: NaiveDate, latitude: f64) -> Error {
    Error::AstronomicalComputationFailed {
        date,
        reason: format!("hour-angle solution degenerate at latitude {latitude}"),
    }
}

/// Maps a horizon selector angle to the solar zenith solved for.
///
/// Angle 0 means true rise/set, where refraction and the solar semidiameter
/// are folded in here; twilight depressions are purely geometric, giving the
/// conventional 96°/102°/108° twilight zeniths.
fn zenith_for_horizon(horizon_angle: f64) -> f64 {
    if horizon_angle == RISE_SET_HORIZON_ANGLE {
        RISE_SET_ZENITH_DEGREES
    } else {
        90.0 - horizon_angle
    }
}

/// Julian day number at 0h UT for a Gregorian calendar date.
fn julian_day(date: NaiveDate) -> f64 {
    let mut year = f64::from(date.year());
    let mut month = f64::from(date.month());
    let day = f64::from(date.day());
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let century = (year / 100.0).floor();
    let gregorian = 2.0 - century + (century / 4.0).floor();
    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day + gregorian
        - 1524.5
}

/// Solar declination (degrees) and equation of time (minutes) for a moment
/// expressed in Julian centuries since J2000.
fn sun_geometry(t: f64) -> (f64, f64) {
    let mean_longitude = (280.466_46 + t * (36_000.769_83 + t * 0.000_303_2)).rem_euclid(360.0);
    let mean_anomaly = 357.529_11 + t * (35_999.050_29 - 0.000_153_7 * t);
    let eccentricity = 0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t);

    let anomaly_rad = mean_anomaly.to_radians();
    let center = anomaly_rad.sin() * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + (2.0 * anomaly_rad).sin() * (0.019_993 - 0.000_101 * t)
        + (3.0 * anomaly_rad).sin() * 0.000_289;
    let true_longitude = mean_longitude + center;

    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent_longitude = (true_longitude - 0.005_69 - 0.004_78 * omega.sin()).to_radians();

    let mean_obliquity =
        23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813))) / 60.0) / 60.0;
    let obliquity = (mean_obliquity + 0.002_56 * omega.cos()).to_radians();

    let declination = (obliquity.sin() * apparent_longitude.sin()).asin().to_degrees();

    let half_obliquity_tan = (obliquity / 2.0).tan();
    let y = half_obliquity_tan * half_obliquity_tan;
    let longitude_rad = mean_longitude.to_radians();
    let equation_of_time = 4.0
        * (y * (2.0 * longitude_rad).sin() - 2.0 * eccentricity * anomaly_rad.sin()
            + 4.0 * eccentricity * y * anomaly_rad.sin() * (2.0 * longitude_rad).cos()
            - 0.5 * y * y * (4.0 * longitude_rad).sin()
            - 1.25 * eccentricity * eccentricity * (2.0 * anomaly_rad).sin())
        .to_degrees();

    (declination, equation_of_time)
}

/// Solves one horizon crossing for the day starting at `jd`.
///
/// Returns the crossing hour in UT (may fall slightly outside `[0, 24)` for
/// longitudes far from their offset meridian), or the polar regime when the
/// sun never reaches the zenith threshold. `None` signals a degenerate
/// solution (`cos H` turned NaN), which happens only for pathological
/// inputs such as latitude exactly ±90°.
fn crossing_hour_utc(
    jd: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    crossing: Crossing,
) -> Option<CrossingHour> {
    let latitude_rad = latitude.to_radians();
    let zenith_cos = zenith.to_radians().cos();

    let mut hour_utc = 12.0;
    for _ in 0..3 {
        let t = (jd + hour_utc / 24.0 - 2_451_545.0) / 36_525.0;
        let (declination, equation_of_time) = sun_geometry(t);
        let declination_rad = declination.to_radians();

        let hour_angle_cos = (zenith_cos - latitude_rad.sin() * declination_rad.sin())
            / (latitude_rad.cos() * declination_rad.cos());
        if hour_angle_cos.is_nan() {
            return None;
        }
        if hour_angle_cos > 1.0 {
            return Some(CrossingHour::PolarNight);
        }
        if hour_angle_cos < -1.0 {
            return Some(CrossingHour::PolarDay);
        }

        let mut hour_angle = hour_angle_cos.acos().to_degrees();
        if crossing == Crossing::Rise {
            hour_angle = -hour_angle;
        }
        hour_utc = (720.0 - 4.0 * longitude - equation_of_time + 4.0 * hour_angle) / 60.0;
    }
    Some(CrossingHour::At(hour_utc))
}
