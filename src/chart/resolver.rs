//! Per-day resolution: astronomical lookup, regime classification, and the
//! DST clock shift.

use chrono::NaiveDate;

use crate::astro::{AstronomicalSource, RawRiseSet};
use crate::chart::types::{DailyRiseSet, DaylightRegime};
use crate::constants::DST_SHIFT_HOURS;
use crate::error::Result;
use crate::location::Location;

/// Resolves one `(date, horizon)` pair into a classified daily record.
///
/// The one-hour DST shift is applied to each finite hour exactly once, when
/// `use_daylight_time` and `in_daylight_savings` both hold; infinite hours
/// pass through untouched. Errors from the source are not retried, since
/// the formula is deterministic, and abort the year's computation.
pub(crate) fn resolve<S: AstronomicalSource>(
    source: &S,
    location: &Location,
    utc_offset_hours: f64,
    date: NaiveDate,
    horizon_angle: f64,
    use_daylight_time: bool,
    in_daylight_savings: bool,
) -> Result<DailyRiseSet> {
    let raw = source.calc_rise_set(
        location.latitude(),
        location.longitude(),
        utc_offset_hours,
        date,
        horizon_angle,
    )?;
    let regime = classify(raw);

    let shift = if use_daylight_time && in_daylight_savings {
        DST_SHIFT_HOURS
    } else {
        0.0
    };
    let shifted = |hour: f64| if hour.is_finite() { hour + shift } else { hour };

    Ok(DailyRiseSet::new(
        date,
        regime,
        shifted(raw.rise_hour),
        shifted(raw.set_hour),
        in_daylight_savings,
    ))
}

/// Classifies the daylight regime from the source's infinity convention:
/// `rise = -∞` or `set = +∞` means daylight overruns the day, the opposite
/// infinities mean the sun never clears the horizon.
fn classify(raw: RawRiseSet) -> DaylightRegime {
    if raw.rise_hour.is_finite() && raw.set_hour.is_finite() {
        DaylightRegime::Normal
    } else if raw.rise_hour == f64::NEG_INFINITY || raw.set_hour == f64::INFINITY {
        DaylightRegime::AllDaylight
    } else {
        DaylightRegime::AllNighttime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::MockAstronomicalSource;
    use crate::constants::RISE_SET_HORIZON_ANGLE;

    fn test_location() -> Location {
        Location::new(57.1667, -2.0667, 0.0, true).unwrap()
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2001, 6, 21).unwrap()
    }

    fn source_returning(raw: RawRiseSet) -> MockAstronomicalSource {
        let mut source = MockAstronomicalSource::new();
        source
            .expect_calc_rise_set()
            .returning(move |_, _, _, _, _| Ok(raw));
        source
    }

    #[test]
    fn test_normal_day_without_dst() {
        let source = source_returning(RawRiseSet {
            rise_hour: 4.2,
            set_hour: 21.1,
        });
        let record = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            true,
            false,
        )
        .unwrap();
        assert_eq!(record.regime(), DaylightRegime::Normal);
        assert_eq!(record.sunrise_hour(), 4.2);
        assert_eq!(record.sunset_hour(), 21.1);
        assert!(!record.in_daylight_savings());
    }

    #[test]
    fn test_dst_shift_applied_exactly_once() {
        let source = source_returning(RawRiseSet {
            rise_hour: 4.2,
            set_hour: 21.1,
        });
        let record = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            true,
            true,
        )
        .unwrap();
        assert!((record.sunrise_hour() - 5.2).abs() < 1e-12);
        assert!((record.sunset_hour() - 22.1).abs() < 1e-12);
        assert!(record.in_daylight_savings());
    }

    #[test]
    fn test_no_shift_when_location_ignores_dst() {
        let source = source_returning(RawRiseSet {
            rise_hour: 4.2,
            set_hour: 21.1,
        });
        let record = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            false,
            true,
        )
        .unwrap();
        assert_eq!(record.sunrise_hour(), 4.2);
        assert_eq!(record.sunset_hour(), 21.1);
    }

    #[test]
    fn test_all_daylight_classification_and_untouched_infinities() {
        let source = source_returning(RawRiseSet::all_daylight());
        let record = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            true,
            true,
        )
        .unwrap();
        assert_eq!(record.regime(), DaylightRegime::AllDaylight);
        assert_eq!(record.sunrise_hour(), f64::NEG_INFINITY);
        assert_eq!(record.sunset_hour(), f64::INFINITY);
    }

    #[test]
    fn test_all_nighttime_classification() {
        let source = source_returning(RawRiseSet::all_nighttime());
        let record = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            true,
            false,
        )
        .unwrap();
        assert_eq!(record.regime(), DaylightRegime::AllNighttime);
    }

    #[test]
    fn test_one_sided_infinity_follows_the_convention() {
        // A set that runs past the end of the day still means all daylight.
        let source = source_returning(RawRiseSet {
            rise_hour: 3.0,
            set_hour: f64::INFINITY,
        });
        let record = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            false,
            false,
        )
        .unwrap();
        assert_eq!(record.regime(), DaylightRegime::AllDaylight);

        let source = source_returning(RawRiseSet {
            rise_hour: f64::INFINITY,
            set_hour: 18.0,
        });
        let record = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            false,
            false,
        )
        .unwrap();
        assert_eq!(record.regime(), DaylightRegime::AllNighttime);
    }

    #[test]
    fn test_source_errors_propagate() {
        let mut source = MockAstronomicalSource::new();
        source.expect_calc_rise_set().returning(|_, _, _, date, _| {
            Err(crate::error::Error::AstronomicalComputationFailed {
                date,
                reason: "degenerate".into(),
            })
        });
        let result = resolve(
            &source,
            &test_location(),
            0.0,
            test_date(),
            RISE_SET_HORIZON_ANGLE,
            true,
            false,
        );
        assert!(matches!(
            result,
            Err(crate::error::Error::AstronomicalComputationFailed { .. })
        ));
    }
}
