//! Midnight splitting of daylight intervals that straddle 00:00.
//!
//! A chart plots hour of day against calendar day, so a daylight interval
//! crossing midnight (a sunset in the small hours, or a sunrise late in
//! the evening) would draw a line across the full 24-hour axis. Such days
//! are split into a before-midnight and an after-midnight fragment, pinned
//! to sentinels just inside the day boundary.

use crate::chart::types::{DailyRiseSet, DaylightRegime};
use crate::constants::{
    EARLY_SUNSET_SPLIT_HOUR, JUST_AFTER_MIDNIGHT_HOUR, JUST_BEFORE_MIDNIGHT_HOUR,
    LATE_SUNRISE_SPLIT_HOUR,
};

/// Outcome of examining one record for a midnight wrap.
///
/// `primary` continues the main daylight series; `wrap` carries the short
/// spill-over on the other side of midnight and feeds the wrap band.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SplitRiseSet {
    Whole(DailyRiseSet),
    Split {
        primary: DailyRiseSet,
        wrap: DailyRiseSet,
    },
}

/// Splits a record whose daylight interval crosses midnight.
///
/// The 09:00/15:00 thresholds are empirical wall-clock heuristics carried
/// over from the source system: a sunset before 09:00 is read as last
/// evening's daylight spilling past midnight, a sunrise after 15:00 as
/// daylight that starts before midnight. They are not derived from
/// latitude, and near-polar locations with legitimately extreme event
/// times rely on them holding there too.
pub(crate) fn split(record: DailyRiseSet) -> SplitRiseSet {
    if record.regime() != DaylightRegime::Normal {
        return SplitRiseSet::Whole(record);
    }

    let sunrise = record.sunrise_hour_of_day();
    let sunset = record.sunset_hour_of_day();

    if sunset < EARLY_SUNSET_SPLIT_HOUR {
        // Daylight runs from yesterday evening past midnight: the evening
        // part continues the main series, the early-morning part wraps.
        SplitRiseSet::Split {
            primary: record.with_new_times(sunrise, JUST_BEFORE_MIDNIGHT_HOUR),
            wrap: record.with_new_times(JUST_AFTER_MIDNIGHT_HOUR, sunset),
        }
    } else if sunrise > LATE_SUNRISE_SPLIT_HOUR {
        // Daylight starts late in the evening and runs past midnight: the
        // morning part continues the main series, the evening part wraps.
        SplitRiseSet::Split {
            primary: record.with_new_times(JUST_AFTER_MIDNIGHT_HOUR, sunset),
            wrap: record.with_new_times(sunrise, JUST_BEFORE_MIDNIGHT_HOUR),
        }
    } else {
        SplitRiseSet::Whole(record)
    }
}
