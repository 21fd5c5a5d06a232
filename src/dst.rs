//! Daylight-saving-time calendars.
//!
//! Whether DST is in effect on a given calendar day is supplied by a
//! collaborator behind the [`DaylightCalendar`] trait; this crate consumes
//! the answer, it does not compute timezone rules itself. The trait is
//! implemented for [`chrono_tz::Tz`], so any IANA timezone works directly,
//! and two simple calendars are provided for hosts and tests that need
//! fixed behavior.

use chrono::{Datelike, NaiveDate, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

/// Per-date daylight-saving-time lookup.
pub trait DaylightCalendar {
    /// True when daylight saving time is in effect on `date`.
    fn is_daylight_time(&self, date: NaiveDate) -> bool;
}

/// IANA timezones answer by probing their offset at 12:00 UTC of the date.
///
/// Probing a fixed UTC instant sidesteps the ambiguous and nonexistent
/// local times that surround the transitions themselves.
impl DaylightCalendar for Tz {
    fn is_daylight_time(&self, date: NaiveDate) -> bool {
        let noon = date.and_hms_opt(12, 0, 0).expect("12:00:00 is always a valid time");
        self.offset_from_utc_datetime(&noon).dst_offset() != chrono::Duration::zero()
    }
}

/// A calendar for locations that never shift their clocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDaylightTime;

impl DaylightCalendar for NoDaylightTime {
    fn is_daylight_time(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// DST in effect on `[start, end)` of each year, by month and day.
///
/// When `start` falls after `end` the range wraps around the new year,
/// which models southern-hemisphere rules.
#[derive(Debug, Clone, Copy)]
pub struct FixedDstRange {
    start: (u32, u32),
    end: (u32, u32),
}

impl FixedDstRange {
    pub fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        Self { start, end }
    }
}

impl DaylightCalendar for FixedDstRange {
    fn is_daylight_time(&self, date: NaiveDate) -> bool {
        let day = (date.month(), date.day());
        if self.start <= self.end {
            day >= self.start && day < self.end
        } else {
            day >= self.start || day < self.end
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::London;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_london_2001_transition_edges() {
        // BST ran from 25 March to 28 October in 2001.
        assert!(!London.is_daylight_time(date(2001, 3, 24)));
        assert!(London.is_daylight_time(date(2001, 3, 25)));
        assert!(London.is_daylight_time(date(2001, 10, 27)));
        assert!(!London.is_daylight_time(date(2001, 10, 28)));
        assert!(!London.is_daylight_time(date(2001, 12, 2)));
    }

    #[test]
    fn test_no_daylight_time() {
        assert!(!NoDaylightTime.is_daylight_time(date(2001, 6, 21)));
    }

    #[test]
    fn test_fixed_range_northern() {
        let calendar = FixedDstRange::new((4, 1), (10, 1));
        assert!(!calendar.is_daylight_time(date(2001, 3, 31)));
        assert!(calendar.is_daylight_time(date(2001, 4, 1)));
        assert!(calendar.is_daylight_time(date(2001, 9, 30)));
        assert!(!calendar.is_daylight_time(date(2001, 10, 1)));
    }

    #[test]
    fn test_fixed_range_wraps_for_southern_hemisphere() {
        let calendar = FixedDstRange::new((10, 28), (4, 1));
        assert!(calendar.is_daylight_time(date(2001, 1, 15)));
        assert!(!calendar.is_daylight_time(date(2001, 4, 1)));
        assert!(!calendar.is_daylight_time(date(2001, 7, 1)));
        assert!(calendar.is_daylight_time(date(2001, 12, 2)));
    }
}
