//! Geographic location input for rise/set calculations.
//!
//! A [`Location`] is a pre-validated value supplied by the caller: this crate
//! never loads location databases or parses coordinate strings. The type is
//! immutable after construction and is held by reference for the duration of
//! a year's computation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEGREES_PER_HOUR, OFFSET_ROUNDING_HOURS};
use crate::error::{Error, Result};

/// A geographic location with its standard (non-DST) UTC offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    observes_daylight_time: bool,
}

impl Location {
    /// Creates a validated location.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `(-180, 180]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLocation`] for out-of-range coordinates.
    pub fn new(
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
        observes_daylight_time: bool,
    ) -> Result<Self> {
        let location = Self {
            latitude,
            longitude,
            utc_offset_hours,
            observes_daylight_time,
        };
        location.validate()?;
        Ok(location)
    }

    /// Re-checks the coordinate ranges.
    ///
    /// Constructed locations are always valid; this exists so the calculator
    /// can fail fast on values that arrived through deserialization.
    pub(crate) fn validate(&self) -> Result<()> {
        let latitude_ok = (-90.0..=90.0).contains(&self.latitude);
        let longitude_ok = self.longitude > -180.0 && self.longitude <= 180.0;
        if latitude_ok && longitude_ok {
            Ok(())
        } else {
            Err(Error::InvalidLocation {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The standard UTC offset in hours, without any DST shift.
    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Whether this location observes daylight saving time.
    pub fn observes_daylight_time(&self) -> bool {
        self.observes_daylight_time
    }

    /// The UTC offset implied by the longitude alone, rounded to the nearest
    /// half hour.
    ///
    /// Used by [`TimezoneMode::UseLocalTime`](crate::chart::TimezoneMode) to
    /// decouple chart shape from administrative timezone quirks.
    pub fn local_mean_offset(&self) -> f64 {
        let solar_offset = self.longitude / DEGREES_PER_HOUR;
        (solar_offset / OFFSET_ROUNDING_HOURS).round() * OFFSET_ROUNDING_HOURS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_validation() {
        assert!(Location::new(40.7128, -74.0060, -5.0, true).is_ok());
        assert!(Location::new(90.0, 180.0, 12.0, false).is_ok());
        assert!(Location::new(-90.0, -179.9, -12.0, false).is_ok());

        assert!(Location::new(91.0, 0.0, 0.0, false).is_err());
        assert!(Location::new(-90.1, 0.0, 0.0, false).is_err());

        // Longitude range is half-open: -180 itself is rejected, +180 kept.
        assert!(Location::new(0.0, -180.0, 0.0, false).is_err());
        assert!(Location::new(0.0, 180.0, 0.0, false).is_ok());
        assert!(Location::new(0.0, 180.1, 0.0, false).is_err());
    }

    #[test]
    fn test_invalid_location_error_carries_coordinates() {
        let err = Location::new(95.0, 10.0, 0.0, false).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLocation {
                latitude: 95.0,
                longitude: 10.0
            }
        );
    }

    #[test]
    fn test_local_mean_offset_rounds_to_half_hours() {
        // Aberdeen, 2°04'W: solar offset -0.14 h rounds to zero.
        let aberdeen = Location::new(57.1667, -2.0667, 0.0, true).unwrap();
        assert_eq!(aberdeen.local_mean_offset(), 0.0);

        // Sydney, 151°13'E: solar offset 10.08 h rounds to +10.
        let sydney = Location::new(-33.8667, 151.2167, 10.0, true).unwrap();
        assert_eq!(sydney.local_mean_offset(), 10.0);

        // Moscow, 37°37'E: solar offset 2.51 h rounds to +2.5, not the
        // administrative +3.
        let moscow = Location::new(55.7558, 37.6173, 3.0, false).unwrap();
        assert_eq!(moscow.local_mean_offset(), 2.5);
    }
}
