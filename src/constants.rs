//! Engine constants for rise/set classification and band assembly.
//!
//! This module collects the fixed thresholds and sentinel values used by the
//! midnight splitter, the DST correction, and the local-mean-time offset
//! rounding.

// ═══ Midnight Split Thresholds ═══
// Wall-clock heuristics inherited from the source system: a sunset earlier
// than 09:00 is read as last evening's daylight spilling past midnight, and a
// sunrise later than 15:00 as tonight's daylight starting before midnight.
// These are empirical values, not derived from latitude.

/// A `Normal` day whose sunset wall-clock hour is below this value is split.
pub const EARLY_SUNSET_SPLIT_HOUR: f64 = 9.0;

/// A `Normal` day whose sunrise wall-clock hour is above this value is split.
pub const LATE_SUNRISE_SPLIT_HOUR: f64 = 15.0;

// ═══ Midnight Sentinels ═══
// Split fragments are pinned to these values so each fragment stays strictly
// inside a single plotted day: 23:59:59.999 and 00:00:00.001.

/// Fractional hour for "just before midnight" (23:59:59.999).
pub const JUST_BEFORE_MIDNIGHT_HOUR: f64 = 23.0 + 59.0 / 60.0 + 59.999 / 3600.0;

/// Fractional hour for "just after midnight" (00:00:00.001).
pub const JUST_AFTER_MIDNIGHT_HOUR: f64 = 0.001 / 3600.0;

// ═══ Time Arithmetic ═══

/// Hours in a calendar day, used to wrap raw hours into `[0, 24)`.
pub const HOURS_PER_DAY: f64 = 24.0;

/// The daylight-saving clock shift, applied at most once per record.
pub const DST_SHIFT_HOURS: f64 = 1.0;

/// Degrees of longitude the Earth rotates through per hour.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Granularity for rounding a longitude-derived UTC offset.
pub const OFFSET_ROUNDING_HOURS: f64 = 0.5;

// ═══ Horizon Geometry ═══

/// Horizon angle selecting true sunrise/sunset.
pub const RISE_SET_HORIZON_ANGLE: f64 = 0.0;

/// Solar zenith for true rise/set: 90° plus atmospheric refraction and the
/// sun's semidiameter.
pub const RISE_SET_ZENITH_DEGREES: f64 = 90.833;
