//! Civil calendar moment and sexagenary day-count arithmetic.
//!
//! `Moment` is local civil time at minute precision, the granularity the
//! chart needs (the finest division is the two-hour slot). Day counting is
//! proleptic Gregorian; the sexagenary day cycle is anchored at
//! 2000-01-01 = 戊午 (cycle index 54).

use crate::error::ChartError;

/// Inclusive range of years the engine accepts.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1600..=3000;

/// Civil day number of the 2000-01-01 anchor (days since 1970-01-01).
const ANCHOR_DAY: i64 = 10_957;

/// Sexagenary cycle index of the anchor day (戊午).
const ANCHOR_CYCLE_INDEX: i64 = 54;

/// A local civil date-time at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Moment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl Moment {
    /// Construct a validated moment. Field ranges and the supported year
    /// span are checked; violations yield `InvalidMoment`.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, ChartError> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(ChartError::InvalidMoment("year outside supported range"));
        }
        if !(1..=12).contains(&month) {
            return Err(ChartError::InvalidMoment("month must be 1-12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(ChartError::InvalidMoment("day outside month"));
        }
        if hour > 23 {
            return Err(ChartError::InvalidMoment("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(ChartError::InvalidMoment("minute must be 0-59"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Civil day number (days since 1970-01-01).
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Sexagenary cycle index (0-59) of this civil day.
    pub fn day_cycle_index(&self) -> u8 {
        ((self.day_number() - ANCHOR_DAY + ANCHOR_CYCLE_INDEX).rem_euclid(60)) as u8
    }

    /// Shift the moment by whole minutes, rolling the date as needed.
    pub fn add_minutes(&self, delta: i64) -> Result<Self, ChartError> {
        let total = self.day_number() * 1440 + (self.hour * 60 + self.minute) as i64 + delta;
        let day = total.div_euclid(1440);
        let rem = total.rem_euclid(1440);
        let (year, month, dom) = civil_from_days(day);
        Self::new(year, month, dom, (rem / 60) as u32, (rem % 60) as u32)
    }

    /// Shift the moment by whole civil days.
    pub fn add_days(&self, delta: i64) -> Result<Self, ChartError> {
        let (year, month, dom) = civil_from_days(self.day_number() + delta);
        Self::new(year, month, dom, self.hour, self.minute)
    }

    /// Julian Date of the moment, interpreting it as local time at the
    /// given UTC offset.
    pub fn to_jd(&self, utc_offset_hours: f64) -> f64 {
        2_440_587.5 + self.day_number() as f64 + (self.hour * 60 + self.minute) as f64 / 1440.0
            - utc_offset_hours / 24.0
    }

    /// Local civil moment for a Julian Date, truncated to the minute.
    pub fn from_jd(jd: f64, utc_offset_hours: f64) -> Result<Self, ChartError> {
        let local_days = jd - 2_440_587.5 + utc_offset_hours / 24.0;
        let day = local_days.floor() as i64;
        let minutes = ((local_days - day as f64) * 1440.0).round() as i64;
        let (day, minutes) = if minutes >= 1440 {
            (day + 1, minutes - 1440)
        } else {
            (day, minutes)
        };
        let (year, month, dom) = civil_from_days(day);
        Self::new(year, month, dom, (minutes / 60) as u32, (minutes % 60) as u32)
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Injectable true-solar-time adjustment applied before pillar resolution.
pub trait TimeCorrection {
    fn apply(&self, moment: &Moment) -> Result<Moment, ChartError>;
}

/// Mean solar-time correction: four minutes per degree of longitude away
/// from the timezone's reference meridian. The equation-of-time refinement
/// stays with external astronomical services.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanSolarOffset {
    minutes: i64,
}

impl MeanSolarOffset {
    pub fn from_longitude(longitude_deg: f64, zone_hours: f64) -> Self {
        Self {
            minutes: ((longitude_deg - zone_hours * 15.0) * 4.0).round() as i64,
        }
    }

    pub const fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl TimeCorrection for MeanSolarOffset {
    fn apply(&self, moment: &Moment) -> Result<Moment, ChartError> {
        moment.add_minutes(self.minutes)
    }
}

const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic-Gregorian civil date.
const fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of `days_from_civil`.
const fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = (y + if month <= 2 { 1 } else { 0 }) as i32;
    (year, month, day)
}
