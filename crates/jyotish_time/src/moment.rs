//! UTC calendar moment with sub-second precision.
//!
//! [`Moment`] is the canonical instant type used throughout the workspace.
//! Its fields are always UTC; `utc_offset_hours` is carried for display only
//! and never participates in any conversion or computation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A UTC instant with a display-only local offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Hours east of UTC, used only when rendering local times.
    pub utc_offset_hours: f64,
}

impl Moment {
    /// Create a UTC moment (offset 0).
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours: 0.0,
        }
    }

    /// Attach a display-only UTC offset. The UTC fields are unchanged.
    pub fn with_offset(mut self, utc_offset_hours: f64) -> Self {
        self.utc_offset_hours = utc_offset_hours;
        self
    }

    /// Midnight UTC on the same calendar date.
    pub fn date_start(&self) -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0.0,
            ..*self
        }
    }

    /// Convert to a Julian Date (UTC).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a Julian Date (UTC) back to a calendar moment.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours: 0.0,
        }
    }

    /// This moment shifted by a (possibly fractional, possibly negative)
    /// number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_jd(self.to_jd() + days).with_offset(self.utc_offset_hours)
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for Moment {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` (optional trailing `Z`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = match s.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };

        let mut date_parts = date.split('-');
        let year: i32 = next_field(&mut date_parts)?;
        let month: u32 = next_field(&mut date_parts)?;
        let day: u32 = next_field(&mut date_parts)?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDate("month or day out of range"));
        }

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut time_parts = t.split(':');
                let h: u32 = next_field(&mut time_parts)?;
                let m: u32 = next_field(&mut time_parts)?;
                let s: f64 = match time_parts.next() {
                    Some(sec) => sec
                        .parse()
                        .map_err(|_| TimeError::InvalidDate("bad seconds field"))?,
                    None => 0.0,
                };
                if h > 23 || m > 59 || !(0.0..60.0).contains(&s) {
                    return Err(TimeError::InvalidDate("time component out of range"));
                }
                (h, m, s)
            }
        };

        Ok(Moment::new(year, month, day, hour, minute, second))
    }
}

fn next_field<'a, T: FromStr>(parts: &mut impl Iterator<Item = &'a str>) -> Result<T, TimeError> {
    parts
        .next()
        .ok_or(TimeError::InvalidDate("missing field"))?
        .parse()
        .map_err(|_| TimeError::InvalidDate("non-numeric field"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let m = Moment::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(m.year, 2024);
        assert_eq!(m.hour, 12);
        assert!((m.second - 45.5).abs() < 1e-12);
        assert_eq!(m.utc_offset_hours, 0.0);
    }

    #[test]
    fn offset_does_not_affect_jd() {
        let base = Moment::new(2024, 3, 20, 12, 0, 0.0);
        let shifted = base.with_offset(5.5);
        assert_eq!(base.to_jd(), shifted.to_jd());
    }

    #[test]
    fn jd_roundtrip() {
        let m = Moment::new(2024, 7, 1, 6, 15, 30.0);
        let back = Moment::from_jd(m.to_jd());
        assert_eq!(back.year, 2024);
        assert_eq!(back.month, 7);
        assert_eq!(back.day, 1);
        assert_eq!(back.hour, 6);
        assert_eq!(back.minute, 15);
        assert!((back.second - 30.0).abs() < 1e-4);
    }

    #[test]
    fn display_whole_seconds() {
        let m = Moment::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(m.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn parse_date_only() {
        let m: Moment = "2026-03-01".parse().unwrap();
        assert_eq!((m.year, m.month, m.day), (2026, 3, 1));
        assert_eq!((m.hour, m.minute), (0, 0));
    }

    #[test]
    fn parse_full() {
        let m: Moment = "1990-05-15T14:30:00Z".parse().unwrap();
        assert_eq!((m.hour, m.minute), (14, 30));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-date".parse::<Moment>().is_err());
        assert!("2024-13-01".parse::<Moment>().is_err());
        assert!("2024-01-01T25:00:00".parse::<Moment>().is_err());
    }

    #[test]
    fn add_days_fractional() {
        let m = Moment::new(2024, 1, 1, 0, 0, 0.0);
        let next = m.add_days(1.5);
        assert_eq!((next.day, next.hour), (2, 12));
    }

    #[test]
    fn date_start_zeroes_time() {
        let m = Moment::new(2024, 6, 10, 18, 45, 12.0);
        let d = m.date_start();
        assert_eq!((d.hour, d.minute, d.second as u32), (0, 0, 0));
        assert_eq!(d.day, 10);
    }
}
