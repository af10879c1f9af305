//! UTC calendar date/time with millisecond precision.
//!
//! Provides `UtcTime`, the canonical instant representation used throughout
//! the engine. Searches run on Julian Dates (UTC axis); conversion back to
//! the calendar rounds to the nearest millisecond.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TimeError;
use crate::julian::{
    MILLIS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, day_number_to_calendar, days_in_month,
};

const MILLIS_PER_DAY_I64: i64 = 86_400_000;

/// Civil day number (JD at noon) of 1970-01-01.
const UNIX_EPOCH_DAY_NUMBER: i64 = 2_440_588;

/// UTC calendar date with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self::from_unix_millis(ms)
    }

    /// Build from milliseconds since 1970-01-01T00:00:00Z.
    pub fn from_unix_millis(ms: i64) -> Self {
        let days = ms.div_euclid(MILLIS_PER_DAY_I64);
        let ms_of_day = ms.rem_euclid(MILLIS_PER_DAY_I64);
        Self::from_day_and_millis(UNIX_EPOCH_DAY_NUMBER + days, ms_of_day)
    }

    /// Julian Date on the UTC axis.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a UTC Julian Date back to the calendar, rounded to the
    /// nearest millisecond.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let shifted = jd_utc + 0.5;
        let z = shifted.floor();
        let ms = ((shifted - z) * MILLIS_PER_DAY).round() as i64;
        if ms >= MILLIS_PER_DAY_I64 {
            Self::from_day_and_millis(z as i64 + 1, ms - MILLIS_PER_DAY_I64)
        } else {
            Self::from_day_and_millis(z as i64, ms)
        }
    }

    /// Milliseconds since 1970-01-01T00:00:00Z, rounded.
    pub fn to_unix_millis(&self) -> i64 {
        ((self.to_jd_utc() - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round() as i64
    }

    fn from_day_and_millis(day_number: i64, ms_of_day: i64) -> Self {
        let (year, month, day) = day_number_to_calendar(day_number);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::OutOfRange("month"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::OutOfRange("day"));
        }
        if self.hour > 23 {
            return Err(TimeError::OutOfRange("hour"));
        }
        if self.minute > 59 {
            return Err(TimeError::OutOfRange("minute"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::OutOfRange("second"));
        }
        Ok(())
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ms = ((self.second * 1000.0).round() as u32).min(59_999);
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            ms / 1000,
            ms % 1000
        )
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse an ISO-8601 date or date-time.
    ///
    /// Accepted: `YYYY-MM-DD`, `YYYY-MM-DDThh:mm`, `YYYY-MM-DDThh:mm:ss[.fff]`,
    /// each optionally suffixed with `Z` or a `±hh:mm` / `±hhmm` offset.
    /// Without a suffix the clock reading is taken as UTC. Sub-millisecond
    /// digits are truncated.
    fn from_str(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        let (date_part, clock_part) = match s.split_once(['T', 't', ' ']) {
            Some((d, c)) => (d, Some(c)),
            None => (s, None),
        };
        // report the full input rather than the fragment that failed
        let whole = |e: TimeError| match e {
            TimeError::InvalidFormat(_) => invalid(s),
            other => other,
        };

        let (year, month, day) = parse_date(date_part).map_err(whole)?;
        let (hour, minute, second, offset_minutes) = match clock_part {
            Some(c) => parse_clock(c).map_err(whole)?,
            None => (0, 0, 0.0, 0),
        };

        let utc = Self::new(year, month, day, hour, minute, second);
        utc.validate()?;
        if offset_minutes == 0 {
            Ok(utc)
        } else {
            Ok(Self::from_jd_utc(
                utc.to_jd_utc() - offset_minutes as f64 / 1440.0,
            ))
        }
    }
}

fn invalid(s: &str) -> TimeError {
    TimeError::InvalidFormat(format!(
        "expected YYYY-MM-DD[Thh:mm[:ss[.fff]]][Z|±hh:mm], got {s:?}"
    ))
}

fn parse_digits<T: FromStr>(s: &str, len: usize, whole: &str) -> Result<T, TimeError> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(whole));
    }
    s.parse().map_err(|_| invalid(whole))
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let mut parts = s.split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid(s));
    };
    Ok((
        parse_digits(y, 4, s)?,
        parse_digits(m, 2, s)?,
        parse_digits(d, 2, s)?,
    ))
}

/// Parse `hh:mm[:ss[.fff]][Z|±hh:mm|±hhmm]` into clock fields and a UTC
/// offset in minutes.
fn parse_clock(s: &str) -> Result<(u32, u32, f64, i32), TimeError> {
    let (clock, offset_minutes) = if let Some(c) = s.strip_suffix(['Z', 'z']) {
        (c, 0)
    } else if let Some(pos) = s.rfind(['+', '-']) {
        (&s[..pos], parse_offset(&s[pos..], s)?)
    } else {
        (s, 0)
    };

    let mut parts = clock.split(':');
    let (Some(h), Some(m)) = (parts.next(), parts.next()) else {
        return Err(invalid(s));
    };
    let sec_part = parts.next();
    if parts.next().is_some() {
        return Err(invalid(s));
    }

    let hour = parse_digits(h, 2, s)?;
    let minute = parse_digits(m, 2, s)?;
    let second = match sec_part {
        None => 0.0,
        Some(sec) => {
            let (whole, frac) = sec.split_once('.').unwrap_or((sec, ""));
            let whole: u32 = parse_digits(whole, 2, s)?;
            if !frac.bytes().all(|b| b.is_ascii_digit()) || (sec.contains('.') && frac.is_empty())
            {
                return Err(invalid(s));
            }
            let ms: u32 = format!("{frac:0<3}")[..3].parse().map_err(|_| invalid(s))?;
            whole as f64 + ms as f64 / 1000.0
        }
    };
    Ok((hour, minute, second, offset_minutes))
}

fn parse_offset(s: &str, whole: &str) -> Result<i32, TimeError> {
    let sign = if s.starts_with('-') { -1 } else { 1 };
    let body = &s[1..];
    let (h, m) = match body.split_once(':') {
        Some((h, m)) => (h, m),
        None if body.len() == 4 => body.split_at(2),
        None if body.len() == 2 => (body, "00"),
        None => return Err(invalid(whole)),
    };
    let h: i32 = parse_digits(h, 2, whole)?;
    let m: i32 = parse_digits(m, 2, whole)?;
    if h > 23 || m > 59 {
        return Err(TimeError::OutOfRange("utc offset"));
    }
    Ok(sign * (h * 60 + m))
}
