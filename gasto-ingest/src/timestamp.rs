//! Message date/time captures (`dd/mm/yyyy` + `hh:mm`) into a naive local date-time.
//!
//! No timezone is attached: the value is the wall-clock reading printed in the
//! message. Callers needing an absolute instant supply their own zone.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

use crate::error::FieldError;

/// Combine a date and a time captured from the same match.
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, FieldError> {
    let d = parse_dd_mm_yyyy(date).ok_or_else(|| FieldError::InvalidDate(date.to_string()))?;
    let t = parse_hh_mm(time).ok_or_else(|| FieldError::InvalidTime(time.to_string()))?;
    Ok(d.and_time(t))
}

fn parse_dd_mm_yyyy(s: &str) -> Option<NaiveDate> {
    let mut it = s.trim().split('/');
    let day: u32 = fixed_width(it.next()?, 2)?;
    let month: u32 = fixed_width(it.next()?, 2)?;
    let year: i32 = fixed_width(it.next()?, 4)?;
    if it.next().is_some() {
        return None;
    }
    // from_ymd_opt enforces month range and per-month day validity, leap years included
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_hh_mm(s: &str) -> Option<NaiveTime> {
    let (h, m) = s.trim().split_once(':')?;
    NaiveTime::from_hms_opt(fixed_width(h, 2)?, fixed_width(m, 2)?, 0)
}

fn fixed_width<T: FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
