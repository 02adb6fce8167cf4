//! Brazilian-formatted money amounts: `.` groups thousands, `,` is the decimal mark.
//!
//!   "1.234,56" -> 1234.56
//!   "75,90"    -> 75.90
//!   "205.05"   -> 205.05   (already canonical, some banks print it this way)
//!   "1.500"    -> 1500.00  (a lone 3-digit group after the dot is thousands)
//!   "0,14."    -> 0.14     (stray point left by message truncation)

use bigdecimal::BigDecimal;
use gasto_core::AMOUNT_SCALE;
use std::str::FromStr;

use crate::error::FieldError;

const MAX_FRACTION_DIGITS: usize = AMOUNT_SCALE as usize;

/// Normalize a captured amount into a non-negative decimal with two fractional digits.
pub fn parse_amount(raw: &str) -> Result<BigDecimal, FieldError> {
    let trimmed = raw.trim();
    let s = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if s.is_empty() {
        return Err(FieldError::EmptyAmount);
    }

    let canonical = canonicalize(s).ok_or_else(|| FieldError::InvalidAmount(trimmed.to_string()))?;

    let fraction_len = canonical.split_once('.').map_or(0, |(_, frac)| frac.len());
    if fraction_len > MAX_FRACTION_DIGITS {
        return Err(FieldError::TooManyFractionDigits(trimmed.to_string()));
    }

    BigDecimal::from_str(&canonical)
        .map(|d| d.with_scale(AMOUNT_SCALE))
        .map_err(|_| FieldError::InvalidAmount(trimmed.to_string()))
}

/// Rewrite to `digits[.digits]`, or `None` when the text is not a plain amount.
fn canonicalize(s: &str) -> Option<String> {
    let out = match s.split_once(',') {
        Some((int_part, frac)) => {
            if frac.contains([',', '.']) {
                return None;
            }
            format!("{}.{}", strip_grouping(int_part)?, frac)
        }
        None if s.matches('.').count() > 1 || is_thousands_grouped(s) => strip_grouping(s)?,
        None => s.to_string(),
    };

    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match out.split_once('.') {
        Some((int_part, frac)) => digits(int_part) && digits(frac),
        None => digits(&out),
    };
    if !well_formed {
        return None;
    }

    Some(out)
}

/// `1.500`, `12.000.000`: a leading group of 1-3 digits without a leading zero,
/// then one or more groups of exactly 3 digits.
fn is_thousands_grouped(s: &str) -> bool {
    let mut groups = s.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if head.is_empty() || head.len() > 3 || head.starts_with('0') || !digits(head) {
        return false;
    }

    let mut tail = 0;
    for g in groups {
        if g.len() != 3 || !digits(g) {
            return false;
        }
        tail += 1;
    }
    tail > 0
}

/// Remove `.` thousands separators, checking the groups are well formed
/// (leading group of 1-3 digits, then groups of exactly 3).
fn strip_grouping(s: &str) -> Option<String> {
    if !s.contains('.') {
        return Some(s.to_string());
    }

    let mut groups = s.split('.');
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 {
        return None;
    }

    let mut out = head.to_string();
    for g in groups {
        if g.len() != 3 {
            return None;
        }
        out.push_str(g);
    }
    Some(out)
}
