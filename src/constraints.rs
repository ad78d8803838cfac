//! Parsing of free-text problem constraints into a size bucket.
//!
//! `"1 <= n <= 2*10^5, m <= 1e9"` becomes `{ n: 200000, m: 1000000000 }`
//! bucketed as [`SizeBucket::VeryLarge`]. The parser never fails: text it
//! cannot read contributes nothing, and no bounds at all yields
//! [`SizeBucket::Unknown`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// `names<=value` on whitespace-free lowercase text. Power forms come before
/// the plain integer alternative so `10^5` is never read as `10`.
static BOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"((?:[a-z_][a-z0-9_]*,)*[a-z_][a-z0-9_]*)<=?(\d+(?:\.\d+)?e\d+|\d+\*10(?:\^|\*\*)\d+|10(?:\^|\*\*)\d+|\d+)",
    )
    .unwrap()
});

/// Coarse magnitude of the largest declared bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBucket {
    Unknown,
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl SizeBucket {
    pub fn from_bound(max_bound: u64) -> Self {
        match max_bound {
            b if b >= 1_000_000 => SizeBucket::VeryLarge,
            b if b >= 100_000 => SizeBucket::Large,
            b if b >= 10_000 => SizeBucket::Medium,
            b if b > 0 => SizeBucket::Small,
            _ => SizeBucket::Unknown,
        }
    }

    /// `large` or `very_large`: sizes where quadratic work stops fitting.
    pub fn is_large(&self) -> bool {
        matches!(self, SizeBucket::Large | SizeBucket::VeryLarge)
    }
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeBucket::Unknown => "unknown",
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
            SizeBucket::VeryLarge => "very_large",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedConstraints {
    pub size: SizeBucket,
    pub values: BTreeMap<String, u64>,
}

impl Default for ParsedConstraints {
    fn default() -> Self {
        Self {
            size: SizeBucket::Unknown,
            values: BTreeMap::new(),
        }
    }
}

impl ParsedConstraints {
    pub fn max_bound(&self) -> u64 {
        self.values.values().copied().max().unwrap_or(0)
    }

    pub fn bound(&self, name: &str) -> Option<u64> {
        self.values.get(name).copied()
    }
}

/// Parse constraint text. Pure and deterministic.
pub fn parse_constraints(text: &str) -> ParsedConstraints {
    if text.trim().is_empty() {
        return ParsedConstraints::default();
    }

    let normalized: String = text
        .replace('≤', "<=")
        .replace('×', "*")
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let mut values = BTreeMap::new();
    for caps in BOUND.captures_iter(&normalized) {
        let (Some(names), Some(raw)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(value) = parse_value(raw.as_str()) else {
            continue;
        };
        for name in names.as_str().split(',') {
            values.insert(name.to_string(), value);
        }
    }

    let size = SizeBucket::from_bound(values.values().copied().max().unwrap_or(0));
    ParsedConstraints { size, values }
}

/// Convert one bound literal; out-of-range values saturate to `u64::MAX`.
fn parse_value(raw: &str) -> Option<u64> {
    if let Some((mantissa, exponent)) = raw.split_once('e') {
        let exponent: u32 = exponent.parse().ok()?;
        return Some(scale(mantissa, exponent));
    }

    let power = raw.split_once("10^").or_else(|| raw.split_once("10**"));
    if let Some((prefix, exponent)) = power {
        let exponent: u32 = exponent.parse().ok()?;
        let mantissa = prefix.trim_end_matches('*');
        let mantissa = if mantissa.is_empty() { "1" } else { mantissa };
        return Some(scale(mantissa, exponent));
    }

    Some(raw.parse::<u64>().unwrap_or(u64::MAX))
}

/// `mantissa * 10^exponent`, where the mantissa may carry a fraction (`2.5e5`).
fn scale(mantissa: &str, exponent: u32) -> u64 {
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{whole}{fraction}");
    let Some(shift) = exponent.checked_sub(fraction.len() as u32) else {
        // More fractional digits than the exponent covers: truncate. A whole
        // part too wide for u64 saturates like every other oversized bound.
        let keep = digits.len().saturating_sub(fraction.len() - exponent as usize);
        return digits[..keep].parse().unwrap_or(u64::MAX);
    };
    let Ok(base) = digits.parse::<u64>() else {
        return u64::MAX;
    };
    10u64
        .checked_pow(shift)
        .and_then(|factor| base.checked_mul(factor))
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scientific_notation() {
        let parsed = parse_constraints("n <= 1e5");
        assert_eq!(parsed.bound("n"), Some(100_000));
        assert_eq!(parsed.size, SizeBucket::Large);
    }

    #[test]
    fn test_power_notation_is_not_truncated() {
        let parsed = parse_constraints("n <= 10^6");
        assert_eq!(parsed.bound("n"), Some(1_000_000));
        assert_eq!(parsed.size, SizeBucket::VeryLarge);
    }

    #[test]
    fn test_empty_and_malformed_text() {
        assert_eq!(parse_constraints(""), ParsedConstraints::default());
        assert_eq!(parse_constraints("   "), ParsedConstraints::default());
        let parsed = parse_constraints("the array is big");
        assert_eq!(parsed.size, SizeBucket::Unknown);
        assert!(parsed.values.is_empty());
    }

    #[test]
    fn test_shared_bound_and_maximum() {
        let parsed = parse_constraints("1 <= N, M <= 2*10^5; q <= 50");
        assert_eq!(parsed.bound("n"), Some(200_000));
        assert_eq!(parsed.bound("m"), Some(200_000));
        assert_eq!(parsed.bound("q"), Some(50));
        assert_eq!(parsed.max_bound(), 200_000);
        assert_eq!(parsed.size, SizeBucket::Large);
    }

    #[test]
    fn test_plain_integers_and_strict_bounds() {
        assert_eq!(parse_constraints("n < 100").size, SizeBucket::Small);
        assert_eq!(parse_constraints("n <= 10000").size, SizeBucket::Medium);
        assert_eq!(parse_constraints("n ≤ 2.5e5").bound("n"), Some(250_000));
        assert_eq!(parse_constraints("k <= 10**9").size, SizeBucket::VeryLarge);
    }

    #[test]
    fn test_overflowing_bound_saturates() {
        let parsed = parse_constraints("n <= 1e40");
        assert_eq!(parsed.bound("n"), Some(u64::MAX));
        assert_eq!(parsed.size, SizeBucket::VeryLarge);
    }

    #[test]
    fn test_wide_fractional_mantissa_saturates() {
        let parsed = parse_constraints("n <= 123456789012345678901.5e0");
        assert_eq!(parsed.bound("n"), Some(u64::MAX));
        assert_eq!(parsed.size, SizeBucket::VeryLarge);

        assert_eq!(parse_constraints("n <= 1.25e1").bound("n"), Some(12));
    }

    #[test]
    fn test_zero_bound_is_unknown() {
        assert_eq!(parse_constraints("n <= 0").size, SizeBucket::Unknown);
    }

    #[test]
    fn test_bucket_thresholds() {
        assert_eq!(SizeBucket::from_bound(9_999), SizeBucket::Small);
        assert_eq!(SizeBucket::from_bound(10_000), SizeBucket::Medium);
        assert_eq!(SizeBucket::from_bound(99_999), SizeBucket::Medium);
        assert_eq!(SizeBucket::from_bound(100_000), SizeBucket::Large);
        assert_eq!(SizeBucket::from_bound(1_000_000), SizeBucket::VeryLarge);
    }
}
