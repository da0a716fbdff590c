//! Duration value object for config values such as cache TTL and timeout

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default recommendation cache lifetime (24 hours)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60 * 24;

/// Default request timeout for the generative model (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Value object representing a whole-second time span.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    seconds: u64,
}

impl Duration {
    pub const fn from_secs(secs: u64) -> Self {
        Self { seconds: secs }
    }

    pub const fn default_cache_ttl() -> Self {
        Self::from_secs(DEFAULT_CACHE_TTL_SECS)
    }

    pub const fn default_timeout() -> Self {
        Self::from_secs(DEFAULT_TIMEOUT_SECS)
    }

    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }

    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_secs(self.seconds)
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse a duration string.
    /// Supported formats: "30s", "5m", "24h", "1h30m", "2m30s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let invalid = || DurationParseError {
            input: s.to_string(),
        };

        let mut total: u64 = 0;
        let mut current_num = String::new();
        let mut last_unit = 0u64;

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }

            let unit = match ch {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return Err(invalid()),
            };

            // Units must be given largest first, each at most once
            if current_num.is_empty() || (last_unit != 0 && unit >= last_unit) {
                return Err(invalid());
            }

            let value: u64 = current_num.parse().map_err(|_| invalid())?;
            total = value
                .checked_mul(unit)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(invalid)?;
            current_num.clear();
            last_unit = unit;
        }

        if !current_num.is_empty() || last_unit == 0 || total == 0 {
            return Err(invalid());
        }

        Ok(Self { seconds: total })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;

        let mut out = String::new();
        if hours > 0 {
            out.push_str(&format!("{}h", hours));
        }
        if minutes > 0 {
            out.push_str(&format!("{}m", minutes));
        }
        if seconds > 0 || out.is_empty() {
            out.push_str(&format!("{}s", seconds));
        }
        write!(f, "{}", out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seconds_only() {
        let d: Duration = "30s".parse().unwrap();
        assert_eq!(d.as_secs(), 30);
    }

    #[test]
    fn parse_hours() {
        let d: Duration = "24h".parse().unwrap();
        assert_eq!(d.as_secs(), DEFAULT_CACHE_TTL_SECS);
    }

    #[test]
    fn parse_combined_units() {
        assert_eq!("1h30m".parse::<Duration>().unwrap().as_secs(), 5400);
        assert_eq!("2m30s".parse::<Duration>().unwrap().as_secs(), 150);
        assert_eq!("1h0m5s".parse::<Duration>().unwrap().as_secs(), 3605);
    }

    #[test]
    fn parse_case_insensitive_with_whitespace() {
        assert_eq!("  1H30S ".parse::<Duration>().unwrap().as_secs(), 3630);
    }

    #[test]
    fn parse_invalid_zero() {
        assert!("0s".parse::<Duration>().is_err());
        assert!("0h0m".parse::<Duration>().is_err());
    }

    #[test]
    fn parse_invalid_format() {
        assert!("".parse::<Duration>().is_err());
        assert!("30".parse::<Duration>().is_err());
        assert!("abc".parse::<Duration>().is_err());
        assert!("30x".parse::<Duration>().is_err());
        assert!("5s1m".parse::<Duration>().is_err());
        assert!("1m1m".parse::<Duration>().is_err());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Duration::from_secs(30).to_string(), "30s");
        assert_eq!(Duration::from_secs(120).to_string(), "2m");
        assert_eq!(Duration::from_secs(5400).to_string(), "1h30m");
        assert_eq!(Duration::default_cache_ttl().to_string(), "24h");
    }

    #[test]
    fn as_std_duration() {
        assert_eq!(Duration::from_secs(30).as_std(), StdDuration::from_secs(30));
    }
}
