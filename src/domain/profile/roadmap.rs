//! Roadmap duration value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidRoadmapError;

/// All planning horizons, shortest first
pub const ALL_ROADMAP_DURATIONS: &[RoadmapDuration] = &[
    RoadmapDuration::SixMonths,
    RoadmapDuration::OneYear,
    RoadmapDuration::TwoYears,
    RoadmapDuration::ThreeYears,
    RoadmapDuration::FiveYears,
    RoadmapDuration::TenYears,
];

/// Planning horizon requested for the generated advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoadmapDuration {
    SixMonths,
    OneYear,
    TwoYears,
    ThreeYears,
    FiveYears,
    TenYears,
}

impl RoadmapDuration {
    /// Label embedded into prompts
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SixMonths => "6 months",
            Self::OneYear => "1 year",
            Self::TwoYears => "2 years",
            Self::ThreeYears => "3 years",
            Self::FiveYears => "5 years",
            Self::TenYears => "10 years",
        }
    }

    /// Compact form accepted on the command line
    pub const fn short(&self) -> &'static str {
        match self {
            Self::SixMonths => "6m",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::ThreeYears => "3y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
        }
    }
}

impl FromStr for RoadmapDuration {
    type Err = InvalidRoadmapError;

    /// Accepts the label ("1 year"), the short form ("1y") or a dashed
    /// label ("1-year"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', " ");
        ALL_ROADMAP_DURATIONS
            .iter()
            .copied()
            .find(|d| d.label() == normalized || d.short() == normalized)
            .ok_or_else(|| InvalidRoadmapError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for RoadmapDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_labels() {
        assert_eq!(
            "6 months".parse::<RoadmapDuration>().unwrap(),
            RoadmapDuration::SixMonths
        );
        assert_eq!(
            "1 year".parse::<RoadmapDuration>().unwrap(),
            RoadmapDuration::OneYear
        );
        assert_eq!(
            "10 years".parse::<RoadmapDuration>().unwrap(),
            RoadmapDuration::TenYears
        );
    }

    #[test]
    fn parse_short_and_dashed_forms() {
        assert_eq!("1y".parse::<RoadmapDuration>().unwrap(), RoadmapDuration::OneYear);
        assert_eq!("6M".parse::<RoadmapDuration>().unwrap(), RoadmapDuration::SixMonths);
        assert_eq!(
            "2-years".parse::<RoadmapDuration>().unwrap(),
            RoadmapDuration::TwoYears
        );
        assert_eq!(
            "  5 Years ".parse::<RoadmapDuration>().unwrap(),
            RoadmapDuration::FiveYears
        );
    }

    #[test]
    fn parse_invalid() {
        assert!("4 years".parse::<RoadmapDuration>().is_err());
        assert!("".parse::<RoadmapDuration>().is_err());
        assert!("forever".parse::<RoadmapDuration>().is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(RoadmapDuration::OneYear.to_string(), "1 year");
    }

    #[test]
    fn all_durations_constant() {
        assert_eq!(ALL_ROADMAP_DURATIONS.len(), 6);
    }
}
