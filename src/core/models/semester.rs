//! Semester names ("Fall 2024")

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic season, in calendar order within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Spring term
    Spring,
    /// Summer session
    Summer,
    /// Fall term
    Fall,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        };
        f.write_str(name)
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            _ => Err(format!("Unknown season '{s}' (expected Spring, Summer or Fall)")),
        }
    }
}

/// A named term such as "Fall 2024"
///
/// Ordering is chronological: by year, then season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester {
    /// Calendar year
    pub year: u16,
    /// Season within the year
    pub season: Season,
}

impl Semester {
    /// Create a semester
    #[must_use]
    pub const fn new(season: Season, year: u16) -> Self {
        Self { year, season }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(season), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Invalid semester '{s}' (expected e.g. \"Fall 2024\")"));
        };

        let season = season.parse::<Season>()?;
        let year = year
            .parse::<u16>()
            .map_err(|_| format!("Invalid year '{year}' in semester '{s}'"))?;

        Ok(Self::new(season, year))
    }
}
