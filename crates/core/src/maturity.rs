//! Richardson Maturity Model levels served by the API.

use std::fmt;
use std::str::FromStr;

/// One of the four Richardson maturity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaturityLevel {
    Level0,
    Level1,
    Level2,
    Level3,
}

impl MaturityLevel {
    /// Every level, lowest first.
    pub const ALL: [MaturityLevel; 4] = [Self::Level0, Self::Level1, Self::Level2, Self::Level3];

    pub fn number(self) -> u8 {
        match self {
            Self::Level0 => 0,
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }

    /// URL prefix under which this level's routes are mounted.
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Level0 => "/api/v0",
            Self::Level1 => "/api/v1",
            Self::Level2 => "/api/v2",
            Self::Level3 => "/api/v3",
        }
    }

    /// One-line description of what the level adds.
    pub fn description(self) -> &'static str {
        match self {
            Self::Level0 => "Single POST endpoint, always HTTP 200, status in the body",
            Self::Level1 => "Resource URIs, still POST and always HTTP 200",
            Self::Level2 => "HTTP verbs and standard status codes",
            Self::Level3 => "Hypermedia controls (HATEOAS links)",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level{}", self.number())
    }
}

/// Error returned when a string does not name a maturity level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid maturity level '{0}'. Must be one of: Level0, Level1, Level2, Level3")]
pub struct ParseMaturityLevelError(pub String);

impl FromStr for MaturityLevel {
    type Err = ParseMaturityLevelError;

    /// Accepts `Level0`..`Level3` or a bare digit, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let digit = lower.strip_prefix("level").unwrap_or(lower.as_str());
        match digit {
            "0" => Ok(Self::Level0),
            "1" => Ok(Self::Level1),
            "2" => Ok(Self::Level2),
            "3" => Ok(Self::Level3),
            _ => Err(ParseMaturityLevelError(trimmed.to_string())),
        }
    }
}
