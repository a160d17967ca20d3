use std::fmt;

use crate::domain::league::errors::LeagueIdError;
use crate::domain::league::errors::LeagueNameError;

/// Football league grouping teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    pub id: LeagueId,
    pub name: LeagueName,
}

/// Store-assigned league identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LeagueId(pub i64);

impl LeagueId {
    /// Parse a league id from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, LeagueIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(LeagueIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// League display name, at most 255 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueName(String);

impl LeagueName {
    const MAX_LENGTH: usize = 255;

    /// Create a new league name.
    ///
    /// # Errors
    /// * `Blank` - Empty or whitespace only
    /// * `TooLong` - Longer than 255 characters
    pub fn new(name: String) -> Result<Self, LeagueNameError> {
        if name.trim().is_empty() {
            return Err(LeagueNameError::Blank);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(LeagueNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
