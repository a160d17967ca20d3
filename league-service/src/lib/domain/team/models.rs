use std::fmt;

use crate::domain::league::models::LeagueId;
use crate::domain::team::errors::TeamField;
use crate::domain::team::errors::TeamFieldError;
use crate::domain::team::errors::TeamIdError;

const MAX_FIELD_LENGTH: usize = 255;

/// Football team belonging to exactly one league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
    pub strip: TeamStrip,
    pub league_id: LeagueId,
}

/// Store-assigned team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Parse a team id from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, TeamIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(TeamIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Checks a team attribute: non-empty, at most 255 characters, ASCII letters,
/// digits, spaces, dots and hyphens only.
fn validate_field(field: TeamField, value: String) -> Result<String, TeamFieldError> {
    if value.is_empty() {
        return Err(TeamFieldError::Blank(field));
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '.' || c == '-')
    {
        return Err(TeamFieldError::InvalidCharacters(field));
    }

    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(TeamFieldError::TooLong {
            field,
            max: MAX_FIELD_LENGTH,
        });
    }

    Ok(value)
}

/// Team name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamName(String);

impl TeamName {
    /// Create a validated team name.
    ///
    /// # Errors
    /// * `Blank` - Empty string
    /// * `InvalidCharacters` - Outside letters, digits, spaces, dots and hyphens
    /// * `TooLong` - Longer than 255 characters
    pub fn new(name: String) -> Result<Self, TeamFieldError> {
        validate_field(TeamField::Name, name).map(Self)
    }

    /// Wrap a name that was stored or seeded without going through request
    /// validation.
    pub(crate) fn trusted(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Team strip (kit colour) value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStrip(String);

impl TeamStrip {
    /// Create a validated team strip.
    ///
    /// # Errors
    /// Same rules as [`TeamName::new`].
    pub fn new(strip: String) -> Result<Self, TeamFieldError> {
        validate_field(TeamField::Strip, strip).map(Self)
    }

    pub(crate) fn trusted(strip: String) -> Self {
        Self(strip)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Team fields to persist under a league
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub league_id: LeagueId,
    pub name: TeamName,
    pub strip: TeamStrip,
}

/// Command to add a team to a league
#[derive(Debug, Clone)]
pub struct CreateTeamCommand {
    pub name: TeamName,
    pub strip: TeamStrip,
}

impl CreateTeamCommand {
    /// Validate raw request fields, name first then strip.
    ///
    /// # Errors
    /// First violation found; a missing field is blank.
    pub fn new(name: Option<String>, strip: Option<String>) -> Result<Self, TeamFieldError> {
        let name = TeamName::new(name.unwrap_or_default())?;
        let strip = TeamStrip::new(strip.unwrap_or_default())?;
        Ok(Self { name, strip })
    }
}

/// Command to update team fields
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamCommand {
    pub name: Option<TeamName>,
    pub strip: Option<TeamStrip>,
}

impl UpdateTeamCommand {
    /// Validate raw request fields. Absent and empty fields mean "unchanged".
    ///
    /// # Errors
    /// First violation found, name first then strip.
    pub fn new(name: Option<String>, strip: Option<String>) -> Result<Self, TeamFieldError> {
        let name = name
            .filter(|value| !value.is_empty())
            .map(TeamName::new)
            .transpose()?;
        let strip = strip
            .filter(|value| !value.is_empty())
            .map(TeamStrip::new)
            .transpose()?;
        Ok(Self { name, strip })
    }
}
