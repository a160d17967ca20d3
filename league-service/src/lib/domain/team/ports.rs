use async_trait::async_trait;

use crate::domain::league::models::LeagueId;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::CreateTeamCommand;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamId;
use crate::domain::team::models::UpdateTeamCommand;

/// Port for team domain service operations.
#[async_trait]
pub trait TeamServicePort: Send + Sync + 'static {
    /// Retrieve all teams in id order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_teams(&self) -> Result<Vec<Team>, TeamError>;

    /// Retrieve team by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Team does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_team(&self, id: TeamId) -> Result<Team, TeamError>;

    /// Retrieve the teams of one league.
    ///
    /// # Arguments
    /// * `league_id` - Owning league
    ///
    /// # Returns
    /// Non-empty vector of teams
    ///
    /// # Errors
    /// * `LeagueNotFound` - League does not exist
    /// * `LeagueHasNoTeams` - League exists but owns no team
    /// * `DatabaseError` - Database operation failed
    async fn list_league_teams(&self, league_id: LeagueId) -> Result<Vec<Team>, TeamError>;

    /// Add a team to a league.
    ///
    /// # Arguments
    /// * `league_id` - Owning league
    /// * `command` - Validated name and strip
    ///
    /// # Returns
    /// Created team with its assigned id
    ///
    /// # Errors
    /// * `LeagueNotFound` - League does not exist
    /// * `DatabaseError` - Database operation failed
    async fn add_team(
        &self,
        league_id: LeagueId,
        command: CreateTeamCommand,
    ) -> Result<Team, TeamError>;

    /// Update team with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Team does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_team(&self, id: TeamId, command: UpdateTeamCommand)
        -> Result<Team, TeamError>;
}

/// Persistence operations for team aggregate.
#[async_trait]
pub trait TeamRepository: Send + Sync + 'static {
    /// Persist a new team and return it with its assigned id.
    ///
    /// # Errors
    /// * `LeagueNotFound` - Owning league does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, team: NewTeam) -> Result<Team, TeamError>;

    /// Retrieve all teams ordered by id.
    async fn find_all(&self) -> Result<Vec<Team>, TeamError>;

    /// Retrieve team by identifier.
    ///
    /// # Returns
    /// Optional team entity (None if not found)
    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, TeamError>;

    /// Retrieve the teams of a league ordered by id.
    async fn find_by_league(&self, league_id: LeagueId) -> Result<Vec<Team>, TeamError>;

    /// Store the new name and strip of an existing team.
    ///
    /// # Errors
    /// * `NotFound` - Team does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, team: Team) -> Result<Team, TeamError>;
}
