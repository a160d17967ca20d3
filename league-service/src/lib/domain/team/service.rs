use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::league::models::LeagueId;
use crate::domain::league::ports::LeagueRepository;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::CreateTeamCommand;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamId;
use crate::domain::team::models::UpdateTeamCommand;
use crate::domain::team::ports::TeamRepository;
use crate::domain::team::ports::TeamServicePort;

/// Domain service implementation for team operations.
///
/// Consults the league repository for ownership checks.
pub struct TeamService<TR, LR>
where
    TR: TeamRepository,
    LR: LeagueRepository,
{
    teams: Arc<TR>,
    leagues: Arc<LR>,
}

impl<TR, LR> TeamService<TR, LR>
where
    TR: TeamRepository,
    LR: LeagueRepository,
{
    /// Create a new team service.
    ///
    /// # Arguments
    /// * `teams` - Team persistence implementation
    /// * `leagues` - League persistence implementation
    pub fn new(teams: Arc<TR>, leagues: Arc<LR>) -> Self {
        Self { teams, leagues }
    }

    async fn ensure_league_exists(&self, league_id: LeagueId) -> Result<(), TeamError> {
        self.leagues
            .find_by_id(league_id)
            .await?
            .map(|_| ())
            .ok_or(TeamError::LeagueNotFound(league_id))
    }
}

#[async_trait]
impl<TR, LR> TeamServicePort for TeamService<TR, LR>
where
    TR: TeamRepository,
    LR: LeagueRepository,
{
    async fn list_teams(&self) -> Result<Vec<Team>, TeamError> {
        self.teams.find_all().await
    }

    async fn get_team(&self, id: TeamId) -> Result<Team, TeamError> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    async fn list_league_teams(&self, league_id: LeagueId) -> Result<Vec<Team>, TeamError> {
        self.ensure_league_exists(league_id).await?;

        let teams = self.teams.find_by_league(league_id).await?;
        if teams.is_empty() {
            return Err(TeamError::LeagueHasNoTeams(league_id));
        }

        Ok(teams)
    }

    async fn add_team(
        &self,
        league_id: LeagueId,
        command: CreateTeamCommand,
    ) -> Result<Team, TeamError> {
        self.ensure_league_exists(league_id).await?;

        let team = self
            .teams
            .create(NewTeam {
                league_id,
                name: command.name,
                strip: command.strip,
            })
            .await?;
        tracing::info!(team_id = %team.id, league_id = %league_id, "Team created");

        Ok(team)
    }

    async fn update_team(
        &self,
        id: TeamId,
        command: UpdateTeamCommand,
    ) -> Result<Team, TeamError> {
        let mut team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or(TeamError::NotFound(id))?;

        if let Some(new_name) = command.name {
            team.name = new_name;
        }

        if let Some(new_strip) = command.strip {
            team.strip = new_strip;
        }

        self.teams.update(team).await
    }
}
