use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::League;
use crate::domain::league::models::LeagueId;
use crate::domain::league::ports::LeagueRepository;
use crate::domain::league::ports::LeagueServicePort;

/// Domain service implementation for league operations.
pub struct LeagueService<LR>
where
    LR: LeagueRepository,
{
    repository: Arc<LR>,
}

impl<LR> LeagueService<LR>
where
    LR: LeagueRepository,
{
    pub fn new(repository: Arc<LR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<LR> LeagueServicePort for LeagueService<LR>
where
    LR: LeagueRepository,
{
    async fn list_leagues(&self) -> Result<Vec<League>, LeagueError> {
        self.repository.find_all().await
    }

    async fn get_league(&self, id: LeagueId) -> Result<League, LeagueError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(LeagueError::NotFound(id))
    }

    async fn delete_league(&self, id: LeagueId) -> Result<(), LeagueError> {
        self.repository.delete(id).await?;
        tracing::info!(league_id = %id, "League deleted");
        Ok(())
    }
}
