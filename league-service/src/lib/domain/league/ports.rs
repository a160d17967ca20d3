use async_trait::async_trait;

use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::League;
use crate::domain::league::models::LeagueId;
use crate::domain::league::models::LeagueName;

/// Port for league domain service operations.
#[async_trait]
pub trait LeagueServicePort: Send + Sync + 'static {
    /// Retrieve all leagues in id order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_leagues(&self) -> Result<Vec<League>, LeagueError>;

    /// Retrieve league by identifier.
    ///
    /// # Arguments
    /// * `id` - League ID
    ///
    /// # Returns
    /// League entity
    ///
    /// # Errors
    /// * `NotFound` - League does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_league(&self, id: LeagueId) -> Result<League, LeagueError>;

    /// Delete league together with its teams.
    ///
    /// # Arguments
    /// * `id` - League ID to delete
    ///
    /// # Errors
    /// * `NotFound` - League does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_league(&self, id: LeagueId) -> Result<(), LeagueError>;
}

/// Persistence operations for league aggregate.
#[async_trait]
pub trait LeagueRepository: Send + Sync + 'static {
    /// Persist a new league and return it with its assigned id.
    async fn create(&self, name: LeagueName) -> Result<League, LeagueError>;

    /// Retrieve all leagues ordered by id.
    async fn find_all(&self) -> Result<Vec<League>, LeagueError>;

    /// Retrieve league by identifier.
    ///
    /// # Returns
    /// Optional league entity (None if not found)
    async fn find_by_id(&self, id: LeagueId) -> Result<Option<League>, LeagueError>;

    /// Remove league and, by cascade, every team it owns.
    ///
    /// # Errors
    /// * `NotFound` - League does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: LeagueId) -> Result<(), LeagueError>;
}
