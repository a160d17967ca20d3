use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::League;
use crate::domain::league::models::LeagueId;
use crate::domain::league::models::LeagueName;
use crate::domain::league::ports::LeagueRepository;

pub struct PostgresLeagueRepository {
    pool: PgPool,
}

impl PostgresLeagueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_league(row: PgRow) -> Result<League, LeagueError> {
        Ok(League {
            id: LeagueId(row.get("id")),
            name: LeagueName::new(row.get("name"))?,
        })
    }
}

#[async_trait]
impl LeagueRepository for PostgresLeagueRepository {
    async fn create(&self, name: LeagueName) -> Result<League, LeagueError> {
        let row = sqlx::query(
            r#"
            INSERT INTO leagues (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| LeagueError::DatabaseError(e.to_string()))?;

        Self::row_to_league(row)
    }

    async fn find_all(&self) -> Result<Vec<League>, LeagueError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM leagues
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LeagueError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_league).collect()
    }

    async fn find_by_id(&self, id: LeagueId) -> Result<Option<League>, LeagueError> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM leagues
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| LeagueError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_league).transpose()
    }

    async fn delete(&self, id: LeagueId) -> Result<(), LeagueError> {
        // Teams go with their league through ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM leagues
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| LeagueError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(LeagueError::NotFound(id));
        }

        Ok(())
    }
}
