use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::league::models::LeagueId;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::NewTeam;
use crate::domain::team::models::Team;
use crate::domain::team::models::TeamId;
use crate::domain::team::models::TeamName;
use crate::domain::team::models::TeamStrip;
use crate::domain::team::ports::TeamRepository;

pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Stored rows may predate request validation (fixtures), so they are not re-validated
    fn row_to_team(row: PgRow) -> Team {
        Team {
            id: TeamId(row.get("id")),
            name: TeamName::trusted(row.get("name")),
            strip: TeamStrip::trusted(row.get("strip")),
            league_id: LeagueId(row.get("league_id")),
        }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, team: NewTeam) -> Result<Team, TeamError> {
        let row = sqlx::query(
            r#"
            INSERT INTO teams (name, strip, league_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, strip, league_id
            "#,
        )
        .bind(team.name.as_str())
        .bind(team.strip.as_str())
        .bind(team.league_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                TeamError::LeagueNotFound(team.league_id)
            }
            _ => TeamError::DatabaseError(e.to_string()),
        })?;

        Ok(Self::row_to_team(row))
    }

    async fn find_all(&self) -> Result<Vec<Team>, TeamError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, strip, league_id
            FROM teams
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TeamError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::row_to_team).collect())
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, TeamError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, strip, league_id
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TeamError::DatabaseError(e.to_string()))?;

        Ok(row.map(Self::row_to_team))
    }

    async fn find_by_league(&self, league_id: LeagueId) -> Result<Vec<Team>, TeamError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, strip, league_id
            FROM teams
            WHERE league_id = $1
            ORDER BY id
            "#,
        )
        .bind(league_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TeamError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::row_to_team).collect())
    }

    async fn update(&self, team: Team) -> Result<Team, TeamError> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = $2, strip = $3
            WHERE id = $1
            "#,
        )
        .bind(team.id.0)
        .bind(team.name.as_str())
        .bind(team.strip.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TeamError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TeamError::NotFound(team.id));
        }

        Ok(team)
    }
}
