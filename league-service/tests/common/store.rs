use std::sync::Mutex;

use async_trait::async_trait;
use league_service::domain::league::errors::LeagueError;
use league_service::domain::league::models::League;
use league_service::domain::league::models::LeagueId;
use league_service::domain::league::models::LeagueName;
use league_service::domain::league::ports::LeagueRepository;
use league_service::domain::team::errors::TeamError;
use league_service::domain::team::models::NewTeam;
use league_service::domain::team::models::Team;
use league_service::domain::team::models::TeamId;
use league_service::domain::team::ports::TeamRepository;
use league_service::domain::token::errors::TokenError;
use league_service::domain::token::models::TokenRecord;
use league_service::domain::token::ports::TokenRepository;
use league_service::domain::user::errors::UserError;
use league_service::domain::user::models::User;
use league_service::domain::user::models::UserId;
use league_service::domain::user::models::Username;
use league_service::domain::user::ports::UserRepository;

/// In-memory stand-in for the Postgres schema, including its cascades
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    tokens: Vec<TokenRecord>,
    leagues: Vec<League>,
    teams: Vec<Team>,
    next_league_id: i64,
    next_team_id: i64,
}

impl InMemoryStore {
    pub fn tokens(&self) -> Vec<TokenRecord> {
        self.state.lock().unwrap().tokens.clone()
    }

    pub fn deactivate_user(&self, id: UserId) {
        let mut state = self.state.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
            user.is_active = false;
        }
    }

    /// Removes the user and, like the foreign key, its tokens
    pub fn delete_user(&self, id: UserId) {
        let mut state = self.state.lock().unwrap();
        state.users.retain(|u| u.id != id);
        state.tokens.retain(|t| t.user_id != id);
    }

    pub fn team_count(&self) -> usize {
        self.state.lock().unwrap().teams.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_active_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.id == *id && u.is_active)
            .cloned())
    }

    async fn find_active_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.username == *username && u.is_active)
            .cloned())
    }
}

#[async_trait]
impl TokenRepository for InMemoryStore {
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, TokenError> {
        let mut state = self.state.lock().unwrap();
        state.tokens.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl LeagueRepository for InMemoryStore {
    async fn create(&self, name: LeagueName) -> Result<League, LeagueError> {
        let mut state = self.state.lock().unwrap();
        state.next_league_id += 1;
        let league = League {
            id: LeagueId(state.next_league_id),
            name,
        };
        state.leagues.push(league.clone());
        Ok(league)
    }

    async fn find_all(&self) -> Result<Vec<League>, LeagueError> {
        Ok(self.state.lock().unwrap().leagues.clone())
    }

    async fn find_by_id(&self, id: LeagueId) -> Result<Option<League>, LeagueError> {
        let state = self.state.lock().unwrap();
        Ok(state.leagues.iter().find(|l| l.id == id).cloned())
    }

    async fn delete(&self, id: LeagueId) -> Result<(), LeagueError> {
        let mut state = self.state.lock().unwrap();
        let before = state.leagues.len();
        state.leagues.retain(|l| l.id != id);
        if state.leagues.len() == before {
            return Err(LeagueError::NotFound(id));
        }
        state.teams.retain(|t| t.league_id != id);
        Ok(())
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn create(&self, team: NewTeam) -> Result<Team, TeamError> {
        let mut state = self.state.lock().unwrap();
        if !state.leagues.iter().any(|l| l.id == team.league_id) {
            return Err(TeamError::LeagueNotFound(team.league_id));
        }
        state.next_team_id += 1;
        let team = Team {
            id: TeamId(state.next_team_id),
            name: team.name,
            strip: team.strip,
            league_id: team.league_id,
        };
        state.teams.push(team.clone());
        Ok(team)
    }

    async fn find_all(&self) -> Result<Vec<Team>, TeamError> {
        Ok(self.state.lock().unwrap().teams.clone())
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, TeamError> {
        let state = self.state.lock().unwrap();
        Ok(state.teams.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_league(&self, league_id: LeagueId) -> Result<Vec<Team>, TeamError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .teams
            .iter()
            .filter(|t| t.league_id == league_id)
            .cloned()
            .collect())
    }

    async fn update(&self, team: Team) -> Result<Team, TeamError> {
        let mut state = self.state.lock().unwrap();
        let stored = state
            .teams
            .iter_mut()
            .find(|t| t.id == team.id)
            .ok_or(TeamError::NotFound(team.id))?;
        *stored = team.clone();
        Ok(team)
    }
}
