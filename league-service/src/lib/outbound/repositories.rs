pub mod league;
pub mod team;
pub mod token;
pub mod user;

pub use league::PostgresLeagueRepository;
pub use team::PostgresTeamRepository;
pub use token::PostgresTokenRepository;
pub use user::PostgresUserRepository;
