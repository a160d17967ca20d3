pub mod access;
pub mod league;
pub mod team;
pub mod token;
pub mod user;
