pub mod config;
pub mod domain;
pub mod fixtures;
pub mod inbound;
pub mod outbound;

pub use domain::league;
pub use domain::team;
pub use domain::user;
pub use outbound::repositories;
