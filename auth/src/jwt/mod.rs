pub mod claims;
pub mod errors;
pub mod handler;
pub mod settings;
pub mod ttl;

pub use claims::Claims;
pub use claims::TokenSubject;
pub use errors::JwtError;
pub use errors::TtlError;
pub use handler::JwtHandler;
pub use settings::JwtSettings;
pub use ttl::TokenTtl;
