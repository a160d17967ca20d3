pub mod errors;
pub mod extractor;

pub use errors::BearerError;
pub use extractor::extract;
pub use extractor::supports;
pub use extractor::BEARER_SCHEME;
