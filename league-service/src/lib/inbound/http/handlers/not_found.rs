use axum::http::Method;
use axum::http::Uri;

use super::ApiError;

/// Fallback for requests that match no route
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route found for \"{} {}\"", method, uri.path()))
}
