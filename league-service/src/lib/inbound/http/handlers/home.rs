use axum::http::StatusCode;

use super::ApiSuccess;
use super::MessageResponseData;

pub async fn home() -> ApiSuccess<MessageResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: "Welcome to the API application.".to_string(),
        },
    )
}
