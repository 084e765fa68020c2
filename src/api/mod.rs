use crate::core::error::ChatError;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::error;
use serde::Serialize;

pub mod conversations;
pub mod messages;

/// Every route of the chat backend, without the DI provider or middleware attached.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/conversations", conversations::router())
        .nest("/messages", messages::router())
}

async fn index() -> &'static str {
    "Chat backend is running"
}

/// The `{id}` segment of a conversation route. A segment that is not an integer
/// does not name any conversation, so it is rejected as not found.
#[derive(Debug)]
pub struct ConversationId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ConversationId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, StatusCode> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        Ok(ConversationId(id))
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response();
        }

        error!("{self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Internal server error".to_owned(),
            }),
        )
            .into_response()
    }
}

/// Body of the fixed success responses.
#[derive(Serialize, Debug)]
pub struct Acknowledgement {
    pub message: &'static str,
}
