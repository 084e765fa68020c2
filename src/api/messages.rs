//! Message endpoints

use crate::api::Acknowledgement;
use crate::core::error::ChatError;
use crate::core::traits::ChatService;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/", post(send_message))
}

async fn send_message(
    Inject(chat_service): Inject<dyn ChatService>,
    Json(message): Json<schemas::CreateMessage>,
) -> Result<(StatusCode, Json<Acknowledgement>), ChatError> {
    chat_service
        .send_message(message.conversation_id, message.sender_id, message.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Acknowledgement {
            message: "Message sent successfully",
        }),
    ))
}

pub mod schemas {
    use serde::Deserialize;

    /// Every field is optional here so that absent fields are reported by the
    /// service instead of being rejected by the extractor.
    #[derive(Deserialize, Debug, Default)]
    pub struct CreateMessage {
        pub conversation_id: Option<i64>,
        pub sender_id: Option<i64>,
        pub content: Option<String>,
    }
}
