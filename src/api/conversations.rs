//! Conversations endpoints

use crate::api::{Acknowledgement, ConversationId};
use crate::api::conversations::schemas::{ConversationSummary, ListConversations, MarkAsRead};
use crate::core::error::ChatError;
use crate::core::traits::ChatService;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_conversations))
        .route("/:id/messages", get(conversation_messages))
        .route("/:id/read", post(mark_as_read))
}

async fn list_conversations(
    Inject(chat_service): Inject<dyn ChatService>,
    Query(query): Query<ListConversations>,
) -> Result<(StatusCode, Json<Vec<ConversationSummary>>), ChatError> {
    let conversations = chat_service.list_conversations(query.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            conversations
                .into_iter()
                .map(ConversationSummary::from)
                .collect(),
        ),
    ))
}

async fn conversation_messages(
    Inject(chat_service): Inject<dyn ChatService>,
    ConversationId(conversation_id): ConversationId,
) -> Result<(StatusCode, Json<Vec<schemas::Message>>), ChatError> {
    let messages = chat_service.list_messages(conversation_id).await?;

    Ok((
        StatusCode::OK,
        Json(messages.into_iter().map(schemas::Message::from).collect()),
    ))
}

async fn mark_as_read(
    Inject(chat_service): Inject<dyn ChatService>,
    ConversationId(conversation_id): ConversationId,
    Json(receipt): Json<MarkAsRead>,
) -> Result<(StatusCode, Json<Acknowledgement>), ChatError> {
    chat_service
        .mark_as_read(conversation_id, receipt.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Acknowledgement {
            message: "Messages marked as read",
        }),
    ))
}

pub mod schemas {
    use crate::infrastructure::entities;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Debug, Default)]
    pub struct ListConversations {
        pub user_id: Option<String>,
    }

    #[derive(Deserialize, Debug, Default)]
    pub struct MarkAsRead {
        pub user_id: Option<i64>,
    }

    #[derive(Serialize, Debug)]
    pub struct ConversationSummary {
        pub conversation_id: i64,
        pub unread_count: i64,
    }

    impl From<entities::ConversationSummary> for ConversationSummary {
        fn from(summary: entities::ConversationSummary) -> Self {
            ConversationSummary {
                conversation_id: summary.conversation_id,
                unread_count: summary.unread_count,
            }
        }
    }

    #[derive(Serialize, Debug)]
    pub struct Message {
        pub id: i64,
        pub sender_id: i64,
        pub content: String,
        pub created_at: DateTime<Utc>,
        pub read_at: Option<DateTime<Utc>>,
    }

    impl From<entities::Message> for Message {
        fn from(message: entities::Message) -> Self {
            Message {
                id: message.id,
                sender_id: message.sender_id,
                content: message.content,
                created_at: message.created_at,
                read_at: message.read_at,
            }
        }
    }
}
