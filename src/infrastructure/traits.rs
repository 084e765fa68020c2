//! Infrastructure traits, used for DI on higher levels

use crate::infrastructure::entities;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn create_message(&self, message: entities::NewMessage) -> Result<(), sqlx::Error>;

    async fn list_conversation_summaries(
        &self,
        user_id: i64,
    ) -> Result<Vec<entities::ConversationSummary>, sqlx::Error>;

    async fn list_conversation_messages(
        &self,
        conversation_id: i64,
    ) -> Result<Vec<entities::Message>, sqlx::Error>;

    /// Returns the number of messages that were flipped to read.
    async fn mark_conversation_read(
        &self,
        conversation_id: i64,
        reader_id: i64,
        read_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error>;
}
