//! DI "Interfaces"

use crate::core::error::ChatError;
use crate::infrastructure::entities;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Appends a message to a conversation.
    ///
    /// Returns `Err` if any of the fields is missing or invalid. Neither the
    /// conversation nor the sender is checked for existence.
    async fn send_message(
        &self,
        conversation_id: Option<i64>,
        sender_id: Option<i64>,
        content: Option<String>,
    ) -> Result<(), ChatError>;

    /// Lists the conversations the user takes part in, with unread counts.
    ///
    /// `user_id` is the raw query string value.
    async fn list_conversations(
        &self,
        user_id: Option<String>,
    ) -> Result<Vec<entities::ConversationSummary>, ChatError>;

    /// Lists all messages of a conversation, oldest first.
    ///
    /// An unknown conversation yields an empty list.
    async fn list_messages(&self, conversation_id: i64)
    -> Result<Vec<entities::Message>, ChatError>;

    /// Marks every unread message the other participant sent as read.
    async fn mark_as_read(&self, conversation_id: i64, user_id: Option<i64>)
    -> Result<(), ChatError>;
}
