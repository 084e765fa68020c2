//! DB Repository abstractions

use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::{ConversationSummary, Message, NewMessage};
use crate::infrastructure::traits::ChatRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use di::{Ref, injectable};

#[injectable(ChatRepository)]
pub struct DbChatRepository {
    connection: Ref<DatabaseConnection>,
}

#[async_trait]
impl ChatRepository for DbChatRepository {
    async fn create_message(&self, message: NewMessage) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO messages (conversation_id, sender_id, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(message.conversation_id)
        .bind(message.sender_id)
        .bind(message.content)
        .bind(message.created_at)
        .execute(&**self.connection)
        .await
        .map(|_| ())
    }

    async fn list_conversation_summaries(
        &self,
        user_id: i64,
    ) -> Result<Vec<ConversationSummary>, sqlx::Error> {
        // the join conditions live in ON so conversations without unread messages survive
        sqlx::query_as(
            r#"SELECT c.id AS conversation_id, COUNT(m.id) AS unread_count
            FROM conversations c
            LEFT JOIN messages m
                ON c.id = m.conversation_id
                AND m.sender_id != ?
                AND m.read_at IS NULL
            WHERE c.user1_id = ? OR c.user2_id = ?
            GROUP BY c.id
            ORDER BY c.id ASC"#,
        )
        .bind(user_id)
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&**self.connection)
        .await
    }

    async fn list_conversation_messages(
        &self,
        conversation_id: i64,
    ) -> Result<Vec<Message>, sqlx::Error> {
        // rows may carry RFC 3339 or CURRENT_TIMESTAMP stamps, so compare them as instants
        sqlx::query_as(
            "SELECT id, conversation_id, sender_id, content, created_at, read_at FROM messages WHERE conversation_id = ? ORDER BY julianday(created_at) ASC, id ASC",
        )
        .bind(conversation_id)
        .fetch_all(&**self.connection)
        .await
    }

    async fn mark_conversation_read(
        &self,
        conversation_id: i64,
        reader_id: i64,
        read_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        sqlx::query(
            "UPDATE messages SET read_at = ? WHERE conversation_id = ? AND sender_id != ? AND read_at IS NULL",
        )
        .bind(read_at)
        .bind(conversation_id)
        .bind(reader_id)
        .execute(&**self.connection)
        .await
        .map(|result| result.rows_affected())
    }
}
