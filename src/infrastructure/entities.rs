//! Database entities

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Message {
    pub id: i64,
    pub conversation_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// A message that has not been stored yet.
#[derive(Debug)]
pub struct NewMessage {
    pub conversation_id: i64,
    pub sender_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A conversation the user takes part in, with the number of messages the other
/// participant sent that the user has not read.
#[derive(Debug, FromRow)]
pub struct ConversationSummary {
    pub conversation_id: i64,
    pub unread_count: i64,
}
