//! Implementations for the service the app needs.
//!

use crate::core::error::ChatError;
use crate::core::traits::ChatService;
use crate::core::validation;
use crate::infrastructure::entities::{ConversationSummary, Message, NewMessage};
use crate::infrastructure::traits::ChatRepository;
use async_trait::async_trait;
use chrono::Utc;
use di::{Ref, injectable};
use log::debug;

#[injectable(ChatService)]
pub struct MyChatService {
    repo: Ref<dyn ChatRepository>,
}

#[async_trait]
impl ChatService for MyChatService {
    async fn send_message(
        &self,
        conversation_id: Option<i64>,
        sender_id: Option<i64>,
        content: Option<String>,
    ) -> Result<(), ChatError> {
        let fields = validation::message_fields(conversation_id, sender_id, content)?;

        self.repo
            .create_message(NewMessage {
                conversation_id: fields.conversation_id,
                sender_id: fields.sender_id,
                content: fields.content,
                created_at: Utc::now(),
            })
            .await?;

        debug!(
            "user {} posted to conversation {}",
            fields.sender_id, fields.conversation_id
        );
        Ok(())
    }

    async fn list_conversations(
        &self,
        user_id: Option<String>,
    ) -> Result<Vec<ConversationSummary>, ChatError> {
        let user_id = validation::query_id("user_id", user_id.as_deref())?;

        Ok(self.repo.list_conversation_summaries(user_id).await?)
    }

    async fn list_messages(&self, conversation_id: i64) -> Result<Vec<Message>, ChatError> {
        Ok(self.repo.list_conversation_messages(conversation_id).await?)
    }

    async fn mark_as_read(
        &self,
        conversation_id: i64,
        user_id: Option<i64>,
    ) -> Result<(), ChatError> {
        let user_id = validation::required_id("user_id", user_id)?;

        let updated = self
            .repo
            .mark_conversation_read(conversation_id, user_id, Utc::now())
            .await?;

        debug!("user {user_id} read {updated} message(s) in conversation {conversation_id}");
        Ok(())
    }
}
