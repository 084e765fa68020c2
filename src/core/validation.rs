//! Input checks for the chat service.
//!
//! Presence and emptiness are checked separately: an absent field is reported as
//! missing, while a present zero id or empty `content` is reported as invalid. Both are
//! client errors.

use crate::core::error::ChatError;

/// Fields of a message that passed validation.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageFields {
    pub conversation_id: i64,
    pub sender_id: i64,
    pub content: String,
}

pub fn message_fields(
    conversation_id: Option<i64>,
    sender_id: Option<i64>,
    content: Option<String>,
) -> Result<MessageFields, ChatError> {
    let (Some(conversation_id), Some(sender_id), Some(content)) =
        (conversation_id, sender_id, content)
    else {
        return Err(ChatError::MissingFields);
    };

    let conversation_id = non_zero_id("conversation_id", conversation_id)?;
    let sender_id = non_zero_id("sender_id", sender_id)?;

    if content.is_empty() {
        return Err(ChatError::EmptyContent);
    }

    Ok(MessageFields {
        conversation_id,
        sender_id,
        content,
    })
}

/// Checks a single required id taken from a JSON body, such as the `user_id` of a
/// read receipt.
pub fn required_id(field: &'static str, value: Option<i64>) -> Result<i64, ChatError> {
    let value = value.ok_or(ChatError::MissingField(field))?;
    non_zero_id(field, value)
}

/// Parses a required id taken from the query string.
///
/// Only absence (or an empty value) is an error of its own; any integer is accepted,
/// zero included, and simply matches nothing.
pub fn query_id(field: &'static str, value: Option<&str>) -> Result<i64, ChatError> {
    let value = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ChatError::MissingField(field))?;

    value.parse().map_err(|_| ChatError::NotAnInteger(field))
}

fn non_zero_id(field: &'static str, value: i64) -> Result<i64, ChatError> {
    if value != 0 {
        Ok(value)
    } else {
        Err(ChatError::InvalidId(field))
    }
}
