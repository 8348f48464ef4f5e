//! Message service
//!
//! Conversations are not stored; the list is derived from the caller's
//! messages, newest first, keeping one entry per counterpart.

use super::check_id;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::MessageRepository;
use crate::supabase::SupabaseClient;
use fitsenior_shared::types::{Message, SendMessageRequest};
use std::collections::HashSet;
use tracing::debug;
use validator::Validate;

/// Message service for direct messages
pub struct MessageService;

impl MessageService {
    /// Latest message of each conversation the caller takes part in
    pub async fn conversations(db: &SupabaseClient, user: &AuthUser) -> Result<Vec<Message>, ApiError> {
        check_id(&user.id, "user")?;

        let messages = MessageRepository::list_involving(db, &user.id).await?;
        let total = messages.len();
        let latest = collapse_conversations(&user.id, messages);
        debug!(user_id = %user.id, messages = total, conversations = latest.len(), "Collapsed conversations");

        Ok(latest)
    }

    /// Full exchange with one other user, oldest first
    pub async fn thread(
        db: &SupabaseClient,
        user: &AuthUser,
        other_user_id: &str,
    ) -> Result<Vec<Message>, ApiError> {
        check_id(&user.id, "user")?;
        check_id(other_user_id, "user")?;

        Ok(MessageRepository::list_between(db, &user.id, other_user_id).await?)
    }

    pub async fn send(
        db: &SupabaseClient,
        user: &AuthUser,
        req: SendMessageRequest,
    ) -> Result<Message, ApiError> {
        req.validate()?;
        let recipient_id = req.recipient_id.as_deref().unwrap_or_default();
        let content = req.content.as_deref().unwrap_or_default();
        check_id(recipient_id, "recipient")?;

        MessageRepository::create(db, &user.id, recipient_id, content)
            .await
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    ApiError::NotFound("Recipient not found".to_string())
                } else {
                    e.into()
                }
            })
    }

    /// Mark a message addressed to the caller as read
    pub async fn mark_read(db: &SupabaseClient, user: &AuthUser, id: &str) -> Result<Message, ApiError> {
        check_id(id, "message")?;

        MessageRepository::mark_read(db, id, &user.id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Message not found".to_string()))
    }
}

/// Keep the first message seen for each counterpart of `user_id`
///
/// Input order is preserved, so newest-first input yields the latest message
/// of every conversation, most recent conversation first.
pub fn collapse_conversations(user_id: &str, messages: Vec<Message>) -> Vec<Message> {
    let mut seen = HashSet::new();
    messages
        .into_iter()
        .filter(|m| seen.insert(m.counterpart(user_id).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn message(id: &str, sender: &str, recipient: &str) -> Message {
        Message {
            id: id.to_string(),
            sender_id: sender.to_string(),
            recipient_id: recipient.to_string(),
            content: Some(format!("message {}", id)),
            read: false,
            created_at: None,
            sender: None,
            recipient: None,
        }
    }

    #[test]
    fn test_collapse_keeps_latest_per_counterpart() {
        let messages = vec![
            message("m5", "a", "u1"),
            message("m4", "u1", "b"),
            message("m3", "u1", "a"),
            message("m2", "b", "u1"),
            message("m1", "c", "u1"),
        ];

        let ids: Vec<String> = collapse_conversations("u1", messages)
            .into_iter()
            .map(|m| m.id)
            .collect();

        assert_eq!(ids, vec!["m5", "m4", "m1"]);
    }

    #[test]
    fn test_collapse_empty() {
        assert!(collapse_conversations("u1", Vec::new()).is_empty());
    }

    #[test]
    fn test_collapse_message_to_self() {
        let collapsed = collapse_conversations("u1", vec![message("m2", "u1", "u1"), message("m1", "u1", "u1")]);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed[0].id, "m2");
    }

    proptest! {
        #[test]
        fn collapse_yields_one_message_per_counterpart(
            pairs in prop::collection::vec((0u8..4, any::<bool>()), 0..40)
        ) {
            let messages: Vec<Message> = pairs
                .iter()
                .enumerate()
                .map(|(i, (other, outgoing))| {
                    let other = format!("p{}", other);
                    if *outgoing {
                        message(&i.to_string(), "me", &other)
                    } else {
                        message(&i.to_string(), &other, "me")
                    }
                })
                .collect();

            let expected: HashSet<String> = messages
                .iter()
                .map(|m| m.counterpart("me").to_string())
                .collect();

            let collapsed = collapse_conversations("me", messages);
            let counterparts: Vec<&str> = collapsed.iter().map(|m| m.counterpart("me")).collect();
            let unique: HashSet<&str> = counterparts.iter().copied().collect();

            prop_assert_eq!(counterparts.len(), unique.len());
            prop_assert_eq!(unique.len(), expected.len());

            // ids were assigned in input order, so they must stay increasing
            let ids: Vec<usize> = collapsed.iter().filter_map(|m| m.id.parse().ok()).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
