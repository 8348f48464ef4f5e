//! Direct message repository

use crate::supabase::{Order, SupabaseClient, SupabaseError};
use fitsenior_shared::types::Message;
use serde::Serialize;
use serde_json::json;

pub const MESSAGES: &str = "messages";

/// Both participants, disambiguated by foreign key name
const PARTICIPANTS: &str = "*, \
    sender:profiles!messages_sender_id_fkey(id, full_name, avatar_url), \
    recipient:profiles!messages_recipient_id_fkey(id, full_name, avatar_url)";

#[derive(Serialize)]
struct NewMessage<'a> {
    sender_id: &'a str,
    recipient_id: &'a str,
    content: &'a str,
}

/// Message repository for table operations
///
/// Identifiers passed here end up in `or` filters and must already have
/// passed `validate_identifier`.
pub struct MessageRepository;

impl MessageRepository {
    /// Every message sent or received by `user_id`, newest first
    pub async fn list_involving(
        db: &SupabaseClient,
        user_id: &str,
    ) -> Result<Vec<Message>, SupabaseError> {
        db.table(MESSAGES)
            .select(PARTICIPANTS)
            .or(&format!("sender_id.eq.{0},recipient_id.eq.{0}", user_id))
            .order("created_at", Order::Desc)
            .execute()
            .await?
            .rows()
    }

    /// Messages exchanged between two users, oldest first
    pub async fn list_between(
        db: &SupabaseClient,
        user_id: &str,
        other_user_id: &str,
    ) -> Result<Vec<Message>, SupabaseError> {
        db.table(MESSAGES)
            .select(PARTICIPANTS)
            .or(&format!(
                "and(sender_id.eq.{0},recipient_id.eq.{1}),and(sender_id.eq.{1},recipient_id.eq.{0})",
                user_id, other_user_id
            ))
            .order("created_at", Order::Asc)
            .execute()
            .await?
            .rows()
    }

    pub async fn create(
        db: &SupabaseClient,
        sender_id: &str,
        recipient_id: &str,
        content: &str,
    ) -> Result<Message, SupabaseError> {
        db.table(MESSAGES)
            .insert(&NewMessage {
                sender_id,
                recipient_id,
                content,
            })
            .select("*")
            .execute()
            .await?
            .single()
    }

    /// Flag a message addressed to `recipient_id` as read
    pub async fn mark_read(
        db: &SupabaseClient,
        id: &str,
        recipient_id: &str,
    ) -> Result<Option<Message>, SupabaseError> {
        db.table(MESSAGES)
            .update(&json!({ "read": true }))
            .eq("id", id)
            .eq("recipient_id", recipient_id)
            .select("*")
            .execute()
            .await?
            .maybe_single()
    }
}
