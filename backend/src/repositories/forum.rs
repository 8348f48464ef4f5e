//! Forum repository (posts and replies)

use crate::supabase::{Order, SupabaseClient, SupabaseError};
use fitsenior_shared::types::{
    CreatePostRequest, CreateReplyRequest, ForumPost, ForumPostSummary, ForumReply,
};
use serde::{Deserialize, Serialize};

pub const FORUM_POSTS: &str = "forum_posts";
pub const FORUM_REPLIES: &str = "forum_replies";

const AUTHOR: &str = "profiles(full_name, avatar_url)";

/// `forum_replies(count)` embeds as a one-element list
#[derive(Debug, Deserialize)]
struct ReplyCount {
    count: i64,
}

#[derive(Debug, Deserialize)]
struct PostListRow {
    #[serde(flatten)]
    post: ForumPost,
    #[serde(default)]
    forum_replies: Vec<ReplyCount>,
}

impl From<PostListRow> for ForumPostSummary {
    fn from(row: PostListRow) -> Self {
        Self {
            post: row.post,
            reply_count: row.forum_replies.iter().map(|r| r.count).sum(),
        }
    }
}

#[derive(Serialize)]
struct NewPost<'a> {
    #[serde(flatten)]
    fields: &'a CreatePostRequest,
    user_id: &'a str,
}

#[derive(Serialize)]
struct NewReply<'a> {
    #[serde(flatten)]
    fields: &'a CreateReplyRequest,
    post_id: &'a str,
    user_id: &'a str,
}

/// Forum repository for table operations
pub struct ForumRepository;

impl ForumRepository {
    /// All posts with author and reply count, newest first
    pub async fn list_posts(db: &SupabaseClient) -> Result<Vec<ForumPostSummary>, SupabaseError> {
        let rows: Vec<PostListRow> = db
            .table(FORUM_POSTS)
            .select(&format!("*, {}, forum_replies(count)", AUTHOR))
            .order("created_at", Order::Desc)
            .execute()
            .await?
            .rows()?;

        Ok(rows.into_iter().map(ForumPostSummary::from).collect())
    }

    pub async fn find_post(db: &SupabaseClient, id: &str) -> Result<Option<ForumPost>, SupabaseError> {
        db.table(FORUM_POSTS)
            .select(&format!("*, {}", AUTHOR))
            .eq("id", id)
            .limit(1)
            .execute()
            .await?
            .maybe_single()
    }

    /// Replies of a post, oldest first
    pub async fn list_replies(
        db: &SupabaseClient,
        post_id: &str,
    ) -> Result<Vec<ForumReply>, SupabaseError> {
        db.table(FORUM_REPLIES)
            .select(&format!("*, {}", AUTHOR))
            .eq("post_id", post_id)
            .order("created_at", Order::Asc)
            .execute()
            .await?
            .rows()
    }

    pub async fn create_post(
        db: &SupabaseClient,
        user_id: &str,
        fields: &CreatePostRequest,
    ) -> Result<ForumPost, SupabaseError> {
        db.table(FORUM_POSTS)
            .insert(&NewPost { fields, user_id })
            .select("*")
            .execute()
            .await?
            .single()
    }

    pub async fn create_reply(
        db: &SupabaseClient,
        post_id: &str,
        user_id: &str,
        fields: &CreateReplyRequest,
    ) -> Result<ForumReply, SupabaseError> {
        db.table(FORUM_REPLIES)
            .insert(&NewReply {
                fields,
                post_id,
                user_id,
            })
            .select("*")
            .execute()
            .await?
            .single()
    }

    /// Delete a post of `user_id`; false when nothing matched
    pub async fn delete_post(db: &SupabaseClient, id: &str, user_id: &str) -> Result<bool, SupabaseError> {
        let deleted = db
            .table(FORUM_POSTS)
            .delete()
            .eq("id", id)
            .eq("user_id", user_id)
            .select("id")
            .execute()
            .await?
            .count()?;

        Ok(deleted > 0)
    }
}
