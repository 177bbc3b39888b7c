//! 댓글 응답 DTO
use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::comments::comment::Comment;

/// 댓글 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            post_id: comment.post_id.to_hex(),
            author_id: comment.author_id.to_hex(),
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}
