//! Comment Entity Implementation
//!
//! 게시물 댓글 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 댓글 엔티티
///
/// 게시물에 달린 댓글을 표현합니다. 게시물 삭제 시
/// 해당 게시물의 댓글도 함께 삭제됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 대상 게시물 ID
    pub post_id: ObjectId,
    /// 작성자 사용자 ID
    pub author_id: ObjectId,
    /// 댓글 본문
    pub content: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Comment {
    /// 새 댓글 생성
    pub fn new(post_id: ObjectId, author_id: ObjectId, content: String) -> Self {
        Self {
            id: None,
            post_id,
            author_id,
            content,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment_links_post_and_author() {
        let post_id = ObjectId::new();
        let author_id = ObjectId::new();
        let comment = Comment::new(post_id, author_id, "nice post".to_string());

        assert_eq!(comment.post_id, post_id);
        assert_eq!(comment.author_id, author_id);
        assert!(comment.id.is_none());
    }
}
