//! Post Entity Implementation
//!
//! 게시물 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 게시물 엔티티
///
/// 사용자가 작성한 게시물을 표현합니다. 이미지는 GridFS의 `post_images`
/// 버킷에 저장되며 엔티티에는 파일 ID만 보관합니다.
/// `likes` 카운터는 사용자의 `liked_posts` 배열과 함께 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 작성자 사용자 ID
    pub author_id: ObjectId,
    /// 게시물 제목
    pub title: String,
    /// 게시물 본문
    pub content: String,
    /// 첨부 이미지의 GridFS 파일 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<ObjectId>,
    /// 좋아요 수
    pub likes: i64,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Post {
    /// 새 게시물 생성
    pub fn new(author_id: ObjectId, title: String, content: String, image_id: Option<ObjectId>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            author_id,
            title,
            content,
            image_id,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 사용자가 작성자인지 확인
    pub fn is_author(&self, user_id: &ObjectId) -> bool {
        &self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_starts_with_zero_likes() {
        let author = ObjectId::new();
        let post = Post::new(author, "title".to_string(), "body".to_string(), None);

        assert_eq!(post.likes, 0);
        assert!(post.id.is_none());
        assert!(post.image_id.is_none());
        assert!(post.is_author(&author));
    }

    #[test]
    fn test_is_author_rejects_other_users() {
        let post = Post::new(ObjectId::new(), "t".to_string(), "c".to_string(), None);
        assert!(!post.is_author(&ObjectId::new()));
    }
}
