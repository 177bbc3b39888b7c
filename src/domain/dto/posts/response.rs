//! 게시물 응답 DTO
use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::posts::post::Post;

/// 게시물 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,

    /// 첨부 이미지 존재 여부 (이미지는 별도 엔드포인트로 조회)
    pub has_image: bool,

    pub likes: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            author_id: post.author_id.to_hex(),
            title: post.title,
            content: post.content,
            has_image: post.image_id.is_some(),
            likes: post.likes,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_image_id_not_exposed_directly() {
        let mut post = Post::new(ObjectId::new(), "t".to_string(), "c".to_string(), Some(ObjectId::new()));
        post.id = Some(ObjectId::new());

        let image_hex = post.image_id.unwrap().to_hex();
        let response = PostResponse::from(post);

        assert!(response.has_image);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains(&image_hex));
    }
}
