//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 계정 정보, 프로필, 팔로우 관계, 좋아요 기록을 하나의 도큐먼트로 관리합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 성별
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 팔로우 관계는 양방향 배열(following/followers)로 중복 저장되며,
/// 두 배열은 리포지토리 계층에서 항상 함께 갱신됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 가입 후 프로필 수정으로 설정 가능)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 성
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// 자기소개
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// 나이
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// 성별
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// 프로필 이미지의 GridFS 파일 ID (미설정 시 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<ObjectId>,
    /// 내가 팔로우하는 사용자 ID 목록
    pub following: Vec<ObjectId>,
    /// 나를 팔로우하는 사용자 ID 목록
    pub followers: Vec<ObjectId>,
    /// 좋아요를 누른 게시물 ID 목록
    pub liked_posts: Vec<ObjectId>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 사용자 역할
    pub roles: Vec<String>,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성 (가입 시점)
    ///
    /// username과 password만으로 가입하며, 프로필 필드는 비어있는 상태로 시작됩니다.
    pub fn new(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: None,
            username,
            password_hash,
            name: None,
            surname: None,
            bio: None,
            age: None,
            gender: None,
            avatar_id: None,
            following: Vec::new(),
            followers: Vec::new(),
            liked_posts: Vec::new(),
            is_active: true,
            roles: vec!["user".to_string()],
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 프로필 이미지가 설정되어 있는지 확인
    pub fn has_avatar(&self) -> bool {
        self.avatar_id.is_some()
    }

    /// 해당 사용자를 팔로우 중인지 확인
    pub fn is_following(&self, user_id: &ObjectId) -> bool {
        self.following.contains(user_id)
    }

    /// 해당 게시물에 좋아요를 눌렀는지 확인
    pub fn has_liked(&self, post_id: &ObjectId) -> bool {
        self.liked_posts.contains(post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_with_empty_profile() {
        let user = User::new("alice".to_string(), "hashed".to_string());

        assert_eq!(user.username, "alice");
        assert!(user.email.is_none());
        assert!(user.avatar_id.is_none());
        assert!(user.following.is_empty());
        assert!(user.followers.is_empty());
        assert!(user.liked_posts.is_empty());
        assert!(user.is_active);
        assert_eq!(user.roles, vec!["user".to_string()]);
    }

    #[test]
    fn test_follow_and_like_predicates() {
        let mut user = User::new("bob".to_string(), "hashed".to_string());
        let other = ObjectId::new();
        let post = ObjectId::new();

        assert!(!user.is_following(&other));
        assert!(!user.has_liked(&post));

        user.following.push(other);
        user.liked_posts.push(post);

        assert!(user.is_following(&other));
        assert!(user.has_liked(&post));
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(serde_json::to_string(&Gender::Other).unwrap(), "\"other\"");
        let parsed: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(parsed, Gender::Female);
    }
}
