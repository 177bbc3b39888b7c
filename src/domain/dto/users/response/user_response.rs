use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::{Gender, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 사용자 정보를 담습니다.
/// 팔로우 관계는 ID 목록 대신 카운트로 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub bio: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,

    /// 프로필 이미지 설정 여부 (편의 필드)
    pub has_avatar: bool,

    /// 팔로잉 수
    pub following_count: usize,
    /// 팔로워 수
    pub followers_count: usize,

    pub is_active: bool,
    pub roles: Vec<String>,
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let has_avatar = user.has_avatar();
        let User {
            id,
            email,
            username,
            name,
            surname,
            bio,
            age,
            gender,
            following,
            followers,
            is_active,
            roles,
            last_login_at,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            name,
            surname,
            bio,
            age,
            gender,
            has_avatar,
            following_count: following.len(),
            followers_count: followers.len(),
            is_active,
            roles,
            last_login_at,
            created_at,
            updated_at,
        }
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,

    /// 리프레시 토큰 (선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(user: User, access_token: String, expires_in: i64) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token: None,
        }
    }

    /// 리프레시 토큰과 함께 로그인 응답 생성
    pub fn with_refresh_token(user: User, access_token: String, expires_in: i64, refresh_token: String) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            refresh_token: Some(refresh_token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::new("alice".to_string(), "hashed_secret".to_string());
        let response = UserResponse::from(user);

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("hashed_secret"));
        assert!(json.contains("alice"));
    }

    #[test]
    fn test_follow_counts_reflect_entity() {
        let mut user = User::new("bob".to_string(), "h".to_string());
        user.following.push(mongodb::bson::oid::ObjectId::new());
        user.followers.push(mongodb::bson::oid::ObjectId::new());
        user.followers.push(mongodb::bson::oid::ObjectId::new());

        let response = UserResponse::from(user);
        assert_eq!(response.following_count, 1);
        assert_eq!(response.followers_count, 2);
    }

    #[test]
    fn test_login_response_uses_bearer_type() {
        let user = User::new("carol".to_string(), "h".to_string());
        let response = LoginResponse::new(user, "token".to_string(), 3600);
        assert_eq!(response.token_type, "Bearer");
        assert!(response.refresh_token.is_none());
    }
}
