use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자 이름
    pub username: String,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(&role.to_string())
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|&role| self.has_role(role))
    }

    /// 관리자 권한을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "507f1f77bcf86cd799439011".to_string(),
            username: "alice".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_has_role() {
        let user = sample_user(&["user"]);
        assert!(user.has_role("user"));
        assert!(!user.has_role("admin"));
    }

    #[test]
    fn test_has_any_role() {
        let user = sample_user(&["user", "moderator"]);
        assert!(user.has_any_role(&["admin", "moderator"]));
        assert!(!user.has_any_role(&["admin", "superuser"]));
    }

    #[test]
    fn test_is_admin() {
        assert!(sample_user(&["admin"]).is_admin());
        assert!(!sample_user(&["user"]).is_admin());
    }
}
