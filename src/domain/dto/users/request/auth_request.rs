//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_fields() {
        let req = LoginRequest {
            username: "".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            username: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
