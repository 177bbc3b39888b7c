//! 프로필 수정 요청 DTO
//!
//! 사용자 프로필과 사용자명 변경을 위한 요청 데이터 구조를 정의합니다.
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::users::user::Gender;
use super::signup_request::validate_username;

/// 프로필 수정 요청 DTO
///
/// 모든 필드가 선택사항이며, 전달된 필드만 갱신됩니다.
/// 전체 수정(PUT)과 부분 수정(PATCH) 모두 이 구조체를 사용합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// 이름 (1-50자)
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: Option<String>,

    /// 성 (1-50자)
    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub surname: Option<String>,

    /// 자기소개 (최대 500자)
    #[validate(length(max = 500, message = "자기소개는 최대 500자까지 가능합니다"))]
    pub bio: Option<String>,

    /// 나이 (1-150 범위)
    #[validate(range(min = 1, max = 150, message = "나이는 1-150 사이여야 합니다"))]
    pub age: Option<u32>,

    /// 성별
    pub gender: Option<Gender>,

    /// 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,
}

impl UpdateProfileRequest {
    /// 갱신할 필드가 하나라도 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.bio.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.email.is_none()
    }
}

/// 사용자명 변경 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUsernameRequest {
    /// 새 사용자명 (3-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_detected() {
        let req = UpdateProfileRequest {
            name: None,
            surname: None,
            bio: None,
            age: None,
            gender: None,
            email: None,
        };
        assert!(req.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_rejects_invalid_email() {
        let req = UpdateProfileRequest {
            name: None,
            surname: None,
            bio: None,
            age: None,
            gender: None,
            email: Some("not-an-email".to_string()),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_age() {
        let req = UpdateProfileRequest {
            name: None,
            surname: None,
            bio: None,
            age: Some(200),
            gender: None,
            email: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_username_change_validation() {
        let req = UpdateUsernameRequest {
            username: "new_name".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = UpdateUsernameRequest {
            username: "bad name!".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
