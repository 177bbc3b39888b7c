//! 인증 컨텍스트 모델 모듈
//!
//! 미들웨어에서 추출된 사용자 정보와 인증 요구사항을 표현하는 모델들입니다.

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::AuthenticatedUser;
pub use authentication_request::{AuthMode, RequiredRole};
