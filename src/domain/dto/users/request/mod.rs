//! # 사용자 관련 요청 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 이 모듈의 DTO들은 다음과 같은 다층 검증을 수행합니다:
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성
//! 2. **형식 검증**: 이메일, 길이, 패턴 등 기본 형식 규칙
//! 3. **비즈니스 검증**: 도메인 특화 규칙 (비밀번호 강도, 중복 확인 등)
//!
//! ## 에러 핸들링
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! 이는 상위 에러 핸들러에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod signup_request;
pub mod auth_request;
pub mod update_profile;

pub use signup_request::SignupRequest;
pub use auth_request::LoginRequest;
pub use update_profile::{UpdateProfileRequest, UpdateUsernameRequest};
