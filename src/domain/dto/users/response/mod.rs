//! # 사용자 관련 응답 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! 비즈니스 로직 처리 결과를 클라이언트에게 안전하고 일관된 형태로
//! 전달하는 역할을 담당합니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: 비밀번호 해시 등 민감한 정보는 응답에서 제외
//! - **일관성**: 모든 응답이 동일한 구조와 네이밍 컨벤션 따름
//! - **타입 안전성**: 컴파일 타임에 응답 구조 검증

pub mod user_response;

pub use user_response::{LoginResponse, SignupResponse, UserResponse};
