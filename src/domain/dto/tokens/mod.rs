//! # Token Data Transfer Objects Module
//!
//! 토큰 갱신 요청과 공통 API 응답 래퍼를 정의하는 모듈입니다.

pub mod request;
pub mod response;

pub use request::RefreshRequest;
pub use response::ApiResponse;
