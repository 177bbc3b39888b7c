//! # Post Data Transfer Objects Module
//!
//! 게시물 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 게시물 생성은 multipart/form-data로 들어오므로 요청 DTO는
//! 핸들러가 필드를 수집한 뒤 수동으로 검증합니다.

pub mod request;
pub mod response;

pub use request::{CreatePostRequest, PageQuery};
pub use response::PostResponse;
