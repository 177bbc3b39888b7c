//! Posts Entity Module
//!
//! 게시물 도메인의 핵심 엔티티를 정의하는 모듈입니다.

pub mod post;
