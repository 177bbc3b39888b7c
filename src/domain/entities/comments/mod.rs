//! Comments Entity Module
//!
//! 게시물 댓글 엔티티를 정의하는 모듈입니다.

pub mod comment;
