//! 댓글 데이터 액세스 계층을 담당하는 리포지토리 모듈

pub mod comment_repo;

pub use comment_repo::*;
