//! 게시물 관리 서비스 모듈
//!
//! 게시물 생성/조회/삭제, 좋아요, 피드, 댓글 기능의
//! 비즈니스 로직을 담당하는 서비스들을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::posts::PostService;
//!
//! let post_service = PostService::instance();
//! let feed = post_service.get_feed(&user_id, 100, 0).await?;
//! ```

pub mod post_service;

pub use post_service::*;
