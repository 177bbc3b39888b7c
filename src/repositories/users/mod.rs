//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 MongoDB 기반 사용자 데이터 관리와
//! Redis 캐싱을 제공합니다. 팔로우 관계와 좋아요 목록도 이 계층에서 갱신합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_username("janghoon").await?;
//! ```

pub mod user_repo;

pub use user_repo::*;
