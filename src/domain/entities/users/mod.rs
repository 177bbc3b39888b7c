//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 계정, 프로필, 팔로우 관계를 포함하는 User 엔티티를 제공합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! // 가입 시점 사용자 생성
//! let user = User::new("username".to_string(), hashed_password);
//! ```

pub mod user;
