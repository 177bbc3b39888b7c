//! 소셜 미디어 서비스 백엔드
//!
//! Rust 기반의 소셜 미디어 백엔드 서비스입니다.
//! 사용자 계정과 팔로우 관계, 이미지 첨부 게시물, 좋아요와 댓글,
//! 팔로잉 기반 피드, 그리고 JWT 토큰 인증을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 프로필 관리, 계정 삭제 (연쇄 정리)
//! - **소셜 그래프**: 팔로우/언팔로우, 팔로워/팔로잉 목록
//! - **게시물**: 이미지 첨부 게시물, 좋아요, 댓글
//! - **피드**: 팔로잉 피드, 프로필 피드 (최신순)
//! - **JWT 인증**: 액세스/리프레시 토큰 기반 상태 없는 인증
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB + GridFS**: 도큐먼트 저장과 이미지 스트리밍
//! - **Redis**: 캐싱 및 리프레시 세션 관리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌───────────────────────────┐
//! │ MongoDB (GridFS) + Redis  │ ← 저장소
//! └───────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_service_backend::services::users::UserService;
//! use social_service_backend::services::posts::PostService;
//! use social_service_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let post_service = PostService::instance();
//! let token_service = TokenService::instance();
//!
//! // 회원가입 및 토큰 발급
//! let signup = user_service.signup(request).await?;
//! let user = user_service.verify_password("john_doe", "SecurePass123").await?;
//! let tokens = token_service.generate_token_pair(&user)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
