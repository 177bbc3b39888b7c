//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 로직과 도메인 규칙을 담당합니다.
//! Domain-Driven Design (DDD) 원칙에 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (User, Post, Comment)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 인증 컨텍스트 및 토큰 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, GridFS)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 영속 객체들입니다. 각 엔티티는 고유 ID로 식별되며,
//! 도메인 규칙(작성자 확인, 팔로우 여부 등)을 메서드로 캡슐화합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! `validator` 크레이트를 통한 입력 검증과 `serde` 기반 직렬화를 담당합니다.
//!
//! ### [`models`] - 인증 도메인 모델
//!
//! JWT 클레임, 토큰 쌍, 미들웨어가 주입하는 인증 사용자 정보 등
//! 영속되지 않는 값 객체들입니다.
//!
//! ## 설계 패턴 및 원칙
//!
//! - **의존성 규칙**: 외부 계층이 내부 계층에 의존 (역방향 의존성 금지)
//! - **Null Safety**: Option<T>를 통한 안전한 null 처리
//! - **에러 핸들링**: Result<T, E>를 통한 명시적 에러 처리
//! - **명시적 변환**: From/Into trait을 통한 Entity → DTO 변환

pub mod entities;
pub mod dto;
pub mod models;

// entities와 dto는 users/posts/comments 하위 모듈명이 겹치므로
// 글롭 대신 경로로 직접 접근합니다.
pub use models::{auth, token};
