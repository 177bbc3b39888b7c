//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: BSON ↔ Rust 구조체 변환 지원
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── users/      ← User 엔티티 (프로필, 팔로우 관계, 좋아요 기록)
//! ├── posts/      ← Post 엔티티 (본문, 이미지 참조, 좋아요 카운터)
//! └── comments/   ← Comment 엔티티
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! - **ID 참조**: 엔티티 간 직접 참조보다는 `ObjectId` 참조 사용
//! - **크기 제한**: MongoDB 문서 크기 제한(16MB) 고려, 이미지는 GridFS로 분리
//! - **인덱스 설계**: 쿼리 패턴에 맞는 유니크 인덱스는 리포지토리 초기화 시 생성

pub mod users;
pub mod posts;
pub mod comments;
