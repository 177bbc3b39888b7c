//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 공통 패턴
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_post(
//!     user: AuthenticatedUser,              // 미들웨어가 주입한 인증 정보
//!     payload: web::Json<CreatePostRequest>, // 자동 JSON 파싱
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()                     // validator 검증
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     let service = PostService::instance(); // 싱글톤 서비스
//!     let response = service.create_post(...).await?;
//!     Ok(HttpResponse::Created().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 인증 엔드포인트
//!   - 회원가입 (`POST /auth/signup`)
//!   - 로그인 (`POST /auth/login`)
//!   - 토큰 갱신 (`POST /auth/refresh`)
//!   - 내 정보 조회 (`GET /auth/me`)
//!   - 로그아웃 (`POST /auth/logout`)
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 목록/단건 조회, 프로필 수정, 계정 삭제
//!   - 팔로우/언팔로우, 팔로워/팔로잉 목록
//!   - 프로필 이미지 업로드/다운로드
//!
//! - **`posts`**: 게시물 엔드포인트
//!   - 게시물 CRUD, 이미지 첨부
//!   - 좋아요/좋아요 취소, 댓글
//!   - 팔로잉 피드, 프로필 피드
//!
//! - **`multipart`**: 이미지 업로드 공통 처리 (내부용)
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 에러를 적절한 HTTP 상태 코드와
//! JSON 본문으로 변환합니다.

pub mod auth;
pub mod users;
pub mod posts;

pub(crate) mod multipart;
