//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 인증, 사용자, 게시물, 피드 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 회원가입/로그인/토큰 갱신 API 엔드포인트
//! - 사용자 프로필, 팔로우 관계 API 엔드포인트
//! - 게시물, 좋아요, 댓글, 피드 API 엔드포인트
//! - 인증 미들웨어 적용 (읽기는 Public, 쓰기는 Protected)
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용할 수 있습니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .service(handlers::auth::signup)  // 회원가입은 인증 불필요
//!         .service(handlers::auth::login)   // 로그인 자체는 인증 불필요
//! );
//! ```
//!
//! ## 인증 필요 (Protected 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/users/me")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::update_my_profile)
//! );
//! ```
//!
//! ## 혼합 스코프 (Public + Protected)
//!
//! 조회는 Public, 쓰기는 인증이 필요한 스코프에는 선택 인증 미들웨어를
//! 적용합니다. 토큰이 있으면 검증 후 `AuthenticatedUser`를 주입하고,
//! 없으면 그대로 통과시킵니다. 인증이 필요한 핸들러는
//! `AuthenticatedUser` 추출자가 401을 반환하여 보호됩니다.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/posts")
//!         .wrap(AuthMiddleware::optional())
//!         .service(handlers::posts::list_posts)   // Public
//!         .service(handlers::posts::create_post)  // AuthenticatedUser 필요
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_post_routes(cfg);
    configure_feed_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 회원가입, 로그인, 토큰 갱신 엔드포인트를 등록합니다.
/// 로그아웃만 인증이 필요하며 나머지는 Public 접근이 가능합니다.
///
/// # Available Routes
///
/// ## Public
/// - `POST /api/v1/auth/signup` - 회원가입
/// - `POST /api/v1/auth/login` - 사용자명/비밀번호 로그인
/// - `POST /api/v1/auth/refresh` - 리프레시 토큰으로 재발급
/// - `GET /api/v1/auth/me` - 현재 사용자 정보 (토큰은 핸들러에서 검증)
///
/// ## Protected
/// - `POST /api/v1/auth/logout` - 리프레시 세션 삭제
///
/// # Examples
///
/// ```bash
/// # 회원가입
/// curl -X POST http://localhost:8080/api/v1/auth/signup \
///   -H "Content-Type: application/json" \
///   -d '{"username":"john_doe","password":"SecurePass123","password_confirm":"SecurePass123"}'
///
/// # 로그인
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"username":"john_doe","password":"SecurePass123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(AuthMiddleware::optional())
            .service(handlers::auth::signup)
            .service(handlers::auth::login)
            .service(handlers::auth::refresh_tokens)
            .service(handlers::auth::get_current_user)
            // logout은 AuthenticatedUser 추출자로 보호됨
            .service(handlers::auth::logout)
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 조회 계열은 Public, 본인 계정 수정과 팔로우 계열은 Protected입니다.
///
/// # Route Groups
///
/// ## Protected 라우트 (인증 필요)
/// - `PATCH /api/v1/users/me` - 내 프로필 수정
/// - `PUT /api/v1/users/me/username` - 사용자명 변경
/// - `PUT /api/v1/users/me/avatar` - 프로필 이미지 업로드
/// - `DELETE /api/v1/users/me` - 계정 삭제
/// - `POST /api/v1/users/{id}/follow` - 팔로우
/// - `DELETE /api/v1/users/{id}/follow` - 언팔로우
///
/// ## Public 라우트 (인증 불필요)
/// - `GET /api/v1/users` - 사용자 목록
/// - `GET /api/v1/users/{id}` - 사용자 조회
/// - `GET /api/v1/users/{id}/avatar` - 프로필 이미지
/// - `GET /api/v1/users/{id}/followers` - 팔로워 목록
/// - `GET /api/v1/users/{id}/following` - 팔로잉 목록
///
/// # Route Ordering
///
/// `/api/v1/users/me` 스코프는 `/api/v1/users` 스코프보다 먼저
/// 등록해야 합니다. ActixWeb은 등록 순서대로 매칭하므로 순서가
/// 바뀌면 `me`가 `{user_id}` 패턴으로 흡수됩니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Protected: 본인 계정 관리 (전체 인증 필수)
    cfg.service(
        web::scope("/api/v1/users/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::update_my_profile)
            .service(handlers::users::update_my_username)
            .service(handlers::users::upload_my_avatar)
            .service(handlers::users::delete_my_account)
    );

    // 조회는 Public, 팔로우는 AuthenticatedUser 추출자로 보호
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::optional())
            .service(handlers::users::list_users)
            .service(handlers::users::get_user_avatar)
            .service(handlers::users::get_followers)
            .service(handlers::users::get_following)
            .service(handlers::users::follow_user)
            .service(handlers::users::unfollow_user)
            .service(handlers::users::get_user)
    );
}

/// 게시물 관련 라우트를 설정합니다
///
/// 조회 계열은 Public, 작성/삭제/좋아요/댓글 작성은 Protected입니다.
///
/// # Available Routes
///
/// ## Public
/// - `GET /api/v1/posts` - 게시물 목록
/// - `GET /api/v1/posts/{id}` - 게시물 조회
/// - `GET /api/v1/posts/{id}/image` - 첨부 이미지
/// - `GET /api/v1/posts/{id}/comments` - 댓글 목록
///
/// ## Protected
/// - `POST /api/v1/posts` - 게시물 작성 (multipart)
/// - `DELETE /api/v1/posts/{id}` - 게시물 삭제 (작성자만)
/// - `POST /api/v1/posts/{id}/like` - 좋아요
/// - `DELETE /api/v1/posts/{id}/like` - 좋아요 취소
/// - `POST /api/v1/posts/{id}/comments` - 댓글 작성
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/posts")
            .wrap(AuthMiddleware::optional())
            // Public 조회
            .service(handlers::posts::list_posts)
            .service(handlers::posts::get_post_image)
            .service(handlers::posts::list_comments)
            .service(handlers::posts::get_post)
            // 쓰기는 AuthenticatedUser 추출자로 보호
            .service(handlers::posts::create_post)
            .service(handlers::posts::delete_post)
            .service(handlers::posts::like_post)
            .service(handlers::posts::unlike_post)
            .service(handlers::posts::create_comment)
    );
}

/// 피드 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/feed` - 팔로잉 피드 (인증 필요)
/// - `GET /api/v1/feed/{user_id}` - 프로필 피드 (Public)
fn configure_feed_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feed")
            .wrap(AuthMiddleware::optional())
            // 팔로잉 피드는 AuthenticatedUser 추출자로 보호
            .service(handlers::posts::get_feed)
            .service(handlers::posts::get_profile_feed)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "social_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "media_storage": "GridFS",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "social_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "media_storage": "GridFS",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
