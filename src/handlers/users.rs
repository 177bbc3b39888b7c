//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 프로필 조회/수정, 계정 삭제, 팔로우 관계, 프로필 이미지 업로드를 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트 목록
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `GET` | `/users` | - | 사용자 목록 (페이지네이션) | 200 OK |
//! | `GET` | `/users/{id}` | - | 사용자 조회 | 200 OK |
//! | `PATCH` | `/users/me` | ✓ | 내 프로필 수정 | 200 OK |
//! | `PUT` | `/users/me/username` | ✓ | 사용자명 변경 | 200 OK |
//! | `DELETE` | `/users/me` | ✓ | 계정 삭제 (연쇄 삭제) | 204 No Content |
//! | `PUT` | `/users/me/avatar` | ✓ | 프로필 이미지 업로드 | 200 OK |
//! | `GET` | `/users/{id}/avatar` | - | 프로필 이미지 다운로드 | 200 OK |
//! | `POST` | `/users/{id}/follow` | ✓ | 팔로우 | 200 OK |
//! | `DELETE` | `/users/{id}/follow` | ✓ | 언팔로우 | 200 OK |
//! | `GET` | `/users/{id}/followers` | - | 팔로워 목록 | 200 OK |
//! | `GET` | `/users/{id}/following` | - | 팔로잉 목록 | 200 OK |
//!
//! ## 라우트 구성
//!
//! `me` 계열 핸들러는 전체 인증이 적용된 `/users/me` 스코프에,
//! 나머지는 선택 인증이 적용된 `/users` 스코프에 등록됩니다.
//! `/users/me` 스코프가 먼저 등록되어야 `me`가 `{user_id}`로
//! 매칭되지 않습니다. 자세한 구성은 [`crate::routes`]를 참고하세요.
use actix_multipart::Multipart;
use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use futures_util::StreamExt;
use validator::Validate;

use crate::config::MediaConfig;
use crate::core::errors::AppError;
use crate::domain::dto::posts::PageQuery;
use crate::domain::dto::users::request::{UpdateProfileRequest, UpdateUsernameRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::multipart::read_image_field;
use crate::services::users::user_service::UserService;

/// 사용자 목록 조회 핸들러
///
/// # Endpoint
/// `GET /users?limit=20&skip=0`
///
/// limit은 1-100 범위로 클램핑됩니다.
#[get("")]
pub async fn list_users(
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let users = service.list_users(query.limit(), query.skip()).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
///
/// # Endpoint
/// `GET /users/{user_id}`
///
/// # 응답
///
/// - `200 OK` - 사용자 정보 (비밀번호 해시 제외)
/// - `400 Bad Request` - 잘못된 ObjectId 형식
/// - `404 Not Found` - 존재하지 않는 사용자
#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 내 프로필 수정 핸들러
///
/// 전달된 필드만 갱신하는 부분 수정입니다. 모든 필드가 비어 있으면
/// 400을 반환합니다. 이메일 변경 시 중복 검사를 수행합니다.
///
/// # Endpoint
/// `PATCH /users/me`
#[patch("")]
pub async fn update_my_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let updated = service.update_profile(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 사용자명 변경 핸들러
///
/// # Endpoint
/// `PUT /users/me/username`
///
/// # 응답
///
/// - `200 OK` - 변경된 사용자 정보
/// - `409 Conflict` - 이미 사용 중인 사용자명
#[put("/username")]
pub async fn update_my_username(
    user: AuthenticatedUser,
    payload: web::Json<UpdateUsernameRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let updated = service.update_username(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 계정 삭제 핸들러
///
/// 계정과 함께 작성한 게시물, 게시물의 이미지와 댓글,
/// 프로필 이미지, 리프레시 세션을 모두 삭제합니다.
///
/// # Endpoint
/// `DELETE /users/me`
#[delete("")]
pub async fn delete_my_account(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_user(&user.user_id).await?;

    log::info!("계정 삭제 완료 - user_id: {}", user.user_id);

    Ok(HttpResponse::NoContent().finish())
}

/// 프로필 이미지 업로드 핸들러
///
/// multipart/form-data의 `file` 필드를 GridFS `avatars` 버킷에 저장합니다.
/// 기존 이미지가 있으면 교체 후 삭제합니다.
///
/// # Endpoint
/// `PUT /users/me/avatar`
///
/// # 제한
///
/// - Content-Type: jpeg, png, gif, webp
/// - 최대 크기: `MAX_IMAGE_SIZE_MB` (기본 5MB)
#[put("/avatar")]
pub async fn upload_my_avatar(
    user: AuthenticatedUser,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut image = None;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| {
            AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", e))
        })?;
        let is_file_field = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .map(|n| n == "file")
            .unwrap_or(false);

        if is_file_field {
            image = Some(read_image_field(&mut field).await?);
            break;
        }
    }

    let image = image.ok_or_else(|| {
        AppError::ValidationError("이미지 파일(file 필드)이 필요합니다".to_string())
    })?;

    let service = UserService::instance();
    let updated = service
        .upload_avatar(&user.user_id, &image.filename, &image.bytes)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// 프로필 이미지 다운로드 핸들러
///
/// # Endpoint
/// `GET /users/{user_id}/avatar`
///
/// # 응답
///
/// - `200 OK` - 이미지 바이트 (Content-Type은 매직 넘버로 판별)
/// - `404 Not Found` - 프로필 이미지 미설정
#[get("/{user_id}/avatar")]
pub async fn get_user_avatar(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let bytes = service.get_avatar(&user_id).await?;

    let content_type = MediaConfig::detect_content_type(&bytes);

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .body(bytes))
}

/// 팔로우 핸들러
///
/// 양쪽 사용자의 following/followers 목록에 서로를 추가합니다.
/// 이미 팔로우 중이면 변화 없이 성공으로 처리됩니다.
///
/// # Endpoint
/// `POST /users/{user_id}/follow`
///
/// # 응답
///
/// - `200 OK` - 갱신된 대상 사용자 정보
/// - `400 Bad Request` - 자기 자신 팔로우 시도
/// - `404 Not Found` - 존재하지 않는 대상
#[post("/{user_id}/follow")]
pub async fn follow_user(
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let target = service.follow(&user.user_id, &user_id).await?;

    Ok(HttpResponse::Ok().json(target))
}

/// 언팔로우 핸들러
///
/// 팔로우하지 않은 사용자에 대한 요청도 변화 없이 성공으로 처리됩니다.
///
/// # Endpoint
/// `DELETE /users/{user_id}/follow`
#[delete("/{user_id}/follow")]
pub async fn unfollow_user(
    user: AuthenticatedUser,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let target = service.unfollow(&user.user_id, &user_id).await?;

    Ok(HttpResponse::Ok().json(target))
}

/// 팔로워 목록 조회 핸들러
///
/// # Endpoint
/// `GET /users/{user_id}/followers`
#[get("/{user_id}/followers")]
pub async fn get_followers(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let followers = service.get_followers(&user_id).await?;

    Ok(HttpResponse::Ok().json(followers))
}

/// 팔로잉 목록 조회 핸들러
///
/// # Endpoint
/// `GET /users/{user_id}/following`
#[get("/{user_id}/following")]
pub async fn get_following(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let following = service.get_following(&user_id).await?;

    Ok(HttpResponse::Ok().json(following))
}
