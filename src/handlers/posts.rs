//! # Post & Feed HTTP Handlers
//!
//! 게시물, 좋아요, 댓글, 피드와 관련된 HTTP 엔드포인트를 처리하는
//! 핸들러 함수들입니다. 게시물 작성은 이미지 첨부를 위해
//! multipart/form-data를 사용합니다.
//!
//! ## 엔드포인트 목록
//!
//! | 메서드 | 경로 | 인증 | 설명 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/posts` | ✓ | 게시물 작성 (이미지 선택) | 201 Created |
//! | `GET` | `/posts` | - | 게시물 목록 (최신순) | 200 OK |
//! | `GET` | `/posts/{id}` | - | 게시물 조회 | 200 OK |
//! | `GET` | `/posts/{id}/image` | - | 첨부 이미지 다운로드 | 200 OK |
//! | `DELETE` | `/posts/{id}` | ✓ | 게시물 삭제 (작성자만) | 204 No Content |
//! | `POST` | `/posts/{id}/like` | ✓ | 좋아요 | 200 OK |
//! | `DELETE` | `/posts/{id}/like` | ✓ | 좋아요 취소 | 200 OK |
//! | `POST` | `/posts/{id}/comments` | ✓ | 댓글 작성 | 201 Created |
//! | `GET` | `/posts/{id}/comments` | - | 댓글 목록 (작성순) | 200 OK |
//! | `GET` | `/feed` | ✓ | 팔로잉 피드 | 200 OK |
//! | `GET` | `/feed/{user_id}` | - | 프로필 피드 | 200 OK |
use actix_multipart::Multipart;
use actix_web::{delete, get, post, web, HttpResponse};
use futures_util::StreamExt;
use validator::Validate;

use crate::config::MediaConfig;
use crate::core::errors::AppError;
use crate::domain::dto::comments::CreateCommentRequest;
use crate::domain::dto::posts::{CreatePostRequest, PageQuery};
use crate::domain::models::auth::AuthenticatedUser;
use crate::handlers::multipart::{read_image_field, read_text_field, UploadedImage};
use crate::services::posts::post_service::PostService;

/// 게시물 작성 핸들러
///
/// multipart/form-data로 제목(`title`), 본문(`content`),
/// 선택적 이미지(`file`)를 받습니다.
///
/// # Endpoint
/// `POST /posts`
///
/// # 응답
///
/// - `201 Created` - 생성된 게시물 정보
/// - `400 Bad Request` - 제목/본문 검증 실패, 이미지 형식/크기 위반
#[post("")]
pub async fn create_post(
    user: AuthenticatedUser,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut request = CreatePostRequest::default();
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| {
            AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", e))
        })?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "title" => request.title = read_text_field(&mut field).await?,
            "content" => request.content = read_text_field(&mut field).await?,
            "file" => image = Some(read_image_field(&mut field).await?),
            // 알 수 없는 필드는 무시
            _ => {}
        }
    }

    // 유효성 검사
    request.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PostService::instance();
    let response = service
        .create_post(
            &user.user_id,
            request,
            image.map(|i| (i.filename, i.bytes)),
        )
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 게시물 목록 조회 핸들러
///
/// # Endpoint
/// `GET /posts?limit=20&skip=0`
#[get("")]
pub async fn list_posts(
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let posts = service.list_posts(query.limit(), query.skip()).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// 게시물 단건 조회 핸들러
///
/// # Endpoint
/// `GET /posts/{post_id}`
#[get("/{post_id}")]
pub async fn get_post(
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let post = service.get_post(&post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 게시물 이미지 다운로드 핸들러
///
/// # Endpoint
/// `GET /posts/{post_id}/image`
///
/// # 응답
///
/// - `200 OK` - 이미지 바이트 (Content-Type은 매직 넘버로 판별)
/// - `404 Not Found` - 게시물 없음 또는 이미지 미첨부
#[get("/{post_id}/image")]
pub async fn get_post_image(
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let bytes = service.get_post_image(&post_id).await?;

    let content_type = MediaConfig::detect_content_type(&bytes);

    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .body(bytes))
}

/// 게시물 삭제 핸들러
///
/// 작성자 본인만 삭제할 수 있으며, 첨부 이미지와 댓글도 함께 삭제됩니다.
///
/// # Endpoint
/// `DELETE /posts/{post_id}`
///
/// # 응답
///
/// - `204 No Content` - 삭제 완료
/// - `403 Forbidden` - 작성자가 아님
/// - `404 Not Found` - 존재하지 않는 게시물
#[delete("/{post_id}")]
pub async fn delete_post(
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    service.delete_post(&post_id, &user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 좋아요 핸들러
///
/// # Endpoint
/// `POST /posts/{post_id}/like`
///
/// # 응답
///
/// - `200 OK` - 갱신된 게시물 정보 (likes 증가)
/// - `409 Conflict` - 이미 좋아요한 게시물
#[post("/{post_id}/like")]
pub async fn like_post(
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let post = service.like_post(&user.user_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 좋아요 취소 핸들러
///
/// # Endpoint
/// `DELETE /posts/{post_id}/like`
///
/// # 응답
///
/// - `200 OK` - 갱신된 게시물 정보 (likes 감소)
/// - `409 Conflict` - 좋아요하지 않은 게시물
#[delete("/{post_id}/like")]
pub async fn unlike_post(
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let post = service.unlike_post(&user.user_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// 댓글 작성 핸들러
///
/// # Endpoint
/// `POST /posts/{post_id}/comments`
#[post("/{post_id}/comments")]
pub async fn create_comment(
    user: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PostService::instance();
    let comment = service
        .create_comment(&user.user_id, &post_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// 댓글 목록 조회 핸들러
///
/// # Endpoint
/// `GET /posts/{post_id}/comments`
#[get("/{post_id}/comments")]
pub async fn list_comments(
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let comments = service.list_comments(&post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// 팔로잉 피드 조회 핸들러
///
/// 현재 사용자가 팔로우하는 사용자들의 게시물을 최신순으로 반환합니다.
/// 팔로우하는 사용자가 없으면 빈 목록을 반환합니다.
///
/// # Endpoint
/// `GET /feed?limit=20&skip=0`
#[get("")]
pub async fn get_feed(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let posts = service
        .get_feed(&user.user_id, query.limit(), query.skip())
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// 프로필 피드 조회 핸들러
///
/// 특정 사용자가 작성한 게시물을 최신순으로 반환합니다.
///
/// # Endpoint
/// `GET /feed/{user_id}?limit=20&skip=0`
#[get("/{user_id}")]
pub async fn get_profile_feed(
    user_id: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let posts = service
        .get_profile_feed(&user_id, query.limit(), query.skip())
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}
