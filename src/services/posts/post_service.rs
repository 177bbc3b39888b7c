//! 게시물 관리 서비스 구현
//!
//! 게시물 생성/조회/삭제, 좋아요, 피드, 댓글까지
//! 게시물 도메인의 비즈니스 규칙을 담당합니다.
//!
//! ## 주요 규칙
//!
//! - **삭제 권한**: 게시물 작성자만 삭제 가능
//! - **좋아요 멱등성**: 같은 게시물에 중복 좋아요 불가 (409)
//! - **피드**: 팔로우 중인 사용자들의 게시물만 최신순으로 반환
//! - **이미지 분리**: 이미지는 GridFS에 저장되고 별도 엔드포인트로 제공

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        entities::{comments::comment::Comment, posts::post::Post},
        dto::{
            comments::{request::CreateCommentRequest, response::CommentResponse},
            posts::{request::CreatePostRequest, response::PostResponse},
        },
    },
    repositories::{
        comments::comment_repo::CommentRepository,
        media::media_repo::{MediaRepository, POST_IMAGE_BUCKET},
        posts::post_repo::PostRepository,
        users::user_repo::UserRepository,
    },
    core::errors::AppError,
};

/// 게시물 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// 게시물/사용자/댓글/이미지 리포지토리가 자동으로 주입됩니다.
#[service(name = "post")]
pub struct PostService {
    /// 게시물 데이터 액세스 리포지토리
    post_repo: Arc<PostRepository>,
    /// 사용자 리포지토리 (좋아요 기록, 팔로잉 목록 조회용)
    user_repo: Arc<UserRepository>,
    /// 댓글 리포지토리
    comment_repo: Arc<CommentRepository>,
    /// GridFS 이미지 저장 리포지토리
    media_repo: Arc<MediaRepository>,
}

impl PostService {
    /// 새 게시물 생성
    ///
    /// 이미지가 첨부된 경우 먼저 GridFS에 업로드하고,
    /// 파일 ID를 게시물 도큐먼트에 연결합니다.
    ///
    /// # Arguments
    ///
    /// * `author_id` - 작성자 ID (인증된 사용자)
    /// * `request` - 제목/본문 (핸들러에서 검증 완료)
    /// * `image` - 첨부 이미지 (파일명, 바이트)
    pub async fn create_post(
        &self,
        author_id: &str,
        request: CreatePostRequest,
        image: Option<(String, Vec<u8>)>,
    ) -> Result<PostResponse, AppError> {
        let author_oid = ObjectId::parse_str(author_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let image_id = match image {
            Some((filename, bytes)) => {
                let id = self.media_repo.upload(POST_IMAGE_BUCKET, &filename, &bytes).await?;
                Some(id)
            }
            None => None,
        };

        let post = Post::new(author_oid, request.title, request.content, image_id);
        let created = self.post_repo.create(post).await?;

        log::info!("게시물 생성 완료 - author: {}, 이미지 첨부: {}", author_id, image_id_str(&created));
        Ok(PostResponse::from(created))
    }

    /// 게시물 목록 조회 (최신순)
    pub async fn list_posts(&self, limit: i64, skip: u64) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.post_repo.find_all(limit, skip).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 게시물 단건 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시물이 존재하지 않음
    pub async fn get_post(&self, id: &str) -> Result<PostResponse, AppError> {
        let post = self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        Ok(PostResponse::from(post))
    }

    /// 게시물 첨부 이미지 다운로드
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시물이 없거나 이미지가 첨부되지 않음
    pub async fn get_post_image(&self, id: &str) -> Result<Vec<u8>, AppError> {
        let post = self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let image_id = post.image_id
            .ok_or_else(|| AppError::NotFound("게시물에 첨부된 이미지가 없습니다".to_string()))?;

        self.media_repo.download(POST_IMAGE_BUCKET, &image_id).await
    }

    /// 게시물 삭제
    ///
    /// 작성자 본인만 삭제할 수 있으며, 첨부 이미지와 댓글을 함께 정리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시물이 존재하지 않음
    /// * `AppError::AuthorizationError` - 작성자가 아닌 사용자의 삭제 시도
    pub async fn delete_post(&self, id: &str, requester_id: &str) -> Result<(), AppError> {
        let post = self.post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let requester_oid = ObjectId::parse_str(requester_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        if !post.is_author(&requester_oid) {
            return Err(AppError::AuthorizationError("게시물 작성자만 삭제할 수 있습니다".to_string()));
        }

        // 첨부 이미지와 댓글 정리
        if let Some(ref image_id) = post.image_id {
            let _ = self.media_repo.delete(POST_IMAGE_BUCKET, image_id).await;
        }
        if let Some(ref post_oid) = post.id {
            let deleted_comments = self.comment_repo.delete_by_post(post_oid).await?;
            if deleted_comments > 0 {
                log::debug!("게시물 댓글 {}개 삭제됨 - post: {}", deleted_comments, id);
            }
        }

        self.post_repo.delete(id).await?;

        log::info!("게시물 삭제 완료 - post: {}, requester: {}", id, requester_id);
        Ok(())
    }

    /// 게시물 좋아요
    ///
    /// 사용자의 `liked_posts` 배열과 게시물의 `likes` 카운터를 함께 갱신합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 좋아요를 누른 게시물
    /// * `AppError::NotFound` - 게시물이 존재하지 않음
    pub async fn like_post(&self, user_id: &str, post_id: &str) -> Result<PostResponse, AppError> {
        let user = self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let post = self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let post_oid = post.id
            .ok_or_else(|| AppError::InternalError("게시물 ID가 없습니다".to_string()))?;
        let user_oid = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        if user.has_liked(&post_oid) {
            return Err(AppError::ConflictError("이미 좋아요를 누른 게시물입니다".to_string()));
        }

        self.user_repo.add_liked_post(&user_oid, &post_oid).await?;

        let updated = self.post_repo
            .update_likes(post_id, 1)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        Ok(PostResponse::from(updated))
    }

    /// 게시물 좋아요 취소
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 좋아요를 누르지 않은 게시물
    pub async fn unlike_post(&self, user_id: &str, post_id: &str) -> Result<PostResponse, AppError> {
        let user = self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let post = self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let post_oid = post.id
            .ok_or_else(|| AppError::InternalError("게시물 ID가 없습니다".to_string()))?;
        let user_oid = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        if !user.has_liked(&post_oid) {
            return Err(AppError::ConflictError("좋아요를 누르지 않은 게시물입니다".to_string()));
        }

        self.user_repo.remove_liked_post(&user_oid, &post_oid).await?;

        let updated = self.post_repo
            .update_likes(post_id, -1)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        Ok(PostResponse::from(updated))
    }

    /// 피드 조회
    ///
    /// 팔로우 중인 사용자들의 게시물을 최신순으로 반환합니다.
    /// 아무도 팔로우하지 않은 경우 빈 목록을 반환합니다.
    pub async fn get_feed(&self, user_id: &str, limit: i64, skip: u64) -> Result<Vec<PostResponse>, AppError> {
        let user = self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if user.following.is_empty() {
            return Ok(Vec::new());
        }

        let posts = self.post_repo.find_by_authors(&user.following, limit, skip).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 프로필 피드 조회
    ///
    /// 특정 사용자가 작성한 게시물만 최신순으로 반환합니다.
    pub async fn get_profile_feed(&self, user_id: &str, limit: i64, skip: u64) -> Result<Vec<PostResponse>, AppError> {
        let user = self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let user_oid = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let posts = self.post_repo.find_by_authors(&[user_oid], limit, skip).await?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// 댓글 작성
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 게시물이 존재하지 않음
    pub async fn create_comment(
        &self,
        author_id: &str,
        post_id: &str,
        request: CreateCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let author_oid = ObjectId::parse_str(author_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let post = self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let post_oid = post.id
            .ok_or_else(|| AppError::InternalError("게시물 ID가 없습니다".to_string()))?;

        let comment = Comment::new(post_oid, author_oid, request.content);
        let created = self.comment_repo.create(comment).await?;

        Ok(CommentResponse::from(created))
    }

    /// 댓글 목록 조회 (작성순)
    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<CommentResponse>, AppError> {
        let post = self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("게시물을 찾을 수 없습니다".to_string()))?;

        let post_oid = post.id
            .ok_or_else(|| AppError::InternalError("게시물 ID가 없습니다".to_string()))?;

        let comments = self.comment_repo.find_by_post(&post_oid).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }
}

/// 로그 출력용 이미지 첨부 여부 문자열
fn image_id_str(post: &Post) -> &'static str {
    if post.image_id.is_some() { "yes" } else { "no" }
}
