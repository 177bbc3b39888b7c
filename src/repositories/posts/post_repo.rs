//! # 게시물 리포지토리 구현
//!
//! 게시물 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::posts::post::Post,
};
use singleton_macro::repository;
use crate::core::errors::AppError;

/// 게시물 데이터 액세스 리포지토리
///
/// 게시물의 CRUD 연산, 피드 조회, 좋아요 카운터 갱신을 담당합니다.
///
/// ## 캐싱 전략
///
/// - **개별 게시물**: `post:{post_id}`, TTL 600초
/// - **목록/피드**: 작성-읽기 비율이 낮아 캐싱하지 않음
///
/// ## 인덱스
///
/// - `author_id` + `created_at(desc)`: 작성자별 피드 조회 최적화
/// - `created_at(desc)`: 전체 목록 정렬 최적화
#[repository(name = "post", collection = "posts")]
pub struct PostRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl PostRepository {
    /// ID로 게시물 조회
    ///
    /// 캐시 우선 조회를 적용합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Post>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let post = self.collection::<Post>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref post) = post {
            let _ = self.redis
                .set_with_expiry(&cache_key, post, 600)
                .await;
        }

        Ok(post)
    }

    /// 게시물 목록 조회 (페이지네이션)
    ///
    /// 최신순으로 정렬하여 반환합니다.
    pub async fn find_all(&self, limit: i64, skip: u64) -> Result<Vec<Post>, AppError> {
        let cursor = self.collection::<Post>()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .skip(skip)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 작성자 목록 기반 피드 조회
    ///
    /// 주어진 작성자들의 게시물을 최신순으로 반환합니다.
    /// 팔로우 기반 피드(`authors` = 팔로잉 목록)와
    /// 프로필 피드(`authors` = 본인 ID 하나)에서 공용으로 사용됩니다.
    pub async fn find_by_authors(&self, authors: &[ObjectId], limit: i64, skip: u64) -> Result<Vec<Post>, AppError> {
        if authors.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection::<Post>()
            .find(doc! { "author_id": { "$in": authors } })
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .skip(skip)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 게시물 생성
    pub async fn create(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self.collection::<Post>()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(post)
    }

    /// 좋아요 카운터 증감
    ///
    /// `$inc`로 `likes` 필드를 원자적으로 갱신하고 최신 게시물을 반환합니다.
    /// 사용자의 `liked_posts` 배열 갱신은 UserRepository가 담당합니다.
    pub async fn update_likes(&self, id: &str, delta: i64) -> Result<Option<Post>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Post>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$inc": { "likes": delta } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    /// 게시물 삭제
    ///
    /// 첨부 이미지와 댓글의 정리는 서비스 계층에서 수행합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Post>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 특정 사용자의 게시물에서 좋아요 기록을 일괄 제거할 때 사용되는
    /// 게시물 ID 목록 조회
    pub async fn find_ids_by_author(&self, author_id: &ObjectId) -> Result<Vec<ObjectId>, AppError> {
        let posts: Vec<Post> = self.collection::<Post>()
            .find(doc! { "author_id": author_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(posts.into_iter().filter_map(|p| p.id).collect())
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Post>();

        // 작성자별 피드 조회 인덱스
        let author_index = IndexModel::builder()
            .keys(doc! { "author_id": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("author_created_at".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([author_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
