//! # 댓글 리포지토리 구현
//!
//! 댓글 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::comments::comment::Comment,
};
use singleton_macro::repository;
use crate::core::errors::AppError;

/// 댓글 데이터 액세스 리포지토리
///
/// 댓글 생성과 게시물별 조회, 게시물 삭제 시 일괄 정리를 담당합니다.
/// 댓글은 게시물과 달리 개별 캐싱하지 않습니다.
#[repository(name = "comment", collection = "comments")]
pub struct CommentRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl CommentRepository {
    /// 새 댓글 생성
    pub async fn create(&self, mut comment: Comment) -> Result<Comment, AppError> {
        let result = self.collection::<Comment>()
            .insert_one(&comment)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        comment.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(comment)
    }

    /// 게시물의 댓글 목록 조회
    ///
    /// 작성 시간 오름차순으로 반환합니다.
    pub async fn find_by_post(&self, post_id: &ObjectId) -> Result<Vec<Comment>, AppError> {
        let cursor = self.collection::<Comment>()
            .find(doc! { "post_id": post_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 게시물의 댓글 일괄 삭제
    ///
    /// 게시물 삭제 시 서비스 계층에서 호출됩니다.
    /// 삭제된 댓글 수를 반환합니다.
    pub async fn delete_by_post(&self, post_id: &ObjectId) -> Result<u64, AppError> {
        let result = self.collection::<Comment>()
            .delete_many(doc! { "post_id": post_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_collection_cache(None).await;

        Ok(result.deleted_count)
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Comment>();

        // 게시물별 댓글 조회 인덱스
        let post_index = IndexModel::builder()
            .keys(doc! { "post_id": 1, "created_at": 1 })
            .options(IndexOptions::builder()
                .name("post_created_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([post_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
