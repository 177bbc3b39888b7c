//! # 미디어 리포지토리 구현
//!
//! GridFS 기반 이미지 저장소를 담당하는 리포지토리입니다.
//! 프로필 이미지는 `avatars` 버킷, 게시물 이미지는 `post_images` 버킷에
//! 분리 저장하며, 엔티티에는 파일 ID만 보관됩니다.

use std::sync::Arc;
use futures_util::{AsyncReadExt, AsyncWriteExt};
use mongodb::bson::{oid::ObjectId, Bson};
use crate::{
    core::registry::Repository,
    db::Database,
};
use singleton_macro::repository;
use crate::core::errors::AppError;

/// 프로필 이미지 버킷 이름
pub const AVATAR_BUCKET: &str = "avatars";
/// 게시물 이미지 버킷 이름
pub const POST_IMAGE_BUCKET: &str = "post_images";

/// GridFS 미디어 액세스 리포지토리
///
/// 이미지 바이트의 업로드/다운로드/삭제를 담당합니다.
/// 이미지는 불변 데이터이므로 Redis 캐싱 없이 GridFS에서 직접 스트리밍합니다.
#[repository(name = "media", collection = "media")]
pub struct MediaRepository {
    /// MongoDB 데이터베이스 연결 (GridFS 버킷 접근용)
    db: Arc<Database>,
}

impl MediaRepository {
    /// 이미지 업로드
    ///
    /// 주어진 버킷에 이미지 바이트를 저장하고 생성된 파일 ID를 반환합니다.
    pub async fn upload(&self, bucket_name: &str, filename: &str, bytes: &[u8]) -> Result<ObjectId, AppError> {
        let bucket = self.db.gridfs_bucket(bucket_name);

        let mut upload_stream = bucket
            .open_upload_stream(filename)
            .await
            .map_err(|e| AppError::FileStorageError(e.to_string()))?;

        upload_stream
            .write_all(bytes)
            .await
            .map_err(|e| AppError::FileStorageError(e.to_string()))?;

        upload_stream
            .close()
            .await
            .map_err(|e| AppError::FileStorageError(e.to_string()))?;

        match upload_stream.id() {
            Bson::ObjectId(id) => Ok(*id),
            other => Err(AppError::FileStorageError(format!(
                "예상하지 못한 GridFS 파일 ID 타입: {:?}", other
            ))),
        }
    }

    /// 이미지 다운로드
    ///
    /// 파일 ID로 이미지 전체 바이트를 읽어 반환합니다.
    /// 파일이 존재하지 않으면 `NotFound`를 반환합니다.
    pub async fn download(&self, bucket_name: &str, file_id: &ObjectId) -> Result<Vec<u8>, AppError> {
        let bucket = self.db.gridfs_bucket(bucket_name);

        let mut download_stream = bucket
            .open_download_stream(Bson::ObjectId(*file_id))
            .await
            .map_err(|_| AppError::NotFound("이미지를 찾을 수 없습니다".to_string()))?;

        let mut bytes = Vec::new();
        download_stream
            .read_to_end(&mut bytes)
            .await
            .map_err(|e| AppError::FileStorageError(e.to_string()))?;

        Ok(bytes)
    }

    /// 이미지 삭제
    ///
    /// 게시물/사용자 삭제 시 함께 호출됩니다. 이미 제거된 파일에 대한
    /// 삭제 요청은 조용히 무시됩니다.
    pub async fn delete(&self, bucket_name: &str, file_id: &ObjectId) -> Result<(), AppError> {
        let bucket = self.db.gridfs_bucket(bucket_name);

        // 파일이 없어도 치명적이지 않으므로 not-found는 무시
        if let Err(e) = bucket.delete(Bson::ObjectId(*file_id)).await {
            log::warn!("GridFS 파일 삭제 실패 (bucket={}, id={}): {}", bucket_name, file_id, e);
        }

        Ok(())
    }
}
