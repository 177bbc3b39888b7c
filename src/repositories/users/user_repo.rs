//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **관계 관리**: 팔로우/좋아요 배열의 양방향 갱신
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::user::User,
};
use singleton_macro::repository;
use crate::core::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산과 팔로우/좋아요 관계 갱신을 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**:
///   - 개별 사용자: `user:{user_id}`
///   - 이메일 조회: `user:email:{email}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: username(unique), email(unique sparse), created_at(desc)
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
/// 다음과 같은 에러 상황을 처리합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
/// - **ConflictError**: 이메일/사용자명 중복 등 비즈니스 규칙 위반
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    ///
    /// 조회 성능 향상을 위한 캐싱 레이어를 제공합니다.
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일 주소로 사용자 조회
    ///
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:email:{email}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// 사용자명으로 사용자 조회
    ///
    /// 사용자명은 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    /// 로그인과 중복 확인 경로에서 사용되며, 항상 최신 데이터가 필요하므로
    /// 캐싱하지 않습니다.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 적극적인 캐싱을 적용합니다.
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:{id}` (리포지토리 매크로의 `cache_key()` 사용)
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let user = self.collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, 600)
                .await;
        }

        Ok(user)
    }

    /// 사용자 목록 조회 (페이지네이션)
    ///
    /// 최신 가입순으로 정렬하여 반환합니다.
    pub async fn find_all(&self, limit: i64, skip: u64) -> Result<Vec<User>, AppError> {
        let cursor = self.collection::<User>()
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

    /// ID 목록으로 사용자들을 조회
    ///
    /// 팔로워/팔로잉 목록 응답 조립에 사용됩니다.
    /// 존재하지 않는 ID는 결과에서 조용히 제외됩니다.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<User>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection::<User>()
            .find(doc! { "_id": { "$in": ids } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 사용자명 중복 여부를 사전에 검증하고,
    /// 성공 시 관련 캐시를 무효화합니다.
    ///
    /// # 비즈니스 규칙
    ///
    /// 1. **사용자명 유니크성**: 동일한 사용자명으로 두 번째 계정 생성 불가
    /// 2. **ID 자동 할당**: MongoDB가 자동으로 ObjectId 생성
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        // DB에 저장
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// 기존 사용자의 정보를 부분적으로 업데이트합니다.
    /// 업데이트 후 최신 사용자 정보를 반환하고 관련 캐시를 무효화합니다.
    ///
    /// # 업데이트 연산
    ///
    /// - **MongoDB `$set` 연산자 사용**: 지정된 필드만 변경
    /// - **원자적 연산**: find_one_and_update로 조회와 업데이트를 동시에
    /// - **최신 데이터 반환**: ReturnDocument::After 옵션 사용
    ///
    /// # 캐시 관리
    ///
    /// 이메일이 변경되는 경우 기존 이메일 캐시 키는 호출자가
    /// `invalidate_email_cache`로 수동 무효화해야 합니다.
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self.collection::<User>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if updated_user.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated_user)
    }

    /// 이메일 캐시 키 무효화
    ///
    /// 이메일 변경이나 사용자 삭제 시 호출합니다.
    pub async fn invalidate_email_cache(&self, email: &str) {
        let _ = self.redis.del(&format!("user:email:{}", email)).await;
    }

    /// 사용자 삭제
    ///
    /// 지정된 ID의 사용자를 데이터베이스에서 영구적으로 삭제합니다.
    /// 프로필 이미지, 리프레시 세션 등 연관 데이터의 정리는
    /// 서비스 계층에서 수행합니다.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<User>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 팔로우 관계 생성
    ///
    /// 두 사용자 도큐먼트를 함께 갱신합니다:
    /// 팔로우하는 쪽의 `following` 배열과 대상의 `followers` 배열에
    /// `$addToSet`으로 추가하여 중복 삽입을 방지합니다.
    pub async fn follow(&self, follower_id: &ObjectId, target_id: &ObjectId) -> Result<(), AppError> {
        self.collection::<User>()
            .update_one(
                doc! { "_id": follower_id },
                doc! { "$addToSet": { "following": target_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.collection::<User>()
            .update_one(
                doc! { "_id": target_id },
                doc! { "$addToSet": { "followers": follower_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&follower_id.to_hex()).await;
        let _ = self.invalidate_cache(&target_id.to_hex()).await;

        Ok(())
    }

    /// 팔로우 관계 해제
    ///
    /// 양쪽 배열에서 `$pull`로 제거합니다. 관계가 없었던 경우에도
    /// 에러 없이 무시됩니다 (no-op).
    pub async fn unfollow(&self, follower_id: &ObjectId, target_id: &ObjectId) -> Result<(), AppError> {
        self.collection::<User>()
            .update_one(
                doc! { "_id": follower_id },
                doc! { "$pull": { "following": target_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.collection::<User>()
            .update_one(
                doc! { "_id": target_id },
                doc! { "$pull": { "followers": follower_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&follower_id.to_hex()).await;
        let _ = self.invalidate_cache(&target_id.to_hex()).await;

        Ok(())
    }

    /// 좋아요 기록 추가
    ///
    /// 사용자의 `liked_posts` 배열에 게시물 ID를 추가합니다.
    /// 좋아요 카운터 증가는 PostRepository가 담당합니다.
    pub async fn add_liked_post(&self, user_id: &ObjectId, post_id: &ObjectId) -> Result<(), AppError> {
        self.collection::<User>()
            .update_one(
                doc! { "_id": user_id },
                doc! { "$addToSet": { "liked_posts": post_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&user_id.to_hex()).await;
        Ok(())
    }

    /// 좋아요 기록 제거
    pub async fn remove_liked_post(&self, user_id: &ObjectId, post_id: &ObjectId) -> Result<(), AppError> {
        self.collection::<User>()
            .update_one(
                doc! { "_id": user_id },
                doc! { "$pull": { "liked_posts": post_id } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&user_id.to_hex()).await;
        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 사용자 컬렉션에 필요한 모든 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **사용자명 유니크 인덱스**: 중복 사용자명 방지 및 로그인 조회 최적화
    /// 2. **이메일 유니크 인덱스 (sparse)**: 이메일은 선택 필드이므로
    ///    미설정 도큐먼트를 허용하면서 설정된 값의 중복만 방지
    /// 3. **생성일 인덱스**: 최근 사용자 조회 및 정렬 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        // 사용자명 유니크 인덱스
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        // 이메일 유니크 인덱스 (선택 필드이므로 sparse)
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("email_unique".to_string())
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
            .create_indexes([username_index, email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
