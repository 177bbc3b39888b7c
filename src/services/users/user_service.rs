//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 회원가입, 인증, 프로필 관리, 팔로우 관계, 프로필 이미지까지
//! 사용자 도메인의 모든 규칙을 이 계층에서 적용합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Registration  │  │  Authentication │  │  Profile Mgmt   │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Duplicate Chk │  │ • Password Ver  │  │ • Partial $set  │  │
//! │  │ • Password Hash │  │ • Account State │  │ • Email Unique  │  │
//! │  │ • Entity Create │  │ • Timing Safe   │  │ • Avatar Upload │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐                       │
//! │  │  Social Graph   │  │ Account Delete  │                       │
//! │  │                 │  │                 │                       │
//! │  │ • Follow        │  │ • Posts Cascade │                       │
//! │  │ • Unfollow      │  │ • Avatar Clean  │                       │
//! │  │ • Follower List │  │ • Session Clean │                       │
//! │  └─────────────────┘  └─────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//!        UserRepository · PostRepository · CommentRepository
//!        MediaRepository · TokenRepository
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 환경별 cost 설정 (개발 4 / 운영 12)
//! - **에러 메시지 통합**: 존재하지 않는 계정과 틀린 비밀번호를 구분하지 않음
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::{doc, oid::ObjectId, to_bson, DateTime, Document};
use singleton_macro::service;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::{
            request::{SignupRequest, UpdateProfileRequest, UpdateUsernameRequest},
            response::{SignupResponse, UserResponse},
        },
    },
    repositories::{
        comments::comment_repo::CommentRepository,
        media::media_repo::{MediaRepository, AVATAR_BUCKET, POST_IMAGE_BUCKET},
        posts::post_repo::PostRepository,
        tokens::token_repository::TokenRepository,
        users::user_repo::UserRepository,
    },
    core::errors::AppError,
};
use crate::config::PasswordConfig;
use crate::utils::string_utils::{clean_optional_string, mask_email};

/// 사용자 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며, 필요한 리포지토리들이
/// 자동으로 주입됩니다:
///
/// ```rust,ignore
/// let user_service = UserService::instance(); // 항상 동일한 인스턴스
/// ```
///
/// ## 주요 책임
///
/// 1. **회원가입**: 중복 검증, 비밀번호 해싱, 계정 생성
/// 2. **인증**: 비밀번호 검증, 계정 상태 확인, 로그인 시각 기록
/// 3. **프로필 관리**: 부분 갱신, 이메일 유니크 검증, 사용자명 변경
/// 4. **팔로우 관계**: 양방향 배열 갱신, 자기 팔로우 방지
/// 5. **프로필 이미지**: GridFS 업로드/다운로드, 교체 시 이전 파일 정리
/// 6. **계정 삭제**: 게시물/댓글/이미지/세션 연쇄 정리
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
    /// 게시물 리포지토리 (계정 삭제 시 연쇄 정리용)
    post_repo: Arc<PostRepository>,
    /// 댓글 리포지토리 (계정 삭제 시 연쇄 정리용)
    comment_repo: Arc<CommentRepository>,
    /// GridFS 이미지 저장 리포지토리
    media_repo: Arc<MediaRepository>,
    /// 리프레시 세션 리포지토리 (계정 삭제 시 세션 정리용)
    token_repo: Arc<TokenRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성
    ///
    /// 사용자명과 비밀번호만으로 계정을 생성합니다.
    /// 나머지 프로필 정보는 가입 후 프로필 수정으로 채워집니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 사용자명 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    ///
    /// # 처리 과정
    ///
    /// 1. bcrypt를 사용한 비밀번호 해싱 (환경별 cost)
    /// 2. 빈 프로필의 User 엔티티 생성
    /// 3. Repository를 통한 저장 (사용자명 중복 검증 포함)
    /// 4. 민감 정보를 제거한 DTO 응답 생성
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AppError> {
        let start_time = std::time::Instant::now();

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        let hash_duration = hash_start.elapsed();

        log::info!("Password hashing took: {:?}", hash_duration);

        let user = User::new(request.username, password_hash);

        let created_user = self.user_repo.create(user).await?;

        let total_duration = start_time.elapsed();
        log::info!("Total user creation took: {:?}", total_duration);

        Ok(SignupResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// 비밀번호 검증 (로그인)
    ///
    /// 사용자명과 비밀번호로 로그인을 처리하고, 성공 시 인증된
    /// 사용자 엔티티를 반환합니다. 보안을 위해 존재하지 않는 계정과
    /// 틀린 비밀번호를 동일한 메시지로 처리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 자격증명, 비활성 계정
    /// * `AppError::InternalError` - 비밀번호 검증 시스템 오류
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<User, AppError> {
        let start_time = std::time::Instant::now();

        let user = self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("잘못된 사용자명 또는 비밀번호입니다".to_string()))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        let verify_duration = verify_start.elapsed();

        log::debug!("Password verification took: {:?}", verify_duration);

        if !is_valid {
            return Err(AppError::AuthenticationError("잘못된 사용자명 또는 비밀번호입니다".to_string()));
        }

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        let total_duration = start_time.elapsed();
        log::debug!("Total password verification took: {:?}", total_duration);

        Ok(user)
    }

    /// 로그인 시각 기록
    ///
    /// 로그인 성공 직후 호출되어 `last_login_at`을 갱신합니다.
    pub async fn record_login(&self, id: &str) -> Result<(), AppError> {
        self.user_repo
            .update(id, doc! { "last_login_at": DateTime::now() })
            .await?;
        Ok(())
    }

    /// 활성 사용자 엔티티 조회
    ///
    /// 토큰 갱신처럼 원본 엔티티가 필요한 흐름에서 사용합니다.
    /// 비활성 계정은 인증 오류로 거부합니다.
    pub async fn verify_active(&self, id: &str) -> Result<User, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

        if !user.is_active {
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 존재하지 않음
    /// * `AppError::ValidationError` - 잘못된 ObjectId 형식
    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 목록 조회 (페이지네이션)
    pub async fn list_users(&self, limit: i64, skip: u64) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all(limit, skip).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 프로필 정보 수정
    ///
    /// 전달된 필드만 `$set`으로 부분 갱신합니다.
    /// 이메일을 변경하는 경우 다른 계정이 사용 중인지 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 갱신할 필드가 하나도 없음
    /// * `AppError::ConflictError` - 이메일이 다른 계정에서 사용 중
    /// * `AppError::NotFound` - 사용자가 존재하지 않음
    pub async fn update_profile(&self, id: &str, request: UpdateProfileRequest) -> Result<UserResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError("갱신할 필드가 없습니다".to_string()));
        }

        let current = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let mut update_doc = Document::new();

        // 공백만 담긴 텍스트 필드는 무시
        if let Some(name) = clean_optional_string(request.name) {
            update_doc.insert("name", name);
        }
        if let Some(surname) = clean_optional_string(request.surname) {
            update_doc.insert("surname", surname);
        }
        if let Some(bio) = clean_optional_string(request.bio) {
            update_doc.insert("bio", bio);
        }
        if let Some(age) = request.age {
            update_doc.insert("age", age as i64);
        }
        if let Some(gender) = request.gender {
            let gender_bson = to_bson(&gender)
                .map_err(|e| AppError::InternalError(format!("성별 직렬화 실패: {}", e)))?;
            update_doc.insert("gender", gender_bson);
        }
        if let Some(ref email) = request.email {
            // 다른 계정이 사용 중인 이메일인지 확인
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id != current.id {
                    log::warn!("이메일 중복으로 프로필 수정 거부 - email: {}", mask_email(email));
                    return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
                }
            }
            update_doc.insert("email", email.clone());
        }

        update_doc.insert("updated_at", DateTime::now());

        let updated = self.user_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        // 이메일이 변경되었으면 기존 이메일 캐시 무효화
        if request.email.is_some() {
            if let Some(ref old_email) = current.email {
                self.user_repo.invalidate_email_cache(old_email).await;
            }
        }

        Ok(UserResponse::from(updated))
    }

    /// 사용자명 변경
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 사용자명
    pub async fn update_username(&self, id: &str, request: UpdateUsernameRequest) -> Result<UserResponse, AppError> {
        // 중복 확인 (본인의 현재 사용자명은 허용)
        if let Some(existing) = self.user_repo.find_by_username(&request.username).await? {
            if existing.id_string().as_deref() != Some(id) {
                return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
            }
        }

        let updated = self.user_repo
            .update(id, doc! {
                "username": &request.username,
                "updated_at": DateTime::now(),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 사용자 계정 삭제
    ///
    /// 사용자 도큐먼트와 함께 연관 데이터를 모두 정리합니다:
    ///
    /// 1. 작성한 게시물 (첨부 이미지, 댓글 포함)
    /// 2. 프로필 이미지 (GridFS)
    /// 3. 리프레시 세션 (Redis)
    ///
    /// 이는 되돌릴 수 없는 작업입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let user_oid = user.id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        // 작성한 게시물과 연관 데이터 정리
        let post_ids = self.post_repo.find_ids_by_author(&user_oid).await?;
        for post_id in &post_ids {
            if let Some(post) = self.post_repo.find_by_id(&post_id.to_hex()).await? {
                if let Some(ref image_id) = post.image_id {
                    let _ = self.media_repo.delete(POST_IMAGE_BUCKET, image_id).await;
                }
            }
            self.comment_repo.delete_by_post(post_id).await?;
            self.post_repo.delete(&post_id.to_hex()).await?;
        }

        // 프로필 이미지 정리
        if let Some(ref avatar_id) = user.avatar_id {
            let _ = self.media_repo.delete(AVATAR_BUCKET, avatar_id).await;
        }

        let deleted = self.user_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        // 이메일 캐시와 리프레시 세션 정리
        if let Some(ref email) = user.email {
            self.user_repo.invalidate_email_cache(email).await;
        }
        if let Err(e) = self.token_repo.delete_all_user_sessions(id).await {
            log::warn!("리프레시 세션 정리 실패 - user_id: {}, 에러: {}", id, e);
        }

        log::info!("사용자 삭제 완료 - user_id: {}, 게시물 {}개 정리됨", id, post_ids.len());
        Ok(())
    }

    /// 팔로우 관계 생성
    ///
    /// 팔로우하는 쪽의 `following`과 대상의 `followers` 배열을 함께 갱신합니다.
    /// `$addToSet`을 사용하므로 이미 팔로우 중인 경우에도 에러 없이 처리됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 자기 자신을 팔로우 시도
    /// * `AppError::NotFound` - 대상 사용자가 존재하지 않음
    pub async fn follow(&self, follower_id: &str, target_id: &str) -> Result<UserResponse, AppError> {
        if follower_id == target_id {
            return Err(AppError::ValidationError("자기 자신을 팔로우할 수 없습니다".to_string()));
        }

        let follower_oid = ObjectId::parse_str(follower_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;
        let target_oid = ObjectId::parse_str(target_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        // 대상 사용자 존재 확인
        let target = self.user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        self.user_repo.follow(&follower_oid, &target_oid).await?;

        log::debug!("팔로우 완료: {} -> {}", follower_id, target.username);

        // 갱신된 대상 사용자 반환
        self.get_user_by_id(target_id).await
    }

    /// 팔로우 관계 해제
    ///
    /// 양쪽 배열에서 제거합니다. 팔로우하지 않았던 경우에도
    /// 에러 없이 무시됩니다 (no-op).
    pub async fn unfollow(&self, follower_id: &str, target_id: &str) -> Result<UserResponse, AppError> {
        if follower_id == target_id {
            return Err(AppError::ValidationError("자기 자신을 언팔로우할 수 없습니다".to_string()));
        }

        let follower_oid = ObjectId::parse_str(follower_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;
        let target_oid = ObjectId::parse_str(target_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        // 대상 사용자 존재 확인
        self.user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        self.user_repo.unfollow(&follower_oid, &target_oid).await?;

        self.get_user_by_id(target_id).await
    }

    /// 팔로워 목록 조회
    pub async fn get_followers(&self, id: &str) -> Result<Vec<UserResponse>, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let followers = self.user_repo.find_by_ids(&user.followers).await?;
        Ok(followers.into_iter().map(UserResponse::from).collect())
    }

    /// 팔로잉 목록 조회
    pub async fn get_following(&self, id: &str) -> Result<Vec<UserResponse>, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let following = self.user_repo.find_by_ids(&user.following).await?;
        Ok(following.into_iter().map(UserResponse::from).collect())
    }

    /// 프로필 이미지 업로드
    ///
    /// 새 이미지를 GridFS에 저장하고 `avatar_id`를 갱신합니다.
    /// 기존 이미지가 있으면 업로드 성공 후 삭제합니다.
    pub async fn upload_avatar(&self, id: &str, filename: &str, bytes: &[u8]) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let new_avatar_id = self.media_repo.upload(AVATAR_BUCKET, filename, bytes).await?;

        let updated = self.user_repo
            .update(id, doc! {
                "avatar_id": new_avatar_id,
                "updated_at": DateTime::now(),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        // 이전 이미지 정리 (실패해도 무시)
        if let Some(ref old_avatar_id) = user.avatar_id {
            let _ = self.media_repo.delete(AVATAR_BUCKET, old_avatar_id).await;
        }

        Ok(UserResponse::from(updated))
    }

    /// 프로필 이미지 다운로드
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 사용자가 없거나 프로필 이미지가 미설정
    pub async fn get_avatar(&self, id: &str) -> Result<Vec<u8>, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        let avatar_id = user.avatar_id
            .ok_or_else(|| AppError::NotFound("프로필 이미지가 설정되지 않았습니다".to_string()))?;

        self.media_repo.download(AVATAR_BUCKET, &avatar_id).await
    }
}
