//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 사용자명/비밀번호 기반 로그인과 JWT 토큰 기반의 상태 없는 인증을 구현합니다.
//!
//! # Endpoints
//!
//! - **회원가입**: 사용자명/비밀번호 방식 (`POST /auth/signup`)
//! - **로그인**: JWT 토큰 쌍 발급 (`POST /auth/login`)
//! - **토큰 갱신**: 리프레시 토큰으로 재발급 (`POST /auth/refresh`)
//! - **내 정보**: 현재 인증된 사용자 조회 (`GET /auth/me`)
//! - **로그아웃**: 리프레시 세션 삭제 (`POST /auth/logout`)
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    config::JwtConfig,
    services::{
        auth::TokenService,
        users::user_service::UserService,
    },
};
use crate::domain::dto::tokens::{request::RefreshRequest, response::ApiResponse};
use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::dto::users::response::LoginResponse;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::repositories::tokens::token_repository::TokenRepository;
use crate::core::errors::{AppError, ErrorContext};

/// 회원가입 핸들러
///
/// 사용자명과 비밀번호만으로 새 계정을 생성합니다.
/// 나머지 프로필 정보는 가입 후 프로필 수정으로 채워집니다.
///
/// # Endpoint
/// `POST /auth/signup`
///
/// # 요청 본문
///
/// ```json
/// {
///   "username": "john_doe",
///   "password": "SecurePass123",
///   "password_confirm": "SecurePass123"
/// }
/// ```
///
/// # 응답
///
/// - `201 Created` - 생성된 사용자 정보 (비밀번호 해시 제외)
/// - `400 Bad Request` - 검증 실패 (사용자명 형식, 비밀번호 강도, 확인 불일치)
/// - `409 Conflict` - 이미 사용 중인 사용자명
#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 사용자명과 비밀번호를 검증하고 JWT 토큰 쌍을 발급합니다.
/// 리프레시 토큰은 Redis 세션으로도 저장되어 로그아웃 시 즉시 무효화됩니다.
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = UserService::instance();
    let token_service = TokenService::instance();
    let token_repo = TokenRepository::instance();

    // 사용자 인증
    let user = user_service
        .verify_password(&payload.username, &payload.password)
        .await?;

    let user_id = user.id_string().unwrap_or_default();

    log::info!("로그인 시도 - 사용자: {}, ID: {}", payload.username, user_id);

    // JWT 토큰 쌍 생성
    let token_pair = token_service
        .generate_token_pair(&user)
        .map_err(|e| {
            log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", payload.username, e);
            e
        })?;

    // 리프레시 토큰 세션 저장
    if let Some(ref refresh_token) = token_pair.refresh_token {
        let ttl = (JwtConfig::refresh_expiration_days() * 24 * 3600) as u64;
        if let Err(e) = token_repo
            .store_refresh_token(&user_id, &user.username, refresh_token, ttl)
            .await
        {
            log::error!("리프레시 세션 저장 실패 - user_id: {}, 에러: {}", user_id, e);
            return Err(AppError::InternalError("세션 저장에 실패했습니다".to_string()));
        }
    }

    // 로그인 시각 기록
    user_service.record_login(&user_id).await?;

    let refresh_token = token_pair.refresh_token.clone().unwrap_or_default();
    let response = LoginResponse::with_refresh_token(
        user,
        token_pair.access_token,
        token_pair.expires_in,
        refresh_token,
    );

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰을 검증하고 새 토큰 쌍을 발급합니다.
/// Redis 세션과 비교하여 로그아웃된 토큰은 거부합니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshRequest>,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let token_repo = TokenRepository::instance();
    let user_service = UserService::instance();

    // 리프레시 토큰 자체 검증 (서명, 만료)
    let claims = token_service.verify_token(&payload.refresh_token)
        .map_err(|_| AppError::AuthenticationError("리프레시 토큰이 만료되었거나 유효하지 않습니다".to_string()))?;

    // Redis 세션과 비교 (로그아웃된 토큰 거부)
    let session = token_repo
        .get_refresh_token(&claims.sub, &payload.refresh_token)
        .await
        .context("세션 조회 실패")?;

    if session.is_none() {
        log::warn!("세션 없는 리프레시 토큰 사용 시도: 사용자 ID {}", claims.sub);
        return Err(AppError::AuthenticationError("세션이 만료되었습니다. 다시 로그인해주세요".to_string()));
    }

    // 사용자 상태 확인 후 새 토큰 쌍 발급
    let user = user_service.verify_active(&claims.sub).await?;
    let token_pair = token_service.generate_token_pair(&user)?;

    // 새 리프레시 세션으로 교체
    if let Some(ref refresh_token) = token_pair.refresh_token {
        let ttl = (JwtConfig::refresh_expiration_days() * 24 * 3600) as u64;
        token_repo
            .store_refresh_token(&claims.sub, &user.username, refresh_token, ttl)
            .await
            .with_context(|| format!("세션 저장 실패 (user_id: {})", claims.sub))?;
    }

    log::info!("토큰 갱신 성공: 사용자 ID {}", claims.sub);

    Ok(HttpResponse::Ok().json(json!({
        "access_token": token_pair.access_token,
        "refresh_token": token_pair.refresh_token,
        "expires_in": token_pair.expires_in,
        "token_type": "Bearer"
    })))
}

/// 현재 인증된 사용자 정보 조회 핸들러
///
/// JWT 토큰을 검증하고 데이터베이스에서 최신 사용자 정보를 조회하여 반환합니다.
///
/// # Endpoint
/// `GET /auth/me`
#[get("/me")]
pub async fn get_current_user(
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let token_service = TokenService::instance();
    let user_service = UserService::instance();

    // Authorization 헤더에서 토큰 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    // Bearer 토큰 추출 및 검증
    let token = token_service.extract_bearer_token(auth_header)?;
    let user_id = token_service.extract_user_id(token)?;

    // 데이터베이스에서 최신 사용자 정보 조회
    let user = user_service.get_user_by_id(&user_id).await
        .map_err(|_| AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}

/// 로그아웃 핸들러
///
/// Redis에 저장된 리프레시 세션을 삭제하여 리프레시 토큰을 즉시 무효화합니다.
/// 액세스 토큰은 짧은 만료 시간으로 자연 소멸합니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let token_repo = TokenRepository::instance();

    token_repo
        .delete_refresh_token(&user.user_id)
        .await
        .map_err(|e| {
            log::error!("로그아웃 실패 - user_id: {}, 에러: {}", user.user_id, e);
            AppError::InternalError("로그아웃 처리 중 오류가 발생했습니다".to_string())
        })?;

    log::info!("사용자 로그아웃 성공 - user_id: {}", user.user_id);

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(
        "로그아웃이 성공적으로 처리되었습니다".to_string(),
    )))
}
