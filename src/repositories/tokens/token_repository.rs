use std::sync::Arc;
use serde::{Deserialize, Serialize};
use chrono::Utc;
use singleton_macro::repository;
use crate::caching::redis::RedisClient;
use crate::core::registry::Repository;

/// JWT Refresh Token 세션 관리를 위한 Repository
///
/// Redis를 사용하여 다음 기능을 제공합니다:
/// - Refresh Token 저장 및 검증
/// - 토큰 만료 시간 자동 관리 (TTL)
#[repository(name = "token", collection = "tokens")]
pub struct TokenRepository {
    redis: Arc<RedisClient>,
}

/// Refresh Token 정보 (최적화된 최소 정보)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenInfo {
    /// 사용자 등록 ID
    pub user_id: String,
    /// 사용자명 (세션 식별용)
    pub username: String,
    /// 로그인 일시 (Unix timestamp)
    pub login_at: i64,
    /// Refresh Token 문자열 (JWT)
    pub refresh_token: String,
    /// 만료 시간 (TTL 계산용)
    pub expires_at: i64,
}

impl TokenRepository {
    /// Refresh Token 저장 (최소한의 필수 정보만)
    ///
    /// # Arguments
    /// * `user_id` - 사용자 ID
    /// * `username` - 사용자명
    /// * `refresh_token` - 저장할 refresh token
    /// * `ttl_seconds` - TTL (초 단위)
    pub async fn store_refresh_token(
        &self,
        user_id: &str,
        username: &str,
        refresh_token: &str,
        ttl_seconds: u64,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let key = format!("refresh_token:{}", user_id);

        if ttl_seconds == 0 {
            log::error!("TTL이 0입니다! user_id: {}", user_id);
            return Err("TTL cannot be zero".into());
        }

        // 최소 TTL 값 보장 (1분)
        let safe_ttl = if ttl_seconds < 60 {
            log::warn!("TTL이 너무 작습니다 ({}초). 최소값 60초로 설정합니다.", ttl_seconds);
            60
        } else {
            ttl_seconds
        };

        let now = Utc::now().timestamp();
        let token_info = RefreshTokenInfo {
            user_id: user_id.to_string(),
            username: username.to_string(),
            login_at: now,
            refresh_token: refresh_token.to_string(),
            expires_at: now + safe_ttl as i64,
        };

        let token_json = serde_json::to_string(&token_info)?;
        self.redis.setex(&key, safe_ttl, &token_json).await?;

        log::info!("Refresh token 저장 완료 - user_id: {}, ttl: {}초", user_id, safe_ttl);
        Ok(())
    }

    /// Refresh Token 조회 및 검증
    ///
    /// # Returns
    /// * `Some(RefreshTokenInfo)` - 유효한 토큰인 경우
    /// * `None` - 토큰이 없거나 일치하지 않는 경우
    pub async fn get_refresh_token(
        &self,
        user_id: &str,
        refresh_token: &str,
    ) -> Result<Option<RefreshTokenInfo>, Box<dyn std::error::Error>> {
        let key = format!("refresh_token:{}", user_id);

        match self.redis.get_string(&key).await? {
            Some(token_json) => {
                let token_info: RefreshTokenInfo = serde_json::from_str(&token_json)?;

                if token_info.refresh_token == refresh_token {
                    if token_info.expires_at > Utc::now().timestamp() {
                        Ok(Some(token_info))
                    } else {
                        // 만료된 토큰 삭제
                        self.redis.del(&key).await?;
                        Ok(None)
                    }
                } else {
                    Ok(None)
                }
            }
            None => Ok(None),
        }
    }

    /// Refresh Token 삭제 (로그아웃시 사용)
    pub async fn delete_refresh_token(
        &self,
        user_id: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let key = format!("refresh_token:{}", user_id);
        self.redis.del(&key).await?;
        Ok(())
    }

    /// 사용자의 모든 세션 정보 삭제 (회원 탈퇴시 사용)
    ///
    /// Refresh Token과 사용자 캐시 항목을 함께 정리합니다.
    pub async fn delete_all_user_sessions(
        &self,
        user_id: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let refresh_key = format!("refresh_token:{}", user_id);
        self.redis.del(&refresh_key).await?;

        let user_key = format!("user:{}", user_id);
        self.redis.del(&user_key).await?;

        log::info!("사용자 세션 정보 삭제 완료 - user_id: {}", user_id);
        Ok(())
    }
}
