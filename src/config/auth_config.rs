//! # Authentication Configuration Module
//!
//! JWT 토큰 발급과 검증에 필요한 설정을 관리하는 모듈입니다.
//! 비밀키, 액세스/리프레시 토큰 만료 시간 등을 환경 변수 기반으로 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="30"
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 생성, 검증, 만료 시간 등을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 액세스 토큰은 짧게, 리프레시 토큰은 길게
/// 3. **토큰 저장소 보안**: 클라이언트에서 안전한 저장소 사용
/// 4. **토큰 순환**: 정기적인 토큰 갱신 정책
///
/// ## 권장 설정값
///
/// - **개발**: 액세스 토큰 24시간, 리프레시 토큰 30일
/// - **프로덕션**: 액세스 토큰 15분, 리프레시 토큰 30일
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 프로덕션에서는 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// JWT 액세스 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 권장 설정값
    ///
    /// - **개발**: 24시간 (편의성 우선)
    /// - **스테이징**: 1시간 (프로덕션 유사)
    /// - **프로덕션**: 15분 (보안 우선)
    ///
    /// # 기본값
    ///
    /// 24시간
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    /// JWT 리프레시 토큰의 만료 시간을 일 단위로 반환합니다.
    ///
    /// 리프레시 토큰은 액세스 토큰을 갱신하는 데 사용되므로,
    /// 액세스 토큰보다 훨씬 긴 유효 기간을 가져야 합니다.
    ///
    /// # 기본값
    ///
    /// 30일
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_expiration_default_is_30_days() {
        unsafe { std::env::remove_var("JWT_REFRESH_EXPIRATION_DAYS") };
        assert_eq!(JwtConfig::refresh_expiration_days(), 30);
    }

    #[test]
    fn test_access_expiration_default_is_24_hours() {
        unsafe { std::env::remove_var("JWT_EXPIRATION_HOURS") };
        assert_eq!(JwtConfig::expiration_hours(), 24);
    }
}
