//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   ├── signup_request.rs      # 회원가입 요청
//! │   ├── auth_request.rs        # 로그인/토큰 갱신 요청
//! │   └── update_profile.rs      # 프로필/사용자명 수정 요청
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs       # 사용자/가입/로그인 응답
//! ```

pub mod request;
pub mod response;
