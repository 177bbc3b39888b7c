//! JWT 토큰 모델 모듈

pub mod token;

pub use token::{TokenClaims, TokenPair};
