//! 이미지 파일 저장 계층을 담당하는 리포지토리 모듈
//!
//! [`MediaRepository`](media_repo::MediaRepository)를 통해 GridFS 버킷에
//! 프로필 이미지와 게시물 이미지를 저장하고 조회합니다.

pub mod media_repo;

pub use media_repo::*;
