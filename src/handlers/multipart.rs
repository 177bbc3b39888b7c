//! Multipart 업로드 공통 처리
//!
//! 프로필 이미지와 게시물 이미지 업로드에서 공유하는 필드 읽기 유틸리티입니다.
//! Content-Type 화이트리스트와 크기 제한은 [`MediaConfig`]를 따릅니다.

use actix_multipart::Field;
use actix_web::web::Bytes;
use futures_util::{Stream, StreamExt};

use crate::config::MediaConfig;
use crate::core::errors::AppError;

/// 업로드된 이미지 파일
pub(crate) struct UploadedImage {
    /// 클라이언트가 보낸 원본 파일명 (없으면 "upload")
    pub filename: String,
    /// 파일 전체 바이트
    pub bytes: Vec<u8>,
}

/// 필드 청크 스트림을 끝까지 모아 바이트 벡터로 반환합니다.
///
/// 스트림 중간에 전송 오류가 발생하면 잘린 데이터를 돌려주지 않고
/// `ValidationError`로 요청을 거부합니다. `max_bytes`를 넘는 순간
/// 즉시 중단합니다.
async fn collect_field_bytes<S, E>(
    stream: &mut S,
    max_bytes: Option<usize>,
) -> Result<Vec<u8>, AppError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    let mut bytes: Vec<u8> = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            AppError::ValidationError(format!("업로드 스트림이 중단되었습니다: {}", e))
        })?;

        if let Some(max) = max_bytes {
            if bytes.len() + chunk.len() > max {
                return Err(AppError::ValidationError(format!(
                    "이미지 크기가 제한({}MB)을 초과했습니다",
                    max / (1024 * 1024)
                )));
            }
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

/// 이미지 파일 필드를 읽어 검증합니다.
///
/// Content-Type이 허용 목록에 없거나 크기가 제한을 초과하면
/// `ValidationError`를 반환합니다.
pub(crate) async fn read_image_field(field: &mut Field) -> Result<UploadedImage, AppError> {
    if let Some(content_type) = field.content_type() {
        let content_type = content_type.to_string();
        if !MediaConfig::is_allowed_content_type(&content_type) {
            return Err(AppError::ValidationError(format!(
                "지원하지 않는 이미지 형식입니다: {} (허용: jpeg, png, gif, webp)",
                content_type
            )));
        }
    }

    let filename = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or("upload")
        .to_string();

    let bytes = collect_field_bytes(field, Some(MediaConfig::max_image_bytes())).await?;

    if bytes.is_empty() {
        return Err(AppError::ValidationError("빈 이미지 파일입니다".to_string()));
    }

    Ok(UploadedImage { filename, bytes })
}

/// 텍스트 필드를 UTF-8 문자열로 읽습니다.
pub(crate) async fn read_text_field(field: &mut Field) -> Result<String, AppError> {
    let data = collect_field_bytes(field, None).await?;

    String::from_utf8(data)
        .map_err(|_| AppError::ValidationError("텍스트 필드가 유효한 UTF-8이 아닙니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[actix_web::test]
    async fn test_collect_field_bytes_accumulates_chunks() {
        let chunks: Vec<Result<Bytes, String>> = vec![
            Ok(Bytes::from_static(b"hello ")),
            Ok(Bytes::from_static(b"world")),
        ];
        let mut s = stream::iter(chunks);

        let bytes = collect_field_bytes(&mut s, None).await.unwrap();
        assert_eq!(bytes, b"hello world");
    }

    #[actix_web::test]
    async fn test_collect_field_bytes_rejects_stream_error() {
        // 전송 오류가 발생하면 잘린 데이터를 정상 업로드로 취급하지 않아야 함
        let chunks: Vec<Result<Bytes, String>> = vec![
            Ok(Bytes::from_static(b"partial")),
            Err("connection reset".to_string()),
        ];
        let mut s = stream::iter(chunks);

        let result = collect_field_bytes(&mut s, None).await;
        match result {
            Err(AppError::ValidationError(msg)) => {
                assert!(msg.contains("업로드 스트림이 중단되었습니다"));
            }
            other => panic!("전송 오류가 거부되지 않았습니다: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_collect_field_bytes_enforces_size_limit() {
        let chunks: Vec<Result<Bytes, String>> = vec![
            Ok(Bytes::from(vec![0u8; 1024])),
            Ok(Bytes::from(vec![0u8; 1024])),
        ];
        let mut s = stream::iter(chunks);

        let result = collect_field_bytes(&mut s, Some(1500)).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
