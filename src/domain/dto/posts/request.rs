//! 게시물 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 게시물 생성 요청 DTO
///
/// multipart/form-data의 텍스트 필드에서 수집되며,
/// 핸들러가 조립을 마친 뒤 `validate()`를 호출합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// 게시물 제목 (1-200자)
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    /// 게시물 본문 (최대 5000자)
    #[validate(length(max = 5000, message = "본문은 최대 5000자까지 가능합니다"))]
    pub content: String,
}

/// 목록 조회 페이지네이션 쿼리
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// 최대 반환 개수 (기본값 100)
    pub limit: Option<i64>,
    /// 건너뛸 개수 (기본값 0)
    pub skip: Option<u64>,
}

impl PageQuery {
    /// limit을 1-100 범위로 보정하여 반환
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100).clamp(1, 100)
    }

    /// skip 값 반환 (기본값 0)
    pub fn skip(&self) -> u64 {
        self.skip.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_title() {
        let req = CreatePostRequest {
            title: "".to_string(),
            content: "body".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_page_query_clamps_limit() {
        let query = PageQuery { limit: Some(1000), skip: None };
        assert_eq!(query.limit(), 100);

        let query = PageQuery { limit: Some(0), skip: None };
        assert_eq!(query.limit(), 1);

        let query = PageQuery { limit: None, skip: Some(20) };
        assert_eq!(query.limit(), 100);
        assert_eq!(query.skip(), 20);
    }
}
