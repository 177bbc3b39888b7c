//! 댓글 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 댓글 생성 요청 DTO
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// 댓글 본문 (1-1000자)
    #[validate(length(min = 1, max = 1000, message = "댓글은 1-1000자 사이여야 합니다"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_comment() {
        let req = CreateCommentRequest { content: "".to_string() };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_accepts_normal_comment() {
        let req = CreateCommentRequest { content: "nice post".to_string() };
        assert!(req.validate().is_ok());
    }
}
