use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// ドメインエラー（不変条件違反）
///
/// 「対象が見つからない」はエラーではなく番兵値（`Option::None` /
/// `false`）で表現するため、ここには含めません。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid TaskId: {0}")]
    InvalidTaskId(String),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long (max {max} characters)")]
    TitleTooLong { max: usize },

    #[error("Description too long (max {max} characters)")]
    DescriptionTooLong { max: usize },
}
