use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// タスクの安定識別子（ULID）
///
/// 生成時刻由来で辞書順ソート可能。プロセス生存期間中に再利用されません。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// 固定タイムスタンプから決定的に ID を導出します。
    /// シードデータの再現可能な識別子に使います。
    pub fn from_parts(timestamp_ms: u64, entropy: u128) -> Self {
        Self(Ulid::from_parts(timestamp_ms, entropy).to_string())
    }

    pub fn from_string(s: String) -> DomainResult<Self> {
        Ulid::from_string(&s).map_err(|_| DomainError::InvalidTaskId(s.clone()))?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn timestamp_ms(&self) -> Option<u64> {
        Ulid::from_string(&self.0)
            .ok()
            .map(|ulid| ulid.timestamp_ms())
    }

    pub fn created_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.timestamp_ms()
            .and_then(|ms| chrono::DateTime::from_timestamp_millis(ms as i64))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}
