use crate::error::{DomainError, DomainResult};
use crate::identifiers::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// タスクレコード
///
/// `id` と `created_at` は生成時に一度だけ設定され、以後不変です。
/// ストアが全インスタンスを専有し、呼び出し側には常にクローンを返します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// 空文字列を許容します（`None` は「未指定」と衝突するため Option にしません）
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// 検証付きでタスクを生成します。
    /// ID とタイムスタンプを採番し、`completed = false` で開始します。
    pub fn new(title: String, description: String) -> DomainResult<Self> {
        validate_title(&title)?;
        validate_description(&description)?;

        Ok(Self {
            id: TaskId::new(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            completed: false,
            created_at: Utc::now(),
        })
    }

    /// 完了状態を反転します。2回適用すると元に戻ります。
    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }

    /// 指定されたフィールドだけを上書きします。
    /// 呼び出し前に `TaskUpdates::validate` 済みであることが前提です。
    pub fn apply_updates(&mut self, updates: &TaskUpdates) {
        if let Some(ref title) = updates.title {
            self.title = title.trim().to_string();
        }
        if let Some(ref description) = updates.description {
            self.description = description.trim().to_string();
        }
    }
}

/// 部分更新ペイロード。`None` は「変更しない」を意味します。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdates {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TaskUpdates {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(ref title) = self.title {
            validate_title(title)?;
        }
        if let Some(ref description) = self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::EmptyTitle);
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(DomainError::TitleTooLong { max: MAX_TITLE_LEN });
    }
    Ok(())
}

fn validate_description(description: &str) -> DomainResult<()> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}
