//! 起動時の固定シードデータ
//!
//! 元アプリとの互換性テストのため、認証情報1組とサンプルタスク4件を
//! 元実装と同じ値で再現します。ID は固定タイムスタンプから決定的に
//! 導出した ULID です。永続化はされません。

use crate::auth::Credential;
use chrono::{DateTime, TimeZone, Utc};
use task_domain::{Task, TaskId};

/// 認証可能な唯一の資格情報（`admin` / `1234`）
pub fn credential() -> Credential {
    Credential {
        username: "admin".to_string(),
        password: "1234".to_string(),
    }
}

/// サンプルタスク4件。1件目だけ完了済み。
pub fn sample_tasks() -> Vec<Task> {
    vec![
        seed_task(
            1,
            "Настроить проект",
            "Настроить проект React Native с TypeScript и Expo",
            true,
            seed_time(10),
        ),
        seed_task(
            2,
            "Создать UI компоненты",
            "Разработать переиспользуемые компоненты для списка задач и полей ввода",
            false,
            seed_time(11),
        ),
        seed_task(
            3,
            "Реализовать аутентификацию",
            "Добавить экран входа с валидацией имени пользователя и пароля",
            false,
            seed_time(12),
        ),
        seed_task(
            4,
            "Добавить управление задачами",
            "Реализовать функции добавления, редактирования, удаления и переключения состояния задач",
            false,
            seed_time(13),
        ),
    ]
}

fn seed_time(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 10, 22, hour, 0, 0)
        .single()
        .expect("seed timestamp is a valid calendar date")
}

fn seed_task(
    entropy: u128,
    title: &str,
    description: &str,
    completed: bool,
    created_at: DateTime<Utc>,
) -> Task {
    Task {
        id: TaskId::from_parts(created_at.timestamp_millis() as u64, entropy),
        title: title.to_string(),
        description: description.to_string(),
        completed,
        created_at,
    }
}
