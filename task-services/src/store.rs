//! インメモリのタスクストア
//!
//! 順序付きのタスク列を1本だけ保持し、自身の操作経由でのみ変更します。
//! 呼び出し側には常にクローンを返すため、外部から内部状態を壊すことは
//! できません。変更は Mutex で直列化され、ロックを await をまたいで
//! 保持することはありません。

use crate::latency::NetworkDelay;
use crate::seed;
use std::sync::Mutex;
use std::time::Duration;
use task_domain::{DomainResult, Task, TaskId, TaskUpdates};
use tracing::{info, warn};

const LIST_DELAY: Duration = Duration::from_millis(500);
const CREATE_DELAY: Duration = Duration::from_millis(300);
const TOGGLE_DELAY: Duration = Duration::from_millis(200);
const DELETE_DELAY: Duration = Duration::from_millis(300);
const FETCH_DELAY: Duration = Duration::from_millis(100);
const UPDATE_DELAY: Duration = Duration::from_millis(300);

pub struct TaskStore {
    tasks: Mutex<Vec<Task>>,
    delay: NetworkDelay,
}

impl TaskStore {
    /// 固定シードデータ入りでストアを構築します。
    pub fn new(delay: NetworkDelay) -> Self {
        Self::with_tasks(seed::sample_tasks(), delay)
    }

    /// 任意の初期タスクでストアを構築します（テスト用の注入口）。
    pub fn with_tasks(tasks: Vec<Task>, delay: NetworkDelay) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            delay,
        }
    }

    /// 現在の全タスクを格納順のまま複製して返します。並べ替えは
    /// 呼び出し側の仕事で、ストア自身は順序を変えません。
    pub async fn all_tasks(&self) -> Vec<Task> {
        self.delay.wait(LIST_DELAY).await;

        let tasks = self.tasks.lock().unwrap();
        info!(count = tasks.len(), "tasks listed");
        tasks.clone()
    }

    /// 検証付きでタスクを生成し、列の末尾に追加します。
    /// タイトルが空の場合などはストアを変更せずエラーを返します。
    pub async fn add_task(&self, title: String, description: String) -> DomainResult<Task> {
        self.delay.wait(CREATE_DELAY).await;

        let task = match Task::new(title, description) {
            Ok(task) => task,
            Err(e) => {
                warn!(error = %e, "task creation rejected");
                return Err(e);
            }
        };

        let mut tasks = self.tasks.lock().unwrap();
        tasks.push(task.clone());
        info!(task_id = task.id.as_str(), "task created");
        Ok(task)
    }

    /// 該当タスクの完了状態をその場で反転します。
    /// 見つからなければ `None`。
    pub async fn toggle_completion(&self, id: &TaskId) -> Option<Task> {
        self.delay.wait(TOGGLE_DELAY).await;

        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.toggle_completion();
                info!(
                    task_id = id.as_str(),
                    completed = task.completed,
                    "task completion toggled"
                );
                Some(task.clone())
            }
            None => {
                warn!(task_id = id.as_str(), "toggle target not found");
                None
            }
        }
    }

    /// 該当タスクを取り除き、削除が起きたかを返します。
    /// 既に存在しない ID に対しては false を返し、ストアは変わりません。
    pub async fn delete_task(&self, id: &TaskId) -> bool {
        self.delay.wait(DELETE_DELAY).await;

        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        let removed = tasks.len() < before;

        if removed {
            info!(task_id = id.as_str(), "task deleted");
        } else {
            warn!(task_id = id.as_str(), "delete target not found");
        }
        removed
    }

    pub async fn task_by_id(&self, id: &TaskId) -> Option<Task> {
        self.delay.wait(FETCH_DELAY).await;

        let tasks = self.tasks.lock().unwrap();
        tasks.iter().find(|t| &t.id == id).cloned()
    }

    /// 指定されたフィールドだけを上書きします。`Ok(None)` は対象なし。
    pub async fn update_task(
        &self,
        id: &TaskId,
        updates: TaskUpdates,
    ) -> DomainResult<Option<Task>> {
        self.delay.wait(UPDATE_DELAY).await;

        if let Err(e) = updates.validate() {
            warn!(task_id = id.as_str(), error = %e, "task update rejected");
            return Err(e);
        }

        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.apply_updates(&updates);
                info!(task_id = id.as_str(), "task updated");
                Ok(Some(task.clone()))
            }
            None => {
                warn!(task_id = id.as_str(), "update target not found");
                Ok(None)
            }
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(NetworkDelay::realistic())
    }
}
