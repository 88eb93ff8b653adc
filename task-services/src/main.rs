//! task-services バイナリのエントリポイント
//! ローカル確認用にサービス一式を構築し、短いスモーク操作を一巡します。

use anyhow::Result;
use task_domain::ThemeMode;
use task_services::{init_telemetry, AppServices, AppearanceFeed, ThemeService};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry();

    // ホスト外観の代わりに固定フィードを使う（UI ホストが無いため）
    let feed = AppearanceFeed::new(Some(ThemeMode::Light));
    let services = AppServices::new(&feed);
    let _subscription = ThemeService::follow(&services.theme, feed.subscribe());

    // ログイン → 一覧 → 追加 → 完了反転 → 削除 → ログアウト
    let authenticated = services.auth.login("admin", "1234").await;
    tracing::info!(authenticated, "smoke login");

    let tasks = services.tasks.all_tasks().await;
    println!("{}", serde_json::to_string_pretty(&tasks)?);

    let created = services
        .tasks
        .add_task("Buy milk".to_string(), String::new())
        .await?;
    let toggled = services.tasks.toggle_completion(&created.id).await;
    tracing::info!(
        task_id = created.id.as_str(),
        toggled = toggled.is_some(),
        "smoke toggle"
    );

    let deleted = services.tasks.delete_task(&created.id).await;
    tracing::info!(task_id = created.id.as_str(), deleted, "smoke delete");

    let theme = services.theme.toggle_theme();
    tracing::info!(theme = ?theme, "theme after user toggle");

    services.auth.logout().await;
    Ok(())
}
