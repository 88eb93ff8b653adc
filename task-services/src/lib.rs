//! インメモリのサービス層
//!
//! タスクストア・セッション認証・テーマ解決の3サービスを提供します。
//! 永続化もネットワークも持たず、プロセス再起動で状態はリセットされます。
//! UI 層はこのクレートの公開 API だけを呼び出します。

pub mod app;
pub mod appearance;
pub mod auth;
pub mod latency;
pub mod seed;
pub mod store;
pub mod telemetry;
pub mod theme;

pub use app::AppServices;
pub use appearance::{AppearanceFeed, FixedAppearance, SystemAppearance};
pub use auth::{Credential, SessionAuthenticator};
pub use latency::NetworkDelay;
pub use store::TaskStore;
pub use telemetry::init_telemetry;
pub use theme::ThemeService;
