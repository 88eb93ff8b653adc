//! 合成ルート
//!
//! 元実装のモジュールレベル・シングルトンを、起動時に一度だけ構築して
//! 明示的に受け渡すサービス束に置き換えます。テストはケースごとに
//! 新しいインスタンスを構築できます。

use crate::appearance::SystemAppearance;
use crate::auth::SessionAuthenticator;
use crate::latency::NetworkDelay;
use crate::seed;
use crate::store::TaskStore;
use crate::theme::ThemeService;
use std::sync::Arc;

pub struct AppServices {
    pub tasks: Arc<TaskStore>,
    pub auth: Arc<SessionAuthenticator>,
    pub theme: Arc<ThemeService>,
}

impl AppServices {
    /// シードデータ入り・実遅延プロファイルで構築します。
    pub fn new(system: &dyn SystemAppearance) -> Self {
        Self::with_delay(system, NetworkDelay::realistic())
    }

    /// 遅延プロファイルを注入して構築します（テスト用）。
    pub fn with_delay(system: &dyn SystemAppearance, delay: NetworkDelay) -> Self {
        Self {
            tasks: Arc::new(TaskStore::new(delay)),
            auth: Arc::new(SessionAuthenticator::new(seed::credential(), delay)),
            theme: ThemeService::new(system),
        }
    }
}
