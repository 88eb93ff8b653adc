//! ホスト外観（ライト/ダーク）の取得と変更通知
//!
//! OS が報告するカラースキームへの依存を明示的な注入点に置き換えます。
//! 変更通知は watch チャネルで配信し、購読側が破棄されれば自然に
//! 止まります。

use task_domain::ThemeMode;
use tokio::sync::watch;

/// ホストの現在のカラースキームを報告する注入点。
pub trait SystemAppearance: Send + Sync {
    /// 取得できない環境では `None` を返します。
    fn color_scheme(&self) -> Option<ThemeMode>;
}

/// 固定値を報告する実装（テストおよびローカル実行用）
#[derive(Debug, Clone, Copy)]
pub struct FixedAppearance(pub Option<ThemeMode>);

impl SystemAppearance for FixedAppearance {
    fn color_scheme(&self) -> Option<ThemeMode> {
        self.0
    }
}

/// 外観変更の発行側。UI ホストが OS からの通知をここへ流します。
pub struct AppearanceFeed {
    tx: watch::Sender<Option<ThemeMode>>,
}

impl AppearanceFeed {
    pub fn new(initial: Option<ThemeMode>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// 新しい外観を配信します。購読者がいなくても失敗しません。
    pub fn report(&self, mode: ThemeMode) {
        self.tx.send_replace(Some(mode));
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ThemeMode>> {
        self.tx.subscribe()
    }
}

impl SystemAppearance for AppearanceFeed {
    fn color_scheme(&self) -> Option<ThemeMode> {
        *self.tx.borrow()
    }
}
