//! 疑似ネットワーク遅延
//!
//! 元のサービス層はネットワーク往復を模した固定遅延の後に完了します。
//! 契約は「非同期に完了すること」であり、遅延値そのものではないため、
//! テスト向けに遅延なしプロファイルを用意しています。

use std::time::Duration;
use tokio::time::sleep;

/// 操作ごとの遅延プロファイル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkDelay {
    enabled: bool,
}

impl NetworkDelay {
    /// 元実装と同じミリ秒値で待機するプロファイル
    pub fn realistic() -> Self {
        Self { enabled: true }
    }

    /// 一切待機しないプロファイル（テスト用）
    pub fn none() -> Self {
        Self { enabled: false }
    }

    pub async fn wait(&self, duration: Duration) {
        if self.enabled {
            sleep(duration).await;
        }
    }
}

impl Default for NetworkDelay {
    fn default() -> Self {
        Self::realistic()
    }
}
