//! トレーシングの初期化
//!
//! JSON 形式の構造化ログを `RUST_LOG` で制御します（既定は info）。
//! 初期化は冪等で、テストから何度呼んでも安全です。

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static TELEMETRY: OnceCell<()> = OnceCell::new();

pub fn init_telemetry() {
    TELEMETRY.get_or_init(|| {
        // 別のサブスクライバが既に設定されていても失敗させない
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .try_init();
    });
}
