//! セッション認証サービス
//!
//! 固定の資格情報1組との完全一致だけを判定します。トークンも
//! セッション状態も発行しません。失敗は常に `false` で表現され、
//! この型がエラーを返すことはありません。

use crate::latency::NetworkDelay;
use std::time::Duration;
use tracing::{info, warn};

const LOGIN_DELAY: Duration = Duration::from_millis(500);
const LOGOUT_DELAY: Duration = Duration::from_millis(200);

/// 起動時に一度だけ構築される資格情報。インスタンスは常に1つです。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

pub struct SessionAuthenticator {
    credential: Credential,
    delay: NetworkDelay,
}

impl SessionAuthenticator {
    pub fn new(credential: Credential, delay: NetworkDelay) -> Self {
        Self { credential, delay }
    }

    /// 両フィールドの大文字小文字を区別した完全一致でのみ true。
    /// ロックアウトも試行制限もなく、呼び出し間で状態を持ちません。
    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.delay.wait(LOGIN_DELAY).await;

        let authenticated =
            username == self.credential.username && password == self.credential.password;

        // パスワードはログに出さない
        if authenticated {
            info!(username, "login succeeded");
        } else {
            warn!(username, "login rejected");
        }

        authenticated
    }

    /// トークン/セッション検査を導入するまでのスタブ。常に false。
    pub fn is_authenticated(&self) -> bool {
        false
    }

    /// クリアすべきセッション状態が無いため、遅延以外の効果はありません。
    pub async fn logout(&self) {
        self.delay.wait(LOGOUT_DELAY).await;
        info!("logout completed");
    }
}
