use task_domain::ThemeMode;
use task_services::{
    seed, AppServices, AppearanceFeed, NetworkDelay, SessionAuthenticator, TaskStore,
};

/// 遅延なしのストアを構築します。
pub fn test_store() -> TaskStore {
    TaskStore::new(NetworkDelay::none())
}

/// 遅延なしの認証サービスを構築します。
pub fn test_authenticator() -> SessionAuthenticator {
    SessionAuthenticator::new(seed::credential(), NetworkDelay::none())
}

/// 外観フィード付きでサービス一式を構築します（遅延なし）。
pub fn test_services(initial: Option<ThemeMode>) -> (AppServices, AppearanceFeed) {
    let feed = AppearanceFeed::new(initial);
    let services = AppServices::with_delay(&feed, NetworkDelay::none());
    (services, feed)
}
