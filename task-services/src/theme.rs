//! テーマ解決サービス
//!
//! ドメインの `ThemeResolver` を共有可能な形で保持し、外観フィードの
//! 購読を管理します。購読タスクはサービスへの弱参照しか持たないため、
//! サービスが破棄されると購読も終了します（宙ぶらりんの監視を残さない）。

use crate::appearance::SystemAppearance;
use std::sync::{Arc, Mutex};
use task_domain::{ThemeMode, ThemeResolver};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct ThemeService {
    resolver: Mutex<ThemeResolver>,
}

impl ThemeService {
    /// ホストの報告する外観から初期テーマを導出して構築します。
    pub fn new(system: &dyn SystemAppearance) -> Arc<Self> {
        Arc::new(Self {
            resolver: Mutex::new(ThemeResolver::from_system(system.color_scheme())),
        })
    }

    pub fn theme(&self) -> ThemeMode {
        self.resolver.lock().unwrap().current()
    }

    pub fn is_system_driven(&self) -> bool {
        self.resolver.lock().unwrap().is_system_driven()
    }

    /// テーマを反転し、以後システム外観には追従しません。
    pub fn toggle_theme(&self) -> ThemeMode {
        self.resolver.lock().unwrap().toggle()
    }

    /// テーマを明示指定し、以後システム外観には追従しません。
    pub fn set_theme(&self, mode: ThemeMode) {
        self.resolver.lock().unwrap().set_mode(mode);
    }

    pub fn system_appearance_changed(&self, mode: ThemeMode) {
        self.resolver.lock().unwrap().system_appearance_changed(mode);
    }

    /// 外観フィードの購読を開始します。
    /// 転送タスクは `Weak` 経由でのみサービスに触れるため、サービス
    /// 破棄後の最初の通知で終了します。
    pub fn follow(
        service: &Arc<Self>,
        mut rx: watch::Receiver<Option<ThemeMode>>,
    ) -> JoinHandle<()> {
        let weak = Arc::downgrade(service);
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let Some(service) = weak.upgrade() else {
                    debug!("theme service dropped; ending appearance subscription");
                    break;
                };
                if let Some(mode) = *rx.borrow_and_update() {
                    service.system_appearance_changed(mode);
                }
            }
        })
    }
}
