use serde::{Deserialize, Serialize};

/// アプリのテーマ種別。ワイヤ表現は `"light"` / `"dark"`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// テーマ解決の状態機械
///
/// 初期状態はホストの報告値に追従します（報告が無ければ Light）。
/// ユーザーが明示的に操作した時点で追従をやめ、以後のシステム変更は
/// 無視します。終端状態はありません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResolver {
    current: ThemeMode,
    system_driven: bool,
}

impl ThemeResolver {
    /// ホストの報告する外観から初期状態を導出します。
    pub fn from_system(reported: Option<ThemeMode>) -> Self {
        Self {
            current: reported.unwrap_or(ThemeMode::Light),
            system_driven: true,
        }
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn is_system_driven(&self) -> bool {
        self.system_driven
    }

    /// テーマを反転し、ユーザー選択として固定します。
    pub fn toggle(&mut self) -> ThemeMode {
        self.current = self.current.toggled();
        self.system_driven = false;
        self.current
    }

    /// テーマを明示指定し、ユーザー選択として固定します。
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.current = mode;
        self.system_driven = false;
    }

    /// システム外観の変更通知。ユーザー選択後は無視します。
    pub fn system_appearance_changed(&mut self, reported: ThemeMode) {
        if self.system_driven {
            self.current = reported;
        }
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::from_system(None)
    }
}
