//! タスクトラッカーのドメインモデル
//!
//! UI やサービス層から独立した純粋なモデルだけを置きます。
//! 非同期処理・I/O・共有状態はこのクレートには持ち込みません。

pub mod error;
pub mod identifiers;
pub mod task;
pub mod theme;

pub use error::*;
pub use identifiers::*;
pub use task::*;
pub use theme::*;
