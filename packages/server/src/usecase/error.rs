//! UseCase 層のエラー定義

use thiserror::Error;

/// グループ詳細取得のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetGroupDetailError {
    /// 指定された名前のグループが存在しない
    #[error("Group '{0}' not found")]
    GroupNotFound(String),
}
