use thiserror::Error;

/// 変換エンジンの統一エラー型
///
/// 変換関数そのものは失敗しない。設定の読み込み・検証のみがエラーを返す。
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
