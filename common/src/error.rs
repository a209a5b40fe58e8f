//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// コントローラ側ではどのバリアントも「取得失敗」として同じに扱う。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API key is not configured (set PEXELS_API_KEY)")]
    MissingApiKey,

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
