use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    /// 検索サービス側のエラー（ページ取得以外の経路で表に出る場合のみ）
    #[error(transparent)]
    Common(#[from] nature_gallery_common::Error),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("写真番号が範囲外です: {index}（取得済み {len}枚）")]
    InvalidIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
