//! 検索結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SearchRequest: 検索サービスへのリクエスト
//! - SearchResult: 写真1件（解像度別URL付き）
//! - SearchPage: 1ページ分のレスポンス

use crate::error::Result;
use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

/// 解像度別の画像URL
///
/// tiny/small/medium/large はギャラリー表示に必須。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSrc {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    #[serde(default)]
    pub portrait: String,
    #[serde(default)]
    pub landscape: String,
    pub tiny: String,
}

/// 写真1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,

    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,

    /// 写真ページURL
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub photographer: String,

    #[serde(default)]
    pub photographer_url: String,

    #[serde(default)]
    pub avg_color: Option<String>,

    #[serde(default)]
    pub alt: String,

    pub src: PhotoSrc,
}

/// 検索レスポンス1ページ分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,

    pub photos: Vec<SearchResult>,

    #[serde(default)]
    pub total_results: u64,

    #[serde(default)]
    pub next_page: Option<String>,

    #[serde(default)]
    pub prev_page: Option<String>,
}

/// 検索リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub per_page: u32,
    pub page: u32,
}

impl SearchRequest {
    fn params(&self) -> [(&'static str, String); 3] {
        [
            ("query", self.query.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ]
    }

    /// クエリ文字列（`query=...&per_page=...&page=...`、form-urlencoded）
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params())
            .finish()
    }

    /// エンドポイントに付けた完全なURL
    pub fn url(&self, endpoint: &str) -> Result<String> {
        let url = Url::parse_with_params(endpoint, self.params())?;
        Ok(url.into())
    }
}
