//! 検索サービスの境界
//!
//! コントローラは具体的なHTTPクライアントを知らない。
//! Web版は web-sys fetch、CLI版は reqwest、テストはメモリ上のダブルを渡す。

use crate::error::{Error, Result};
use crate::types::{SearchPage, SearchRequest};

/// ページ単位の画像検索サービス
#[allow(async_fn_in_trait)]
pub trait SearchService {
    /// 1ページ分を検索
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage>;
}

/// レスポンス本文をパース
pub fn parse_search_page(body: &str) -> Result<SearchPage> {
    Ok(serde_json::from_str(body)?)
}

/// 2xx 以外のステータスをエラーに変換
///
/// Pexels のエラー本文は `{"error": "..."}` 形式のことが多いので、
/// あればそのメッセージを使う。
pub fn check_status(status: u16, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect());

    Err(Error::Status { status, message })
}
