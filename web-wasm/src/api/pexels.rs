//! Pexels 検索API（ブラウザ fetch 版）

use nature_gallery_common::config::normalize_api_key;
use nature_gallery_common::{
    check_status, Error, Result, SearchPage, SearchRequest, SearchService, PEXELS_SEARCH_URL,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Pexels クライアント
///
/// APIキーはビルド時の環境変数 `PEXELS_API_KEY` から埋め込む。
#[derive(Debug, Clone)]
pub struct PexelsClient {
    api_key: Option<String>,
    endpoint: String,
}

impl PexelsClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: normalize_api_key(api_key.as_deref()),
            endpoint: PEXELS_SEARCH_URL.to_string(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(option_env!("PEXELS_API_KEY").map(str::to_string))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// fetch 用のリクエストを組み立てる
    pub fn build_request(&self, request: &SearchRequest, api_key: &str) -> std::result::Result<Request, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let url = request
            .url(&self.endpoint)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let http_request = Request::new_with_str_and_init(&url, &opts)?;
        http_request.headers().set("Authorization", api_key)?;
        Ok(http_request)
    }
}

impl SearchService for PexelsClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let http_request = self
            .build_request(request, api_key)
            .map_err(|e| Error::Network(js_error(&e)))?;

        tracing::debug!(page = request.page, query = %request.query, "requesting photos");

        let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&http_request))
            .await
            .map_err(|e| Error::Network(js_error(&e)))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| Error::Network(js_error(&e)))?;

        if !resp.ok() {
            let body = read_text(&resp).await.unwrap_or_default();
            check_status(resp.status(), &body)?;
        }

        let json = resp.json().map_err(|e| Error::Parse(js_error(&e)))?;
        let json = JsFuture::from(json)
            .await
            .map_err(|e| Error::Parse(js_error(&e)))?;

        serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))
    }
}

async fn read_text(resp: &Response) -> Option<String> {
    let text = JsFuture::from(resp.text().ok()?).await.ok()?;
    text.as_string()
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
