//! Pexels 検索API（reqwest 版）

use crate::error::Result;
use nature_gallery_common::config::normalize_api_key;
use nature_gallery_common::{
    check_status, parse_search_page, Error, SearchPage, SearchRequest, SearchService,
    PEXELS_SEARCH_URL,
};
use reqwest::header::{ACCEPT, AUTHORIZATION};

#[derive(Debug, Clone)]
pub struct PexelsClient {
    http: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl PexelsClient {
    /// タイムアウトは reqwest の既定値のまま
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("nature-gallery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_key: normalize_api_key(api_key.as_deref()),
            endpoint: PEXELS_SEARCH_URL.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl SearchService for PexelsClient {
    async fn search(&self, request: &SearchRequest) -> nature_gallery_common::Result<SearchPage> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let url = request.url(&self.endpoint)?;

        tracing::debug!(%url, "requesting photos");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        check_status(status, &body)?;
        parse_search_page(&body)
    }
}
