//! ページネーションコントローラ
//!
//! 取得済み写真リスト（追記のみ）、ページカーソル、ロード中フラグを管理する。
//!
//! 非同期の `fetch_page` / `load_initial` / `load_next` の他に、
//! `&mut self` を await 越しに保持できないUI（Leptos の signal 等）向けに
//! 2段階のAPIを持つ:
//!
//! 1. `start()` / `request_next_page()` が発行すべき `SearchRequest` を返す（フラグON）
//! 2. 呼び出し側が検索を実行し、結果を `complete_fetch()` に渡す（フラグOFF）

use crate::config::GalleryConfig;
use crate::error::Result;
use crate::service::SearchService;
use crate::types::{SearchPage, SearchRequest, SearchResult};

/// 1回の取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 成功。`count` 件を追記した（0件もあり得る）
    Appended { page: u32, count: usize },
    /// 失敗。状態は変更していない
    Failed { page: u32, error: String },
}

impl FetchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed { .. })
    }
}

/// ページネーションコントローラ
#[derive(Debug, Clone)]
pub struct PaginationController {
    config: GalleryConfig,
    /// 現在のページ（1始まり、減らない）
    page: u32,
    /// 取得済み写真（挿入順）
    results: Vec<SearchResult>,
    /// ライトボックス用の large URL（results と同じ並び）
    sources: Vec<String>,
    loading: bool,
    started: bool,
    in_flight: Option<u32>,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}

impl PaginationController {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            page: 1,
            results: Vec::new(),
            sources: Vec::new(),
            loading: false,
            started: false,
            in_flight: None,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// 現在のページカーソル
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// ライトボックスに渡す large 解像度URLの一覧
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 初回ロードを開始（1ページ目）。2回目以降は None
    pub fn start(&mut self) -> Option<SearchRequest> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(self.begin_fetch(self.page))
    }

    /// 「もっと見る」: カーソルを1進めて次ページの取得を開始
    ///
    /// ロード中は何もしない（カーソルも進めない）。
    /// 1ページ目は `start()` で取得すること。先にこちらを呼ぶと2ページ目から始まり、
    /// 以後 `start()` は None を返す。
    pub fn request_next_page(&mut self) -> Option<SearchRequest> {
        if self.loading {
            tracing::debug!(page = self.page, "fetch in flight; next page ignored");
            return None;
        }
        self.started = true;
        self.page = self.page.saturating_add(1);
        Some(self.begin_fetch(self.page))
    }

    /// 指定ページの取得を開始してリクエストを返す
    pub fn begin_fetch(&mut self, page: u32) -> SearchRequest {
        let page = page.max(1);
        self.loading = true;
        self.in_flight = Some(page);
        SearchRequest {
            query: self.config.query.clone(),
            per_page: self.config.per_page,
            page,
        }
    }

    /// 検索結果を反映してロード中フラグを下ろす
    ///
    /// 失敗時は写真リストを変更しない。エラーはログのみで呼び出し側へは返さない。
    pub fn complete_fetch(&mut self, result: Result<SearchPage>) -> FetchOutcome {
        let page = self.in_flight.take().unwrap_or(self.page);
        self.loading = false;

        match result {
            Ok(search_page) => {
                let count = search_page.photos.len();
                self.sources
                    .extend(search_page.photos.iter().map(|p| p.src.large.clone()));
                self.results.extend(search_page.photos);
                tracing::info!(page, count, total = self.results.len(), "photos appended");
                FetchOutcome::Appended { page, count }
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "error fetching photos");
                FetchOutcome::Failed {
                    page,
                    error: e.to_string(),
                }
            }
        }
    }

    /// 指定ページを取得して追記
    pub async fn fetch_page<S: SearchService>(&mut self, service: &S, page: u32) -> FetchOutcome {
        let request = self.begin_fetch(page);
        let result = service.search(&request).await;
        self.complete_fetch(result)
    }

    /// 初回ロード（1回だけ）
    pub async fn load_initial<S: SearchService>(&mut self, service: &S) -> Option<FetchOutcome> {
        let request = self.start()?;
        let result = service.search(&request).await;
        Some(self.complete_fetch(result))
    }

    /// 次ページをロード。ロード中なら None
    pub async fn load_next<S: SearchService>(&mut self, service: &S) -> Option<FetchOutcome> {
        let request = self.request_next_page()?;
        let result = service.search(&request).await;
        Some(self.complete_fetch(result))
    }
}
