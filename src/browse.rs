//! ターミナル版ギャラリー
//!
//! Web版と同じ PaginationController を使い、初回ロード → 「もっと見る」を
//! 指定ページ数ぶん繰り返す。ロード中はスピナーを出す。

use crate::error::{GalleryError, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use nature_gallery_common::{
    load_more_label, FetchOutcome, LightboxSelection, PaginationController, SearchRequest,
    SearchResult, SearchService,
};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

/// JSON出力の形式
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryExport<'a> {
    pub exported_at: String,
    pub query: &'a str,
    pub page: u32,
    pub photos: &'a [SearchResult],
    pub sources: &'a [String],
}

/// 1ページ分を取得してコントローラへ反映
async fn run_fetch<S: SearchService>(
    service: &S,
    controller: &mut PaginationController,
    request: SearchRequest,
    show_progress: bool,
) -> FetchOutcome {
    let spinner = show_progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("{} (page {})", load_more_label(true), request.page));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = service.search(&request).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    controller.complete_fetch(result)
}

/// 初回ロード＋（pages - 1）回の「もっと見る」
///
/// 失敗したページがあっても続行する（次の「もっと見る」はそのまま次ページへ進む）。
pub async fn collect_pages<S: SearchService>(
    service: &S,
    controller: &mut PaginationController,
    pages: u32,
    show_progress: bool,
) -> Vec<FetchOutcome> {
    let mut outcomes = Vec::new();

    if let Some(request) = controller.start() {
        outcomes.push(run_fetch(service, controller, request, show_progress).await);
    }

    for _ in 1..pages.max(1) {
        let Some(request) = controller.request_next_page() else {
            break;
        };
        outcomes.push(run_fetch(service, controller, request, show_progress).await);
    }

    outcomes
}

/// 一覧表示用の1行
pub fn format_line(index: usize, photo: &SearchResult) -> String {
    let photographer = if photo.photographer.is_empty() {
        "-"
    } else {
        photo.photographer.as_str()
    };
    format!(
        "{:>4}  #{:<10} {:<24} {}",
        index, photo.id, photographer, photo.src.medium
    )
}

/// ライトボックスで写真を開く。スライド番号と large URL を返す
pub fn open_slide<'a>(
    controller: &'a PaginationController,
    selection: &mut LightboxSelection,
    index: usize,
) -> Result<(usize, &'a str)> {
    let len = controller.len();
    let source = controller
        .sources()
        .get(index)
        .ok_or(GalleryError::InvalidIndex { index, len })?;
    let slide = selection.activate(index);
    Ok((slide, source.as_str()))
}

pub fn build_export(controller: &PaginationController) -> GalleryExport<'_> {
    GalleryExport {
        exported_at: Utc::now().to_rfc3339(),
        query: &controller.config().query,
        page: controller.page(),
        photos: controller.results(),
        sources: controller.sources(),
    }
}

pub fn write_export(path: &Path, controller: &PaginationController) -> Result<()> {
    let json = serde_json::to_string_pretty(&build_export(controller))?;
    std::fs::write(path, json)?;
    Ok(())
}
