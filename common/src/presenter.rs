//! ギャラリー表示用のビューモデル
//!
//! 描画そのもの（Leptos / ターミナル）は各フロントエンドが行う。
//! ここでは表示条件と画像属性の文字列だけを決める。

use crate::pagination::PaginationController;
use crate::types::SearchResult;

/// `<img sizes>` に渡すブレークポイント
pub const SIZES: &str = "(max-width: 600px) 320px, (max-width: 1000px) 480px, 800px";

pub const LOAD_MORE_LABEL: &str = "Load more images";
pub const LOADING_LABEL: &str = "Loading images...";

/// `<img srcset>` を組み立てる
pub fn srcset(result: &SearchResult) -> String {
    format!(
        "{} 320w, {} 480w, {} 800w, {} 1200w",
        result.src.tiny, result.src.small, result.src.medium, result.src.large
    )
}

/// 代替テキスト（「クエリ + id」、例: `Nature 1234`）。写真側の alt は使わない
pub fn alt_text(result: &SearchResult, query: &str) -> String {
    let mut chars = query.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} {}", label, result.id).trim_start().to_string()
}

/// ボタンの文言
pub fn load_more_label(loading: bool) -> &'static str {
    if loading {
        LOADING_LABEL
    } else {
        LOAD_MORE_LABEL
    }
}

/// 現在の状態から決まる表示内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryView {
    /// 写真が1枚以上あればグリッドを出す
    pub show_grid: bool,
    /// ロード中はスピナーを出す（グリッドと同時に出ることもある）
    pub show_spinner: bool,
    pub load_more_enabled: bool,
    pub load_more_label: &'static str,
}

impl From<&PaginationController> for GalleryView {
    fn from(controller: &PaginationController) -> Self {
        let loading = controller.is_loading();
        Self {
            show_grid: !controller.is_empty(),
            show_spinner: loading,
            load_more_enabled: !loading,
            load_more_label: load_more_label(loading),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures;

    #[test]
    fn test_srcset() {
        let photo = fixtures::photo(42);
        assert_eq!(
            srcset(&photo),
            "https://images.pexels.com/42/tiny.jpg 320w, \
             https://images.pexels.com/42/small.jpg 480w, \
             https://images.pexels.com/42/medium.jpg 800w, \
             https://images.pexels.com/42/large.jpg 1200w"
        );
    }

    #[test]
    fn test_alt_text_fallback() {
        let photo = fixtures::photo(42);
        assert_eq!(alt_text(&photo, "nature"), "Nature 42");
    }

    #[test]
    fn test_alt_text_ignores_photo_alt() {
        let mut photo = fixtures::photo(42);
        photo.alt = "Green hills at dawn".to_string();
        assert_eq!(alt_text(&photo, "nature"), "Nature 42");
    }

    #[test]
    fn test_view_before_first_page() {
        let mut controller = PaginationController::default();
        controller.start();
        let view = GalleryView::from(&controller);
        assert!(!view.show_grid);
        assert!(view.show_spinner);
        assert!(!view.load_more_enabled);
        assert_eq!(view.load_more_label, "Loading images...");
    }

    #[test]
    fn test_view_grid_and_spinner_together() {
        let mut controller = PaginationController::default();
        controller.start();
        controller.complete_fetch(Ok(fixtures::page(1, 1, 15)));
        controller.request_next_page();

        let view = GalleryView::from(&controller);
        assert!(view.show_grid);
        assert!(view.show_spinner);
    }

    #[test]
    fn test_view_idle() {
        let mut controller = PaginationController::default();
        controller.start();
        controller.complete_fetch(Ok(fixtures::page(1, 1, 15)));

        let view = GalleryView::from(&controller);
        assert!(view.show_grid);
        assert!(!view.show_spinner);
        assert!(view.load_more_enabled);
        assert_eq!(view.load_more_label, "Load more images");
    }
}
