//! ギャラリー全体の動作テスト
//!
//! メモリ上の検索サービスで、初回ロード・もっと見る・失敗・ライトボックスを検証

use nature_gallery::browse::{build_export, collect_pages, open_slide};
use nature_gallery_common::{
    Error, FetchOutcome, GalleryView, LightboxSelection, PaginationController, PhotoSrc,
    SearchPage, SearchRequest, SearchResult, SearchService,
};
use std::cell::RefCell;

fn create_test_photo(id: u64) -> SearchResult {
    SearchResult {
        id,
        width: 1920,
        height: 1280,
        url: format!("https://www.pexels.com/photo/{}/", id),
        photographer: "Test Photographer".to_string(),
        photographer_url: String::new(),
        avg_color: None,
        alt: String::new(),
        src: PhotoSrc {
            original: String::new(),
            large2x: String::new(),
            large: format!("https://images.pexels.com/{}/large.jpg", id),
            medium: format!("https://images.pexels.com/{}/medium.jpg", id),
            small: format!("https://images.pexels.com/{}/small.jpg", id),
            portrait: String::new(),
            landscape: String::new(),
            tiny: format!("https://images.pexels.com/{}/tiny.jpg", id),
        },
    }
}

/// ページ番号から連番の写真を返すダブル
struct MockSearch {
    failing_pages: Vec<u32>,
    requests: RefCell<Vec<SearchRequest>>,
}

impl MockSearch {
    fn new() -> Self {
        Self {
            failing_pages: Vec::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(pages: &[u32]) -> Self {
        Self {
            failing_pages: pages.to_vec(),
            ..Self::new()
        }
    }

    fn requested_pages(&self) -> Vec<u32> {
        self.requests.borrow().iter().map(|r| r.page).collect()
    }
}

impl SearchService for MockSearch {
    async fn search(&self, request: &SearchRequest) -> nature_gallery_common::Result<SearchPage> {
        self.requests.borrow_mut().push(request.clone());
        if self.failing_pages.contains(&request.page) {
            return Err(Error::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        let first = (request.page as u64 - 1) * request.per_page as u64 + 1;
        Ok(SearchPage {
            page: request.page,
            per_page: request.per_page,
            photos: (first..first + request.per_page as u64)
                .map(create_test_photo)
                .collect(),
            ..Default::default()
        })
    }
}

/// 起動時: 1ページ目の15枚が入り、ボタンが有効になる
#[tokio::test]
async fn test_startup_loads_first_page() {
    let service = MockSearch::new();
    let mut controller = PaginationController::default();

    let outcomes = collect_pages(&service, &mut controller, 1, false).await;

    assert_eq!(outcomes, vec![FetchOutcome::Appended { page: 1, count: 15 }]);
    assert_eq!(controller.len(), 15);
    assert!(!controller.is_loading());

    let view = GalleryView::from(&controller);
    assert!(view.load_more_enabled);
    assert_eq!(view.load_more_label, "Load more images");

    let requests = service.requests.borrow();
    let request = &requests[0];
    assert_eq!(request.query, "nature");
    assert_eq!(request.per_page, 15);
}

/// もっと見る1回: 30枚、カーソルは2
#[tokio::test]
async fn test_load_more_once() {
    let service = MockSearch::new();
    let mut controller = PaginationController::default();

    collect_pages(&service, &mut controller, 2, false).await;

    assert_eq!(controller.len(), 30);
    assert_eq!(controller.page(), 2);
    assert_eq!(service.requested_pages(), vec![1, 2]);

    // 1ページ目の並びはそのまま、2ページ目が後ろに続く
    let ids: Vec<u64> = controller.results().iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<u64>>());
}

/// 2ページ目が失敗: 件数は15のまま、フラグは下りる
#[tokio::test]
async fn test_second_page_failure_is_contained() {
    let service = MockSearch::failing_on(&[2]);
    let mut controller = PaginationController::default();

    let outcomes = collect_pages(&service, &mut controller, 2, false).await;

    assert_eq!(controller.len(), 15);
    assert_eq!(controller.sources().len(), 15);
    assert!(!controller.is_loading());
    assert!(outcomes[1].is_failed());
    assert!(GalleryView::from(&controller).load_more_enabled);
}

/// 失敗の後も「もっと見る」は次のページへ進む
#[tokio::test]
async fn test_load_more_after_failure_moves_on() {
    let service = MockSearch::failing_on(&[2]);
    let mut controller = PaginationController::default();

    collect_pages(&service, &mut controller, 3, false).await;

    assert_eq!(service.requested_pages(), vec![1, 2, 3]);
    assert_eq!(controller.page(), 3);
    assert_eq!(controller.len(), 30);
}

/// 30枚中の7番目をクリック → スライド8、ソースは30件
#[tokio::test]
async fn test_activate_item_opens_matching_slide() {
    let service = MockSearch::new();
    let mut controller = PaginationController::default();
    collect_pages(&service, &mut controller, 2, false).await;

    let mut selection = LightboxSelection::default();
    let (slide, source) = open_slide(&controller, &mut selection, 7).expect("範囲内のはず");

    assert_eq!(selection.index, 7);
    assert_eq!(slide, 8);
    assert_eq!(source, "https://images.pexels.com/8/large.jpg");

    let request = selection.request(controller.sources().len());
    assert_eq!(request.slide, 8);
    assert_eq!(request.source_count, 30);
}

/// ロード中の「もっと見る」は無視される
#[test]
fn test_load_more_ignored_while_loading() {
    let mut controller = PaginationController::default();
    let first = controller.start().expect("初回ロード");
    assert_eq!(first.page, 1);

    assert!(controller.request_next_page().is_none());
    assert_eq!(controller.page(), 1);
    assert!(controller.is_loading());
}

/// エクスポートにはクエリ・ページ・写真・ソースが入る
#[tokio::test]
async fn test_export_contents() {
    let service = MockSearch::new();
    let mut controller = PaginationController::default();
    collect_pages(&service, &mut controller, 2, false).await;

    let json = serde_json::to_value(build_export(&controller)).expect("シリアライズ失敗");

    assert_eq!(json["query"], "nature");
    assert_eq!(json["page"], 2);
    assert_eq!(json["photos"].as_array().map(Vec::len), Some(30));
    assert_eq!(json["sources"][0], "https://images.pexels.com/1/large.jpg");
    assert!(json["exportedAt"].as_str().is_some());
}
