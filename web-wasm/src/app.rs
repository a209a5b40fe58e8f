//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use nature_gallery_common::{
    GalleryConfig, GalleryView, LightboxSelection, PaginationController, SearchRequest,
    SearchService,
};
use crate::api::PexelsClient;
use crate::components::{
    gallery::Gallery,
    lightbox::Lightbox,
    load_more::LoadMoreButton,
    spinner::Spinner,
};

/// コントローラを更新して、発行すべきリクエストを取り出す
fn begin(
    controller: RwSignal<PaginationController>,
    step: impl FnOnce(&mut PaginationController) -> Option<SearchRequest>,
) -> Option<SearchRequest> {
    let mut request = None;
    controller.update(|c| request = step(c));
    request
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(PaginationController::new(GalleryConfig::default()));
    let (selection, set_selection) = signal(LightboxSelection::default());

    let client = PexelsClient::from_build_env();
    if !client.has_api_key() {
        tracing::warn!("PEXELS_API_KEY was not set at build time; every fetch will fail");
    }

    // 検索を実行して結果をコントローラへ戻す
    let run_fetch = move |request: SearchRequest| {
        let client = client.clone();
        spawn_local(async move {
            let result = client.search(&request).await;
            controller.update(|c| {
                c.complete_fetch(result);
            });
        });
    };

    // 初回ロード
    if let Some(request) = begin(controller, PaginationController::start) {
        run_fetch(request);
    }

    let on_load_more = move |_: ()| {
        if let Some(request) = begin(controller, PaginationController::request_next_page) {
            run_fetch(request);
        }
    };

    let on_activate = move |index: usize| {
        set_selection.update(|s| {
            let slide = s.activate(index);
            tracing::debug!(index, slide, "lightbox opened");
        });
    };

    let state = Memo::new(move |_| controller.with(|c| GalleryView::from(c)));
    let sources = Signal::derive(move || controller.with(|c| c.sources().to_vec()));
    let viewer = Signal::derive(move || {
        let count = controller.with(|c| c.sources().len());
        selection.get().request(count)
    });

    view! {
        <div class="container my-5">
            <div class="gallery-column">
                <Show when=move || state.get().show_grid>
                    <Gallery controller=controller on_activate=on_activate />
                </Show>

                <Show when=move || state.get().show_spinner>
                    <Spinner />
                </Show>

                <LoadMoreButton state=state on_load_more=on_load_more />
            </div>

            <Lightbox request=viewer sources=sources />
        </div>
    }
}
