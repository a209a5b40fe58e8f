//! 「もっと見る」ボタン

use leptos::prelude::*;
use nature_gallery_common::GalleryView;

/// 常に表示。ロード中は無効化して文言を切り替える
#[component]
pub fn LoadMoreButton<F>(
    state: Memo<GalleryView>,
    on_load_more: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="text-center">
            <button
                class="btn btn-primary btn-lg mt-4 py-3 px-5"
                disabled=move || !state.get().load_more_enabled
                on:click={
                    let on_load_more = on_load_more.clone();
                    move |_| on_load_more(())
                }
            >
                {move || state.get().load_more_label}
            </button>
        </div>
    }
}
