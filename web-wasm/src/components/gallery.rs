//! 写真ギャラリーコンポーネント（メーソンリーグリッド）

use leptos::prelude::*;
use nature_gallery_common::{alt_text, srcset, PaginationController, SearchResult, SIZES};

#[component]
pub fn Gallery<F>(
    controller: RwSignal<PaginationController>,
    on_activate: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    let query = controller.with_untracked(|c| c.config().query.clone());

    // 同じ写真が別ページで返ることもあるので、キーは位置にする
    let items = move || {
        controller.with(|c| {
            c.results()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="masonry-container">
            <For
                each=items
                key=|(index, _)| *index
                children=move |(index, photo)| {
                    let on_activate = on_activate.clone();
                    let query = query.clone();
                    view! {
                        <GalleryItem
                            index=index
                            photo=photo
                            query=query
                            on_activate=on_activate
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn GalleryItem<F>(
    index: usize,
    photo: SearchResult,
    query: String,
    on_activate: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static + Send + Sync,
{
    let srcset = srcset(&photo);
    let alt = alt_text(&photo, &query);

    view! {
        <div class="masonry-item" on:click=move |_| on_activate(index)>
            <img
                src=photo.src.medium.clone()
                alt=alt
                class="d-block img-fluid rounded"
                srcset=srcset
                sizes=SIZES
            />
        </div>
    }
}
