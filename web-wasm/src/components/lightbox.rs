//! フルスクリーンのライトボックス
//!
//! `ViewerRequest::toggler` が変わるたびに `slide`（1始まり）の位置で開く。
//! マウント直後の初期値では開かない。

use leptos::ev;
use leptos::prelude::*;
use nature_gallery_common::{next_slide, prev_slide, ViewerRequest};

#[component]
pub fn Lightbox(request: Signal<ViewerRequest>, sources: Signal<Vec<String>>) -> impl IntoView {
    let open = RwSignal::new(false);
    let current = RwSignal::new(1usize);

    // ソース追加では開かない
    let toggler = Memo::new(move |_| request.with(|r| r.toggler));

    Effect::watch(
        move || toggler.get(),
        move |_, _, _| {
            current.set(request.get_untracked().start_slide());
            open.set(true);
        },
        false,
    );

    let go_next = move || {
        let len = sources.with_untracked(Vec::len);
        current.update(|c| *c = next_slide(*c, len));
    };
    let go_prev = move || {
        let len = sources.with_untracked(Vec::len);
        current.update(|c| *c = prev_slide(*c, len));
    };
    let close = move || open.set(false);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => close(),
            "ArrowRight" => go_next(),
            "ArrowLeft" => go_prev(),
            _ => {}
        }
    });
    on_cleanup(move || keydown.remove());

    let current_src = move || {
        let index = current.get().saturating_sub(1);
        sources.with(|s| s.get(index).cloned()).unwrap_or_default()
    };
    let counter = move || format!("{} / {}", current.get(), sources.with(Vec::len));

    view! {
        <Show when=move || open.get()>
            <div class="lightbox" role="dialog" aria-modal="true">
                <div class="lightbox-toolbar">
                    <span class="lightbox-counter">{counter}</span>
                    <button
                        class="lightbox-close"
                        aria-label="Close"
                        on:click=move |_| close()
                    >
                        "×"
                    </button>
                </div>
                <button
                    class="lightbox-nav lightbox-prev"
                    aria-label="Previous slide"
                    on:click=move |_| go_prev()
                >
                    "‹"
                </button>
                <img class="lightbox-image" src=current_src />
                <button
                    class="lightbox-nav lightbox-next"
                    aria-label="Next slide"
                    on:click=move |_| go_next()
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
