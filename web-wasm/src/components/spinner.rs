//! ローディングスピナー

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="text-center p-3">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
        </div>
    }
}
