//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(ticks: ReadSignal<u64>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Multe"</h1>
            <span class="ticks">{move || ticks.get()}</span>
        </header>
    }
}
