//! ナンバープレート検索欄
//!
//! 入力中の値（draft）はボタンを押すまで確定フィルタに反映しない。

use leptos::prelude::*;

#[component]
pub fn FilterBar<F>(
    draft: ReadSignal<String>,
    set_draft: WriteSignal<String>,
    committed: ReadSignal<String>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="filter-bar">
            <input
                type="text"
                placeholder="Cerca per targa"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    set_draft.set(event_target_value(&ev));
                }
            />
            <button
                class="btn btn-primary"
                on:click={
                    let on_search = on_search.clone();
                    move |_| on_search(())
                }
            >
                {move || format!("Cerca ({})", committed.get())}
            </button>
        </div>
    }
}
