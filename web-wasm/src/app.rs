//! メインアプリケーションコンポーネント

use fines_common::{commit_filter, AppConfig, FineId, FineRepository, QueryGeneration, QueryState, Selection};
use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::fines::fetch_fines;
use crate::components::{filter_bar::FilterBar, fine_table::FineTable, header::Header};
use crate::hooks::{use_persistent_state, use_tick_counter};
use crate::storage::BrowserStore;

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 検索フィルタ（入力中 / 確定済み）
    let (draft, set_draft) = signal(String::new());
    let (committed, set_committed) = signal(String::new());

    let (query_state, set_query_state) = signal(QueryState::Loading);
    let (selection, set_selection) =
        use_persistent_state(BrowserStore, &config.storage_key, Selection::new());
    let ticks = use_tick_counter(config.counter_interval());

    // 確定フィルタが変わるたびに再取得。古い世代の結果は捨てる。
    let generation = QueryGeneration::new();
    let repository = FineRepository::fixture();
    let delay = config.fetch_delay();
    Effect::new({
        let generation = generation.clone();
        move |_| {
            let plate = committed.get();
            let ticket = generation.begin();
            set_query_state.set(QueryState::Loading);

            let repository = repository.clone();
            spawn_local(async move {
                let outcome = fetch_fines(&repository, &plate, delay).await;
                if !ticket.is_current() {
                    console::log!(format!("古い結果を破棄しました (世代 {})", ticket.generation()));
                    return;
                }
                if let Err(e) = &outcome {
                    console::error!(format!("取得に失敗しました: {}", e));
                }
                set_query_state.update(|state| {
                    state.settle(&ticket, outcome);
                });
            });
        }
    });
    on_cleanup(move || generation.invalidate());

    // 確定フィルタが変わらない場合は通知しない（再取得を避ける）
    let on_search = move |_: ()| {
        let next = committed.with_untracked(|current| draft.with_untracked(|d| commit_filter(current, d)));
        if let Some(next) = next {
            set_committed.set(next);
        }
    };

    let on_toggle = move |id: FineId| set_selection.update(|s| s.toggle(id));

    let on_toggle_all = move |_: ()| {
        query_state.with_untracked(|state| {
            if let Some(fines) = state.fines() {
                set_selection.update(|s| s.toggle_all(fines));
            }
        });
    };

    view! {
        <div class="container">
            <Header ticks=ticks />

            {move || match query_state.get() {
                QueryState::Loading => view! { <p class="loading">"Loading…"</p> }.into_any(),
                QueryState::Failed(e) => view! {
                    <div class="error">
                        <p>{format!("Errore: {}", e)}</p>
                        <FilterBar
                            draft=draft
                            set_draft=set_draft
                            committed=committed
                            on_search=on_search
                        />
                    </div>
                }.into_any(),
                QueryState::Loaded(fines) => view! {
                    <FineTable
                        fines=fines
                        selection=selection
                        draft=draft
                        set_draft=set_draft
                        committed=committed
                        on_toggle_all=on_toggle_all
                        on_toggle=on_toggle
                        on_search=on_search
                    />
                }.into_any(),
            }}
        </div>
    }
}
