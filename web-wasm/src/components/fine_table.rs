//! 罰金一覧テーブル

use fines_common::{Fine, FineId, HeaderMark, Selection};
use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::fine_row::FineRow;

#[component]
pub fn FineTable<FA, FT, FS>(
    fines: Vec<Fine>,
    selection: ReadSignal<Selection>,
    draft: ReadSignal<String>,
    set_draft: WriteSignal<String>,
    committed: ReadSignal<String>,
    on_toggle_all: FA,
    on_toggle: FT,
    on_search: FS,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FT: Fn(FineId) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    let header_mark = {
        let fines = fines.clone();
        move || selection.with(|s| HeaderMark::of(s, &fines).glyph())
    };

    let rows = fines
        .into_iter()
        .map(|fine| {
            let id = fine.id;
            let selected = Signal::derive(move || selection.with(|s| s.is_selected(id)));
            view! { <FineRow fine=fine selected=selected on_toggle={on_toggle.clone()} /> }
        })
        .collect_view();

    view! {
        <table class="fine-table">
            <thead>
                <tr>
                    <th
                        class="checkbox"
                        on:click={
                            let on_toggle_all = on_toggle_all.clone();
                            move |_| on_toggle_all(())
                        }
                    >
                        {header_mark}
                    </th>
                    <th>"ID"</th>
                    <th>"Targa"</th>
                    <th>"Ragione"</th>
                </tr>
                <tr>
                    <th colspan="4">
                        <FilterBar
                            draft=draft
                            set_draft=set_draft
                            committed=committed
                            on_search=on_search
                        />
                    </th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
