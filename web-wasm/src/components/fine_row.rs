//! 罰金の1行

use fines_common::{row_glyph, Fine, FineId};
use leptos::prelude::*;

use crate::components::fieldset::Fieldset;

#[component]
pub fn FineRow<F>(fine: Fine, selected: Signal<bool>, on_toggle: F) -> impl IntoView
where
    F: Fn(FineId) + 'static + Clone,
{
    let Fine { id, reason, plate } = fine;

    view! {
        <tr class:selected=move || selected.get()>
            <td
                class="checkbox"
                on:click={
                    let on_toggle = on_toggle.clone();
                    move |_| on_toggle(id)
                }
            >
                {move || row_glyph(selected.get())}
            </td>
            <td>{id}</td>
            <td>{plate}</td>
            <td>
                <Fieldset title="Che hai fatto?">{reason.clone()}</Fieldset>
            </td>
        </tr>
    }
}
