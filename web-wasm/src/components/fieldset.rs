//! 開閉できる詳細パネル（初期状態は開）

use leptos::prelude::*;

#[component]
pub fn Fieldset(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let (open, set_open) = signal(true);

    view! {
        <div class="fieldset" on:click=move |_| set_open.update(|open| *open = !*open)>
            <div class="fieldset-title">{title}</div>
            <Show when=move || open.get()>
                {children()}
            </Show>
        </div>
    }
}
