//! 一定間隔で増えるカウンタ（表示専用）

use std::time::Duration;

use gloo::console;
use leptos::prelude::*;

pub fn use_tick_counter(interval: Duration) -> ReadSignal<u64> {
    let (count, set_count) = signal(0u64);

    match set_interval_with_handle(move || set_count.update(|c| *c += 1), interval) {
        Ok(handle) => {
            on_cleanup(move || handle.clear());
        }
        Err(e) => {
            console::error!("タイマーを開始できません", e);
        }
    }

    count
}
