//! ストアに永続化されるシグナル

use fines_common::{decode_change, read_value, write_value, KeyValueStore};
use gloo::console;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `key` に保存された値で初期化したシグナルを返す
///
/// - 読込失敗・値なしは `initial` で開始する
/// - 値が変わるたびにストアへ書き戻す
/// - 他コンテキストでの変更をシグナルに取り込む（後勝ち）
///
/// 購読は現在の所有者に紐づき、所有者の破棄とともに解除される。
pub fn use_persistent_state<T, S>(store: S, key: &str, initial: T) -> (ReadSignal<T>, WriteSignal<T>)
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    S: KeyValueStore + Clone + 'static,
{
    let key = key.to_string();

    let loaded = match read_value::<T, _>(&store, &key) {
        Ok(Some(value)) => value,
        Ok(None) => initial.clone(),
        Err(e) => {
            console::warn!(format!("保存値を読み込めません ({}): {}", key, e));
            initial.clone()
        }
    };
    let (value, set_value) = signal(loaded);

    Effect::new({
        let store = store.clone();
        let key = key.clone();
        move |_| {
            value.with(|v| {
                if let Err(e) = write_value(&store, &key, v) {
                    console::error!(format!("保存に失敗しました ({}): {}", key, e));
                }
            });
        }
    });

    let subscription = store.subscribe(
        &key,
        Box::new({
            let key = key.clone();
            move |raw: Option<String>| match decode_change::<T>(raw.as_deref()) {
                Ok(Some(next)) => set_value.set(next),
                Ok(None) => set_value.set(initial.clone()),
                Err(e) => {
                    console::warn!(format!("他タブの値を無視します ({}): {}", key, e));
                }
            }
        }),
    );
    StoredValue::new_local(subscription);

    (value, set_value)
}
