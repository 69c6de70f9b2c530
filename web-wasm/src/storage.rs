//! localStorage をバックエンドにしたキー・バリューストア
//!
//! 他タブでの変更はブラウザの `storage` イベントで受け取る。

use fines_common::{ChangeCallback, Error, KeyValueStore, Result, Subscription};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn local_storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| Error::Storage("window not available".into()))?;
        window
            .local_storage()
            .map_err(|e| Error::Storage(format!("{:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage not available".into()))
    }
}

impl KeyValueStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("読込失敗: {:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("保存失敗: {:?}", e)))
    }

    fn subscribe(&self, key: &str, on_change: ChangeCallback) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::noop();
        };

        let key = key.to_string();
        let listener = EventListener::new(&window, "storage", move |event| {
            let Some(event) = event.dyn_ref::<StorageEvent>() else {
                return;
            };
            if event.key().as_deref() == Some(key.as_str()) {
                on_change(event.new_value());
            }
        });

        Subscription::new(move || drop(listener))
    }
}
