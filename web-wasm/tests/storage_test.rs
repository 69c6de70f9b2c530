//! ブラウザの localStorage を使ったストアのテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行する

use std::cell::RefCell;
use std::rc::Rc;

use fines_common::{load_or, write_value, AppConfig, KeyValueStore, Selection};
use fines_web::storage::BrowserStore;
use wasm_bindgen_test::*;
use web_sys::{StorageEvent, StorageEventInit};

/// 他タブからの変更を模した storage イベントを発火する
fn dispatch_storage_event(key: &str, new_value: Option<&str>) {
    let init = StorageEventInit::new();
    init.set_key(Some(key));
    init.set_new_value(new_value);
    let event = StorageEvent::new_with_event_init_dict("storage", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

wasm_bindgen_test_configure!(run_in_browser);

/// 書き込んだ値をそのまま読める
#[wasm_bindgen_test]
fn test_write_then_read() {
    let store = BrowserStore;
    store.write("test-roundtrip", "{\"1\":true}").unwrap();
    assert_eq!(
        store.read("test-roundtrip").unwrap().as_deref(),
        Some("{\"1\":true}")
    );
}

/// 存在しないキーは None
#[wasm_bindgen_test]
fn test_missing_key() {
    let store = BrowserStore;
    assert_eq!(store.read("test-never-written").unwrap(), None);
}

/// 選択状態の保存・再読込
#[wasm_bindgen_test]
fn test_selection_roundtrip() {
    let store = BrowserStore;
    let selection: Selection = [(1, false), (2, true)].into_iter().collect();
    write_value(&store, "test-selection", &selection).unwrap();

    let loaded = load_or(&store, "test-selection", Selection::new());
    assert_eq!(loaded, selection);
}

/// 壊れた値は初期値に戻る
#[wasm_bindgen_test]
fn test_malformed_selection_falls_back() {
    let store = BrowserStore;
    store.write("test-malformed", "not json").unwrap();
    let loaded = load_or(&store, "test-malformed", Selection::new());
    assert!(loaded.is_empty());
}

/// 設定がなければ既定値
#[wasm_bindgen_test]
fn test_config_defaults() {
    let config = AppConfig::load(&BrowserStore).unwrap();
    assert_eq!(config.storage_key, "selection");
}

/// 購読中のキーの変更だけが新しい値とともに届く
#[wasm_bindgen_test]
fn test_subscribe_filters_by_key() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = BrowserStore.subscribe(
        "test-subscribe",
        Box::new(move |v: Option<String>| sink.borrow_mut().push(v)),
    );

    dispatch_storage_event("test-subscribe", Some("{\"2\":true}"));
    dispatch_storage_event("other-key", Some("{}"));
    dispatch_storage_event("test-subscribe", None);

    assert_eq!(
        *seen.borrow(),
        vec![Some("{\"2\":true}".to_string()), None]
    );

    drop(subscription);
    dispatch_storage_event("test-subscribe", Some("{}"));
    assert_eq!(seen.borrow().len(), 2);
}
