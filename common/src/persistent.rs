//! キー・バリューストアに永続化される状態
//!
//! 起動時にストアから読み込み（欠落・破損時は初期値）、
//! 変更のたびにJSONで書き戻す。他コンテキストの変更は購読で取り込む。

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::store::{KeyValueStore, Subscription};

/// 保存値を読み込む（キーなしは `Ok(None)`）
pub fn read_value<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.read(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// 読み込みに失敗した場合は黙って初期値を返す
pub fn load_or<T, S>(store: &S, key: &str, initial: T) -> T
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    read_value(store, key).ok().flatten().unwrap_or(initial)
}

pub fn write_value<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw)
}

/// 他コンテキストからの変更通知をデコードする
///
/// 削除（None）は `Ok(None)`。不正なJSONはエラーとして返す。
pub fn decode_change<T: DeserializeOwned>(raw: Option<&str>) -> Result<Option<T>> {
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        None => Ok(None),
    }
}

/// 非リアクティブな永続状態
///
/// 画面を持たない環境（テストなど）向け。Web側は同じ関数群をシグナルに接続する。
pub struct PersistentState<T, S: KeyValueStore> {
    store: S,
    key: String,
    value: Rc<RefCell<T>>,
    _subscription: Subscription,
}

impl<T, S> PersistentState<T, S>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
    S: KeyValueStore,
{
    pub fn new(store: S, key: impl Into<String>, initial: T) -> Result<Self> {
        let key = key.into();
        let value = Rc::new(RefCell::new(load_or(&store, &key, initial.clone())));

        let target = Rc::clone(&value);
        let subscription = store.subscribe(
            &key,
            Box::new(move |raw: Option<String>| match decode_change::<T>(raw.as_deref()) {
                Ok(Some(next)) => *target.borrow_mut() = next,
                Ok(None) => *target.borrow_mut() = initial.clone(),
                // 不正な値は無視して現在値を保つ
                Err(_) => {}
            }),
        );

        let state = Self {
            store,
            key,
            value,
            _subscription: subscription,
        };
        // 初期値もストアに反映しておく
        state.persist()?;
        Ok(state)
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// 最新の値に対する関数的更新
    pub fn update(&self, f: impl FnOnce(&mut T)) -> Result<()> {
        f(&mut self.value.borrow_mut());
        self.persist()
    }

    pub fn set(&self, value: T) -> Result<()> {
        *self.value.borrow_mut() = value;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let value = self.value.borrow().clone();
        write_value(&self.store, &self.key, &value)
    }
}
