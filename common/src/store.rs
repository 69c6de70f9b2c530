//! キー・バリューストアの抽象
//!
//! ブラウザの localStorage を隠れたグローバルとして扱わず、
//! 注入可能なトレイトとして定義する。テストでは `MemoryStore` を使う。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

/// 変更通知のコールバック（新しい値、削除時は None）
pub type ChangeCallback = Box<dyn Fn(Option<String>)>;

/// 永続キー・バリューストア
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// 他のコンテキスト（別タブなど）による `key` の変更を購読する
    fn subscribe(&self, key: &str, on_change: ChangeCallback) -> Subscription;
}

/// 購読ハンドル。dropすると購読を解除する。
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn noop() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

struct Listener {
    id: u64,
    context: u64,
    key: String,
    callback: Rc<dyn Fn(Option<String>)>,
}

#[derive(Default)]
struct Shared {
    values: HashMap<String, String>,
    listeners: Vec<Listener>,
    next_listener: u64,
    next_context: u64,
}

/// インメモリのストア
///
/// `open_context` で同じ領域を共有する別コンテキストを作れる。
/// 書き込みは、書いたコンテキスト以外の購読者にだけ通知される（ブラウザの storage イベントと同じ）。
#[derive(Clone)]
pub struct MemoryStore {
    shared: Rc<RefCell<Shared>>,
    context: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared::default())),
            context: 0,
        }
    }

    /// 同じ領域を共有する別コンテキスト
    pub fn open_context(&self) -> Self {
        let mut shared = self.shared.borrow_mut();
        shared.next_context += 1;
        Self {
            shared: Rc::clone(&self.shared),
            context: shared.next_context,
        }
    }

    pub fn remove(&self, key: &str) {
        let removed = self.shared.borrow_mut().values.remove(key).is_some();
        if removed {
            self.notify(key, None);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.shared.borrow().listeners.len()
    }

    fn notify(&self, key: &str, value: Option<String>) {
        // コールバック内から再入できるよう借用を先に手放す
        let callbacks: Vec<_> = self
            .shared
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.key == key && l.context != self.context)
            .map(|l| Rc::clone(&l.callback))
            .collect();
        for callback in callbacks {
            callback(value.clone());
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.shared.borrow().values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let previous = self
            .shared
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        if previous.as_deref() != Some(value) {
            self.notify(key, Some(value.to_string()));
        }
        Ok(())
    }

    fn subscribe(&self, key: &str, on_change: ChangeCallback) -> Subscription {
        let id = {
            let mut shared = self.shared.borrow_mut();
            shared.next_listener += 1;
            let id = shared.next_listener;
            shared.listeners.push(Listener {
                id,
                context: self.context,
                key: key.to_string(),
                callback: Rc::from(on_change),
            });
            id
        };

        let shared = Rc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.borrow_mut().listeners.retain(|l| l.id != id);
            }
        })
    }
}
