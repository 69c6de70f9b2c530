//! Fines Common Library
//!
//! 罰金一覧アプリのドメイン型とロジック（Web(WASM)とホストのテストで共有）

pub mod config;
pub mod error;
pub mod persistent;
pub mod query;
pub mod repository;
pub mod selection;
pub mod store;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, FineError, Result};
pub use persistent::{decode_change, load_or, read_value, write_value, PersistentState};
pub use query::{commit_filter, QueryGeneration, QueryState, QueryTicket};
pub use repository::FineRepository;
pub use selection::{row_glyph, HeaderMark, Selection};
pub use store::{ChangeCallback, KeyValueStore, MemoryStore, Subscription};
pub use types::{Fine, FineId};
