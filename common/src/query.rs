//! 問い合わせのライフサイクルと古い結果の破棄
//!
//! 確定フィルタが変わるたびに新しいチケットを発行する。
//! 結果はチケットが現行のときだけ状態に反映される。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{FineError, Result};
use crate::types::Fine;

/// 世代カウンタ
#[derive(Debug, Clone, Default)]
pub struct QueryGeneration {
    current: Arc<AtomicU64>,
}

/// 1回の問い合わせに紐づく世代番号
#[derive(Debug, Clone)]
pub struct QueryTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl QueryGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい問い合わせを開始する（以前のチケットはすべて古くなる）
    pub fn begin(&self) -> QueryTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        QueryTicket {
            generation,
            current: Arc::clone(&self.current),
        }
    }

    /// 後片付け：発行済みのチケットをすべて無効にする
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

impl QueryTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// 検索ボタン押下時の確定フィルタ
///
/// 入力中の値が現在の確定フィルタと同じなら `None`（再取得しない）。
pub fn commit_filter(committed: &str, draft: &str) -> Option<String> {
    if committed == draft {
        None
    } else {
        Some(draft.to_string())
    }
}

/// 問い合わせ結果の状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Loading,
    Loaded(Vec<Fine>),
    Failed(FineError),
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn fines(&self) -> Option<&[Fine]> {
        match self {
            QueryState::Loaded(fines) => Some(fines),
            _ => None,
        }
    }

    /// 結果を反映する。チケットが古ければ何もしない。
    ///
    /// # Returns
    /// 反映した場合は `true`
    pub fn settle(&mut self, ticket: &QueryTicket, outcome: Result<Vec<Fine>>) -> bool {
        if !ticket.is_current() {
            return false;
        }
        *self = match outcome {
            Ok(fines) => QueryState::Loaded(fines),
            Err(e) => QueryState::Failed(e.into()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Fine;

    #[test]
    fn test_new_ticket_is_current() {
        let generation = QueryGeneration::new();
        let ticket = generation.begin();
        assert!(ticket.is_current());
        assert_eq!(ticket.generation(), 1);
    }

    #[test]
    fn test_begin_supersedes_previous_ticket() {
        let generation = QueryGeneration::new();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_invalidate_on_cleanup() {
        let generation = QueryGeneration::new();
        let ticket = generation.begin();
        generation.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_commit_same_filter_is_skipped() {
        assert_eq!(commit_filter("", ""), None);
        assert_eq!(commit_filter("ES 222 KS", "ES 222 KS"), None);
    }

    #[test]
    fn test_commit_changed_filter() {
        assert_eq!(commit_filter("", "HF 987 RT"), Some("HF 987 RT".to_string()));
        assert_eq!(commit_filter("HF 987 RT", ""), Some(String::new()));
    }

    #[test]
    fn test_settle_stale_is_ignored() {
        let generation = QueryGeneration::new();
        let stale = generation.begin();
        let _live = generation.begin();

        let mut state = QueryState::Loading;
        let applied = state.settle(&stale, Ok(vec![Fine::new(9, "x", "y")]));

        assert!(!applied);
        assert!(state.is_loading());
    }

    #[test]
    fn test_settle_failure_is_recorded() {
        let generation = QueryGeneration::new();
        let ticket = generation.begin();

        let mut state = QueryState::Loading;
        assert!(state.settle(&ticket, Err(Error::Query("boom".into()))));
        assert_eq!(
            state,
            QueryState::Failed(FineError {
                message: "Query error: boom".into()
            })
        );
        assert!(state.fines().is_none());
    }
}
