//! 行選択のロジック
//!
//! 描画とは独立した純粋関数として実装する。
//! 選択は疎なマップ（キーなし ≡ false）で、表示中の罰金だけを見て判定する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Fine, FineId};

pub const CHECKBOX_EMPTY: &str = "[ ]";
pub const CHECKBOX_INDETERMINATE: &str = "[-]";
pub const CHECKBOX_FULL: &str = "[x]";

/// 罰金ID → 選択状態
///
/// JSONでは `{"1":true,"2":false}` の形で保存される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<FineId, bool>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: FineId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: FineId, selected: bool) {
        self.0.insert(id, selected);
    }

    /// 指定IDだけを反転する
    pub fn toggle(&mut self, id: FineId) {
        let next = !self.is_selected(id);
        self.0.insert(id, next);
    }

    /// ヘッダーのチェックボックス操作
    ///
    /// 表示中が全選択なら選択全体（非表示のIDも含む）を空にする。
    /// それ以外は表示中のIDをすべて `true` にし、他のエントリは残す。
    pub fn toggle_all(&mut self, fines: &[Fine]) {
        if self.is_all_selected(fines) {
            self.0.clear();
        } else {
            for fine in fines {
                self.0.insert(fine.id, true);
            }
        }
    }

    /// 空リストに対しては真
    pub fn is_all_selected(&self, fines: &[Fine]) -> bool {
        fines.iter().all(|fine| self.is_selected(fine.id))
    }

    /// 空リストに対しては真
    pub fn is_none_selected(&self, fines: &[Fine]) -> bool {
        fines.iter().all(|fine| !self.is_selected(fine.id))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(FineId, bool)> for Selection {
    fn from_iter<I: IntoIterator<Item = (FineId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// ヘッダーチェックボックスの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMark {
    Full,
    Empty,
    Indeterminate,
}

impl HeaderMark {
    /// 全選択 → Full、未選択 → Empty、それ以外 → Indeterminate の優先順
    pub fn of(selection: &Selection, fines: &[Fine]) -> Self {
        if selection.is_all_selected(fines) {
            HeaderMark::Full
        } else if selection.is_none_selected(fines) {
            HeaderMark::Empty
        } else {
            HeaderMark::Indeterminate
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            HeaderMark::Full => CHECKBOX_FULL,
            HeaderMark::Empty => CHECKBOX_EMPTY,
            HeaderMark::Indeterminate => CHECKBOX_INDETERMINATE,
        }
    }
}

/// 行チェックボックスの表示
pub fn row_glyph(selected: bool) -> &'static str {
    if selected {
        CHECKBOX_FULL
    } else {
        CHECKBOX_EMPTY
    }
}
