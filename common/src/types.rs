//! 違反（罰金）レコードの型定義

use serde::{Deserialize, Serialize};

/// 罰金ID
pub type FineId = u32;

/// 交通違反の罰金レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fine {
    pub id: FineId,
    pub reason: String,
    pub plate: String,
}

impl Fine {
    pub fn new(id: FineId, reason: impl Into<String>, plate: impl Into<String>) -> Self {
        Self {
            id,
            reason: reason.into(),
            plate: plate.into(),
        }
    }
}
