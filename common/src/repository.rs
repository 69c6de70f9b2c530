//! 罰金データのリポジトリ（インメモリ・フィクスチャ）
//!
//! ネットワークは存在しない。`query` は擬似的な遅延の後に
//! フィクスチャをナンバープレートで絞り込んで返す。

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::types::Fine;

/// 既定の擬似ネットワーク遅延
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(1000);

/// 罰金リポジトリ
#[derive(Debug, Clone)]
pub struct FineRepository {
    fines: Arc<[Fine]>,
}

impl Default for FineRepository {
    fn default() -> Self {
        Self::fixture()
    }
}

impl FineRepository {
    pub fn new(fines: Vec<Fine>) -> Self {
        Self {
            fines: fines.into(),
        }
    }

    /// 固定のフィクスチャ（3件）
    pub fn fixture() -> Self {
        Self::new(vec![
            Fine::new(1, "Eccesso di velocità", "ES 222 KS"),
            Fine::new(2, "Sosta vietata", "ES 222 KS"),
            Fine::new(3, "Attraversamento ZTL", "HF 987 RT"),
        ])
    }

    pub fn all(&self) -> &[Fine] {
        &self.fines
    }

    /// 同期的な絞り込み
    ///
    /// 空文字列なら全件。それ以外は大文字小文字を区別する完全一致。
    /// いずれもフィクスチャの順序を保つ。
    pub fn filter(&self, plate: &str) -> Vec<Fine> {
        if plate.is_empty() {
            return self.fines.to_vec();
        }
        self.fines
            .iter()
            .filter(|fine| fine.plate == plate)
            .cloned()
            .collect()
    }

    /// 擬似遅延つきの問い合わせ
    ///
    /// # Arguments
    /// * `plate` - 絞り込むナンバープレート（空文字列で全件）
    /// * `delay` - 擬似ネットワーク遅延
    /// * `sleep` - 遅延を実行する関数（ブラウザではタイマー、テストでは即時）
    pub async fn query<S, F>(&self, plate: &str, delay: Duration, sleep: S) -> Result<Vec<Fine>>
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        sleep(delay).await;
        Ok(self.filter(plate))
    }
}
