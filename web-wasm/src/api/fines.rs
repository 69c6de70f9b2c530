//! 罰金データの取得（擬似ネットワーク）

use std::time::Duration;

use fines_common::{Fine, FineRepository, Result};
use gloo::timers::future::TimeoutFuture;

/// タイマーで遅延させてからリポジトリに問い合わせる
pub async fn fetch_fines(repository: &FineRepository, plate: &str, delay: Duration) -> Result<Vec<Fine>> {
    repository
        .query(plate, delay, |d| {
            let millis = u32::try_from(d.as_millis()).unwrap_or(u32::MAX);
            TimeoutFuture::new(millis)
        })
        .await
}
