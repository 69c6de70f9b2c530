//! アプリケーション設定

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::persistent::read_value;
use crate::store::KeyValueStore;

/// 設定を保存するキー
pub const CONFIG_KEY: &str = "fines-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 選択状態を保存するキー
    pub storage_key: String,
    /// 擬似ネットワーク遅延（ミリ秒）
    pub fetch_delay_ms: u32,
    /// カウンタの更新間隔（ミリ秒）
    pub counter_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "selection".into(),
            fetch_delay_ms: 1000,
            counter_interval_ms: 2000,
        }
    }
}

impl AppConfig {
    /// ストアから読み込む。キーがなければ既定値。
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let config = read_value::<Self, _>(store, CONFIG_KEY)
            .map_err(|e| Error::Config(e.to_string()))?
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(Error::Config("storage_keyが空です".into()));
        }
        if self.counter_interval_ms == 0 {
            return Err(Error::Config("counter_interval_msは1以上が必要です".into()));
        }
        Ok(())
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms.into())
    }

    pub fn counter_interval(&self) -> Duration {
        Duration::from_millis(self.counter_interval_ms.into())
    }
}
