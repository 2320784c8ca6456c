use crate::error::{JobtrackError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ユーザー設定
///
/// CLI引数を省略した場合の既定値を保持する。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 既定のデータソース（ファイルパスまたはURL）
    pub source: String,
    /// 既定のHTML出力先
    pub output: String,
    /// 既定のページタイトル
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: crate::loader::DEFAULT_SOURCE.to_string(),
            output: "index.html".to_string(),
            title: "Job Applications".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| JobtrackError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("jobtrack").join("config.json"))
    }
}
