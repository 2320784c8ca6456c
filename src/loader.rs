//! データソースの読み込み
//!
//! JSON配列を1回だけ読み込む。読み込み・パースのどの失敗も
//! 区別せず、プレースホルダ記録1件へのフォールバックに集約する
//! （ユーザーへのエラー表示はしない）。リトライなし。

use crate::error::{JobtrackError, Result};
use crate::record::ApplicationRecord;
use std::path::PathBuf;

/// 既定の読み込み元（相対パス）
pub const DEFAULT_SOURCE: &str = "data/applications.json";

/// 読み込み元: ローカルファイルまたはURL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl std::str::FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("empty data source".to_string());
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DataSource::Url(s.to_string()))
        } else {
            Ok(DataSource::File(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// 記録リストを読み込む（フォールバック付き）
///
/// 成功時はソースのJSON配列をそのまま返す（順序保持、検証なし）。
/// 失敗時はプレースホルダ1件のリストを返す。
pub async fn load_records(source: &DataSource) -> Vec<ApplicationRecord> {
    match try_load(source).await {
        Ok(records) => records,
        Err(_) => vec![ApplicationRecord::placeholder()],
    }
}

async fn try_load(source: &DataSource) -> Result<Vec<ApplicationRecord>> {
    let body = match source {
        DataSource::File(path) => std::fs::read_to_string(path)?,
        DataSource::Url(url) => fetch_body(url).await?,
    };

    // 配列以外（オブジェクト等）はパース失敗としてフォールバック対象
    let records: Vec<ApplicationRecord> = serde_json::from_str(&body)?;
    Ok(records)
}

/// キャッシュを経由しない単発GET
async fn fetch_body(url: &str) -> Result<String> {
    let response = reqwest::Client::new()
        .get(url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|e| JobtrackError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(JobtrackError::Fetch(format!(
            "unexpected status {} from {}",
            response.status(),
            url
        )));
    }

    response
        .text()
        .await
        .map_err(|e| JobtrackError::Fetch(e.to_string()))
}
