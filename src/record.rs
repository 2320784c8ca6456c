//! 応募記録の型定義
//!
//! JSONソースの1要素 = 1応募。全フィールドは省略可能で、
//! 省略時は空文字列として扱う（バリデーションなし）。

use serde::{Deserialize, Serialize};

/// 集計対象のステータスラベル（大文字小文字を無視して完全一致で数える）
pub const TRACKED_STATUSES: [&str; 3] = ["Applied", "Interview", "Offer"];

/// 応募記録
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationRecord {
    /// 企業名
    pub company: String,

    /// 業界
    pub industry: String,

    /// 職種
    pub role: String,

    /// 応募日（ISO形式を想定するがパースはしない）
    pub date: String,

    /// ステータス（"Applied" / "Interview" / "Offer" / "Planned" など自由形式）
    pub status: String,

    /// メモ
    pub notes: String,

    /// 関連URL（空文字列はリンクなし）
    pub link: String,
}

impl ApplicationRecord {
    /// データソースが読めなかった場合に表示するフォールバック記録
    pub fn placeholder() -> Self {
        Self {
            company: "Example Company".to_string(),
            industry: "Cybersecurity / SOC".to_string(),
            role: "SOC Analyst Intern".to_string(),
            date: "2026-01-03".to_string(),
            status: "Planned".to_string(),
            notes: "Replace with your real entries in data/applications.json".to_string(),
            link: String::new(),
        }
    }
}
