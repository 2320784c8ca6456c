//! ターミナル向けテーブル整形
//!
//! list / browse コマンドの表示に使う。HTML描画と同じ入力
//! （絞り込み済みリスト＋集計値）をプレーンテキストに整形する。

use crate::record::ApplicationRecord;
use crate::render::StatusSummary;

const HEADERS: [&str; 6] = ["Company", "Industry", "Role", "Date", "Status", "Notes"];

fn column_values(record: &ApplicationRecord) -> [&str; 6] {
    let status = if record.status.is_empty() {
        "Unknown"
    } else {
        record.status.as_str()
    };
    [
        record.company.as_str(),
        record.industry.as_str(),
        record.role.as_str(),
        record.date.as_str(),
        status,
        record.notes.as_str(),
    ]
}

/// 記録リストをテキストテーブルに整形する
pub fn format_table(records: &[ApplicationRecord]) -> String {
    if records.is_empty() {
        return "No matching applications.".to_string();
    }

    // 各列の幅はヘッダと値の最大長
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for record in records {
        for (i, value) in column_values(record).iter().enumerate() {
            widths[i] = widths[i].max(value.chars().count());
        }
    }

    let format_line = |values: &[&str; 6]| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format_line(&HEADERS));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for record in records {
        lines.push(format_line(&column_values(record)));
    }

    lines.join("\n")
}

/// 集計値を1行に整形する
pub fn format_summary(summary: &StatusSummary) -> String {
    format!(
        "Total: {}  Applied: {}  Interview: {}  Offer: {}",
        summary.total, summary.applied, summary.interview, summary.offer
    )
}
