//! テーブル描画（純粋関数）
//!
//! 絞り込み済みリストからtbodyのHTML断片と集計値を生成する。
//! 表示面への書き込みは行わない（page / table モジュールが担当）。

use crate::record::{ApplicationRecord, TRACKED_STATUSES};
use crate::text::{escape_html, normalize};

/// 集計値
///
/// 集計対象は描画に渡されたリストそのもの（全件ではない）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
}

/// 描画結果: tbody断片と集計値
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub table_body: String,
    pub summary: StatusSummary,
}

/// ステータスバッジ（未設定は "Unknown" と表示）
fn status_badge(status: &str) -> String {
    let label = if status.is_empty() { "Unknown" } else { status };
    let safe = escape_html(label);
    format!(r#"<span class="badge" aria-label="Status: {safe}">{safe}</span>"#)
}

/// メモ欄: リンクがあればメモをラベルにしたハイパーリンク
fn notes_cell(record: &ApplicationRecord) -> String {
    if record.link.is_empty() {
        escape_html(&record.notes)
    } else {
        let href = escape_html(&record.link);
        let label = if record.notes.is_empty() {
            "Open link".to_string()
        } else {
            record.notes.clone()
        };
        format!(
            r#"<a href="{href}" target="_blank" rel="noreferrer">{text}</a>"#,
            text = escape_html(&label),
        )
    }
}

fn render_row(record: &ApplicationRecord) -> String {
    format!(
        r#"<tr>
    <td><strong>{company}</strong></td>
    <td>{industry}</td>
    <td>{role}</td>
    <td>{date}</td>
    <td>{status}</td>
    <td>{notes}</td>
</tr>"#,
        company = escape_html(&record.company),
        industry = escape_html(&record.industry),
        role = escape_html(&record.role),
        date = escape_html(&record.date),
        status = status_badge(&record.status),
        notes = notes_cell(record),
    )
}

/// tbodyの中身を生成する
///
/// 空リストは6列ぶち抜きのプレースホルダ行1件になる。
pub fn render_table_body(records: &[ApplicationRecord]) -> String {
    if records.is_empty() {
        return r#"<tr><td colspan="6" class="muted">No matching applications.</td></tr>"#
            .to_string();
    }

    records
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 渡されたリストに対する集計値を計算する
pub fn summarize(records: &[ApplicationRecord]) -> StatusSummary {
    let count_status = |name: &str| {
        records
            .iter()
            .filter(|r| normalize(&r.status) == normalize(name))
            .count()
    };

    StatusSummary {
        total: records.len(),
        applied: count_status(TRACKED_STATUSES[0]),
        interview: count_status(TRACKED_STATUSES[1]),
        offer: count_status(TRACKED_STATUSES[2]),
    }
}

/// tbody断片と集計値をまとめて生成する
pub fn render_view(records: &[ApplicationRecord]) -> RenderedView {
    RenderedView {
        table_body: render_table_body(records),
        summary: summarize(records),
    }
}
