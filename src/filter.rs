//! 絞り込みエンジン
//!
//! 全記録リストをフリーテキスト検索とステータス選択で絞り込む。
//! 入力リストは変更せず、順序を保った新しいリストを返す。

use crate::record::ApplicationRecord;
use crate::text::normalize;

/// 検索対象フィールドを空白1個で連結した正規化済み文字列
fn haystack(record: &ApplicationRecord) -> String {
    normalize(&[
        record.company.as_str(),
        record.industry.as_str(),
        record.role.as_str(),
        record.status.as_str(),
        record.notes.as_str(),
    ]
    .join(" "))
}

/// クエリとステータスの両条件を満たす記録を抽出する
///
/// - クエリが空なら全件一致。非空なら連結フィールドへの部分一致。
/// - ステータスが空なら全件一致。非空なら正規化後の完全一致
///   （ステータスへの部分一致では絞り込まない）。
pub fn filter_records(
    records: &[ApplicationRecord],
    query: &str,
    status: &str,
) -> Vec<ApplicationRecord> {
    let query = normalize(query);
    let status = normalize(status);

    records
        .iter()
        .filter(|r| query.is_empty() || haystack(r).contains(&query))
        .filter(|r| status.is_empty() || normalize(&r.status) == status)
        .cloned()
        .collect()
}

/// 既存ステータスの一覧を収集（重複除去、出現順）
pub fn collect_statuses(records: &[ApplicationRecord]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .filter(|r| !r.status.trim().is_empty())
        .filter_map(|r| {
            let s = r.status.trim().to_string();
            if seen.insert(normalize(&s)) {
                Some(s)
            } else {
                None
            }
        })
        .collect()
}
