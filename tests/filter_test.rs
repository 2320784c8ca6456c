//! 絞り込みエンジンの統合テスト
//!
//! 絞り込みの性質（ワイルドカード恒等、部分一致の健全性、
//! ステータス完全一致）をまとめて検証する。

use jobtrack::filter::filter_records;
use jobtrack::record::ApplicationRecord;
use jobtrack::text::normalize;

fn create_record(company: &str, status: &str) -> ApplicationRecord {
    ApplicationRecord {
        company: company.to_string(),
        status: status.to_string(),
        ..Default::default()
    }
}

fn sample_list() -> Vec<ApplicationRecord> {
    vec![
        create_record("Acme", "Applied"),
        create_record("Globex", "Interview"),
        create_record("Initech", "Offer"),
        create_record("Umbrella", "Planned"),
    ]
}

/// 空クエリ・空ステータスは恒等変換（順序・内容ともに）
#[test]
fn test_wildcard_identity() {
    let records = sample_list();
    let filtered = filter_records(&records, "", "");

    assert_eq!(filtered.len(), records.len());
    for (original, kept) in records.iter().zip(&filtered) {
        assert_eq!(original.company, kept.company);
        assert_eq!(original.status, kept.status);
    }
}

/// 結果の全件がクエリを含み、結果外の全件が含まない
#[test]
fn test_query_soundness_and_completeness() {
    let records = sample_list();
    let query = "in";
    let filtered = filter_records(&records, query, "");

    let haystack = |r: &ApplicationRecord| {
        normalize(&format!(
            "{} {} {} {} {}",
            r.company, r.industry, r.role, r.status, r.notes
        ))
    };

    for r in &filtered {
        assert!(haystack(r).contains(query), "誤って含まれた: {}", r.company);
    }

    let kept: Vec<&str> = filtered.iter().map(|r| r.company.as_str()).collect();
    for r in &records {
        if !kept.contains(&r.company.as_str()) {
            assert!(!haystack(r).contains(query), "誤って除外された: {}", r.company);
        }
    }
}

/// ステータスは完全一致のみ（部分一致では絞り込まれない）
#[test]
fn test_status_requires_exact_match() {
    let records = vec![
        create_record("A", "Interview"),
        create_record("B", "Interview scheduled"),
    ];

    let filtered = filter_records(&records, "", "Interview");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].company, "A");

    assert!(filter_records(&records, "", "Inter").is_empty());
}

/// ステータス比較は大文字小文字・前後空白を無視
#[test]
fn test_status_normalized_comparison() {
    let records = vec![create_record("A", " Applied ")];
    let filtered = filter_records(&records, "", "aPPLIED");
    assert_eq!(filtered.len(), 1);
}

/// シナリオ: Acme/Globex
#[test]
fn test_acme_scenario() {
    let records = vec![
        create_record("Acme", "Applied"),
        create_record("Globex", "Interview"),
    ];

    let filtered = filter_records(&records, "acme", "");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].company, "Acme");

    let summary = jobtrack::render::summarize(&filtered);
    assert_eq!(summary.total, 1);
    assert_eq!(summary.applied, 1);
    assert_eq!(summary.interview, 0);
    assert_eq!(summary.offer, 0);
}

/// 元のリストは変更されない
#[test]
fn test_source_list_untouched() {
    let records = sample_list();
    let before: Vec<String> = records.iter().map(|r| r.company.clone()).collect();

    let _ = filter_records(&records, "acme", "applied");

    let after: Vec<String> = records.iter().map(|r| r.company.clone()).collect();
    assert_eq!(before, after);
}
