//! 対話式ブラウズモジュール
//!
//! 検索テキスト入力・ステータス選択・リセットの3操作を受け付け、
//! 操作のたびに全記録リストへ絞り込み＋描画を同期的にやり直す。
//! デバウンスやキャンセルはなし（リストが小さいため毎回全件処理）。

use crate::error::{JobtrackError, Result};
use crate::filter::{collect_statuses, filter_records};
use crate::record::ApplicationRecord;
use crate::render::summarize;
use crate::table::{format_summary, format_table};
use dialoguer::Input;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// 検索クエリを設定
    Query(String),
    /// ステータス選択へ
    SelectStatus,
    /// 検索・ステータスの両方をクリア
    Reset,
    /// 変更なしで再表示
    Noop,
    /// 終了
    Quit,
}

/// 入力文字列をアクションに解釈する
pub fn parse_action(input: &str) -> BrowseAction {
    let trimmed = input.trim();
    match trimmed {
        "" => BrowseAction::Noop,
        "s" | "S" => BrowseAction::SelectStatus,
        "r" | "R" => BrowseAction::Reset,
        "q" | "Q" => BrowseAction::Quit,
        _ => BrowseAction::Query(trimmed.to_string()),
    }
}

/// 対話式に絞り込み結果を表示する
pub fn run_browse(records: &[ApplicationRecord]) -> Result<()> {
    let mut query = String::new();
    let mut status = String::new();

    println!("操作: [テキスト]検索 [s]ステータス選択 [r]リセット [q]終了");
    println!("---\n");

    loop {
        let filtered = filter_records(records, &query, &status);
        println!("{}", format_table(&filtered));
        println!("{}\n", format_summary(&summarize(&filtered)));

        if !query.is_empty() || !status.is_empty() {
            println!("現在の条件: 検索=\"{}\" ステータス=\"{}\"", query, status);
        }

        match prompt_action()? {
            BrowseAction::Query(q) => query = q,
            BrowseAction::SelectStatus => {
                status = prompt_status(records)?;
            }
            BrowseAction::Reset => {
                query.clear();
                status.clear();
            }
            BrowseAction::Noop => {}
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}

fn prompt_action() -> Result<BrowseAction> {
    let input: String = Input::new()
        .with_prompt("検索 (s:ステータス r:リセット q:終了)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| JobtrackError::CliExecution(e.to_string()))?;

    Ok(parse_action(&input))
}

fn prompt_status(records: &[ApplicationRecord]) -> Result<String> {
    let candidates = collect_statuses(records);
    if !candidates.is_empty() {
        println!("  候補: {}", candidates.join(", "));
    }

    let input: String = Input::new()
        .with_prompt("ステータス（空でクリア）")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| JobtrackError::CliExecution(e.to_string()))?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action("q"), BrowseAction::Quit);
        assert_eq!(parse_action(" Q "), BrowseAction::Quit);
        assert_eq!(parse_action("s"), BrowseAction::SelectStatus);
        assert_eq!(parse_action("r"), BrowseAction::Reset);
        assert_eq!(parse_action(""), BrowseAction::Noop);
        assert_eq!(parse_action("   "), BrowseAction::Noop);
    }

    #[test]
    fn test_parse_action_query() {
        assert_eq!(
            parse_action(" acme "),
            BrowseAction::Query("acme".to_string())
        );
        // 1文字コマンド以外はそのまま検索語
        assert_eq!(
            parse_action("sre"),
            BrowseAction::Query("sre".to_string())
        );
    }
}
