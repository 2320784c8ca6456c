//! テキストユーティリティ
//!
//! - escape_html: HTML埋め込み用エスケープ
//! - normalize: 比較用の正規化（小文字化＋トリム）

/// HTMLの予約文字5種をエスケープする
///
/// `&` を最初に置換することで、後続の置換結果が二重エスケープ
/// されないようにしている。
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// 比較用に小文字化してトリムする
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_reserved() {
        assert_eq!(
            escape_html(r#"<a href="x" title='y'>&</a>"#),
            "&lt;a href=&quot;x&quot; title=&#039;y&#039;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        // 既存のエンティティも素通しせず & を先にエスケープする
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_safe_input_unchanged() {
        // 予約文字を含まない入力に対してのみ冪等
        let safe = "Example Company 2026-01-03";
        assert_eq!(escape_html(safe), safe);
        assert_eq!(escape_html(&escape_html(safe)), safe);
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_normalize_case_and_whitespace() {
        assert_eq!(normalize("  Applied "), "applied");
        assert_eq!(normalize("INTERVIEW"), "interview");
        assert_eq!(normalize("Applied"), normalize(" aPPlied\t"));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
