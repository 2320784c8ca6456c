//! HTMLページ生成（表示面バインディング）
//!
//! render モジュールの出力（tbody断片＋集計値）を自己完結な
//! HTMLドキュメントに埋め込む。CSSはインライン、外部参照なし。

use crate::error::Result;
use crate::record::ApplicationRecord;
use crate::render::{render_view, RenderedView};
use crate::text::escape_html;
use chrono::{Datelike, Local};
use std::path::Path;

/// ページ全体を生成する
pub fn render_page(records: &[ApplicationRecord], title: &str) -> String {
    let view = render_view(records);
    render_document(&view, title, Local::now().year())
}

fn render_document(view: &RenderedView, title: &str, year: i32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{title}</h1>
        </header>
        <div class="summary">
            <div class="summary-card">
                <h3>Total</h3>
                <div class="value" id="statTotal">{total}</div>
            </div>
            <div class="summary-card">
                <h3>Applied</h3>
                <div class="value" id="statApplied">{applied}</div>
            </div>
            <div class="summary-card">
                <h3>Interview</h3>
                <div class="value" id="statInterview">{interview}</div>
            </div>
            <div class="summary-card">
                <h3>Offer</h3>
                <div class="value" id="statOffer">{offer}</div>
            </div>
        </div>
        <table>
            <thead>
                <tr>
                    <th>Company</th>
                    <th>Industry</th>
                    <th>Role</th>
                    <th>Date</th>
                    <th>Status</th>
                    <th>Notes</th>
                </tr>
            </thead>
            <tbody id="appsTbody">
{rows}
            </tbody>
        </table>
        <footer>
            <span id="year">{year}</span>
        </footer>
    </div>
</body>
</html>"#,
        title = escape_html(title),
        css = inline_css(),
        total = view.summary.total,
        applied = view.summary.applied,
        interview = view.summary.interview,
        offer = view.summary.offer,
        rows = view.table_body,
        year = year,
    )
}

/// ページをファイルに書き出す
pub fn write_page(records: &[ApplicationRecord], title: &str, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output, render_page(records, title))?;
    Ok(())
}

fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
}

header {
    margin-bottom: 2rem;
    padding-bottom: 1rem;
    border-bottom: 2px solid #e5e7eb;
}

header h1 {
    font-size: 2rem;
    font-weight: 700;
}

.summary {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    margin-bottom: 2rem;
}

.summary-card {
    padding: 1rem;
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
}

.summary-card h3 {
    font-size: 0.75rem;
    text-transform: uppercase;
    color: #6b7280;
}

.summary-card .value {
    font-size: 1.75rem;
    font-weight: 700;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th, td {
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid #e5e7eb;
}

th {
    font-size: 0.75rem;
    text-transform: uppercase;
    color: #6b7280;
}

.badge {
    display: inline-block;
    padding: 0.125rem 0.5rem;
    border-radius: 9999px;
    background: #eef2ff;
    font-size: 0.8rem;
}

.muted {
    color: #6b7280;
    text-align: center;
}

footer {
    margin-top: 2rem;
    color: #6b7280;
    font-size: 0.875rem;
}
"#
}
