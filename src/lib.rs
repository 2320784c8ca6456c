//! jobtrack ライブラリ
//!
//! 読み込み → 絞り込み → 描画 のパイプライン:
//! - loader: JSONソースの単発読み込み（失敗時はプレースホルダ）
//! - filter: クエリ＋ステータスによる絞り込み
//! - render: tbody断片と集計値の生成（純粋関数）
//! - page / table: HTML・ターミナルへのバインディング

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod page;
pub mod record;
pub mod render;
pub mod table;
pub mod text;

pub use error::{JobtrackError, Result};
pub use record::ApplicationRecord;
