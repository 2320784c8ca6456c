use clap::Parser;
use jobtrack::{browse, cli, config, error, filter, loader, page, render, table};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use loader::DataSource;

/// 引数 → 設定値 → 既定値 の順でデータソースを決める
fn resolve_source(arg: Option<DataSource>, config: &Config) -> DataSource {
    arg.unwrap_or_else(|| config.source.parse().unwrap_or_default())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Export { source, output, query, status, title } => {
            println!("📋 jobtrack - HTML出力\n");

            let source = resolve_source(source, &config);
            let output = output.unwrap_or_else(|| config.output.clone().into());
            let title = title.unwrap_or_else(|| config.title.clone());

            // 1. 読み込み
            println!("[1/3] 記録を読み込み中... ({})", source);
            let records = loader::load_records(&source).await;
            println!("✔ {}件の記録\n", records.len());

            // 2. 絞り込み
            println!("[2/3] 絞り込み中...");
            let filtered = filter::filter_records(&records, &query, &status);
            println!("✔ {}件が条件に一致\n", filtered.len());

            // 3. ページ生成
            println!("[3/3] ページを生成中...");
            page::write_page(&filtered, &title, &output)?;
            println!("✔ 出力: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::List { source, query, status } => {
            let source = resolve_source(source, &config);
            let records = loader::load_records(&source).await;
            let filtered = filter::filter_records(&records, &query, &status);

            println!("{}", table::format_table(&filtered));
            println!("{}", table::format_summary(&render::summarize(&filtered)));
        }

        Commands::Browse { source } => {
            println!("📋 jobtrack - 対話モード\n");

            let source = resolve_source(source, &config);
            let records = loader::load_records(&source).await;
            println!("✔ {}件の記録を読み込み\n", records.len());

            browse::run_browse(&records)?;
        }

        Commands::Config { set_source, set_output, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(source) = set_source {
                config.source = source;
                changed = true;
            }

            if let Some(output) = set_output {
                config.output = output;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  データソース: {}", config.source);
                println!("  出力先: {}", config.output);
                println!("  タイトル: {}", config.title);
            }
        }
    }

    Ok(())
}
