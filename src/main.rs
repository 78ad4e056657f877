use clap::Parser;
use roster_extract::{cli, config, error, export, logging, pipeline, reader, report, sheet_selector};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&logging::LogConfig::from_verbosity(cli.verbose));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_user_facing() => {
            // 結果の代わりに警告を表示（別のシート・名前で再実行すればよい）
            eprintln!("⚠ {}", e);
            eprintln!("  別のシートや名前を試してください");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Extract {
            file,
            name,
            sheet,
            pick_sheet,
            header_rows,
            date_column,
            weekday_column,
            no_weekday,
            day_first,
            format,
            export: export_path,
        } => {
            let target_name = config.resolve_name(name.as_deref());

            let mut layout = config.layout();
            if let Some(n) = header_rows {
                layout.header_rows = n;
            }
            if let Some(c) = date_column {
                layout.date_column = c;
            }
            if no_weekday {
                layout.weekday_column = None;
            } else if weekday_column.is_some() {
                layout.weekday_column = weekday_column;
            }
            if day_first {
                layout.date_order = roster_common::DateOrder::DayFirst;
            }

            let sheet = if pick_sheet {
                let sheets = reader::list_sheets(&file)?;
                sheet_selector::select_sheet_interactive(&sheets)?
            } else {
                sheet
            };

            let show_progress = format == OutputFormat::Table;
            if show_progress {
                println!("🗂️ roster-extract - 名前抽出\n");
                println!("[1/2] 勤務表を解析中... ({})", file.display());
            }

            let options = pipeline::ExtractOptions {
                target_name,
                sheet,
                layout,
            };
            let extraction = pipeline::run_extraction(&file, &options)?;
            let roster = &extraction.roster;

            if show_progress {
                println!(
                    "✔ シート「{}」: {}日分を認識\n",
                    extraction.sheet_name, extraction.day_count
                );
                println!(
                    "[2/2] {} の「{}」の割り当て: {}件\n",
                    roster.month,
                    roster.target_name,
                    roster.total_matches()
                );
            }

            match format {
                OutputFormat::Table => print!("{}", report::render_report(roster)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(roster)?),
            }

            if let Some(path) = export_path {
                let written = export::export_roster(roster, &path)?;
                // JSON出力時は標準出力に結果以外を書かない
                if show_progress {
                    println!("✔ 出力: {}", written.display());
                } else {
                    eprintln!("✔ 出力: {}", written.display());
                }
            }
        }

        Commands::Sheets { file } => {
            let sheets = reader::list_sheets(&file)?;
            println!("シート一覧 ({}):", file.display());
            for (i, name) in sheets.iter().enumerate() {
                println!("  {}) {}", i + 1, name);
            }
        }

        Commands::Config { set_name, show } => {
            let mut config = config;

            if let Some(name) = set_name {
                config.set_default_name(name)?;
                println!("✔ 既定の検索名を設定しました: {}", config.default_name);
            }

            if show {
                println!("設定:");
                println!("  検索名: {}", config.default_name);
                println!("  ヘッダー行数: {}", config.header_rows);
                println!("  日付列: {}", config.date_column);
                println!(
                    "  曜日列: {}",
                    config
                        .weekday_column
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "なし".into())
                );
                println!("  日付順: {}", if config.day_first { "日/月" } else { "月/日" });
                println!("  パス: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
