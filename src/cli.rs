use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster-extract")]
#[command(about = "勤務表から名前を抽出し、最新月を週ごとに表示するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力（-vv, -vvv で増加）
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 勤務表から名前を抽出して週別に表示
    Extract {
        /// 勤務表ファイル (xlsx/xlsm/xls/xlsb/ods/csv)
        #[arg(required = true)]
        file: PathBuf,

        /// 検索する名前（大文字小文字を区別しない部分一致）
        #[arg(short, long)]
        name: Option<String>,

        /// 処理するシート名（省略時は先頭シート）
        #[arg(short, long, conflicts_with = "pick_sheet")]
        sheet: Option<String>,

        /// シートを対話的に選択
        #[arg(long)]
        pick_sheet: bool,

        /// ヘッダー行数（0〜2、行0=場所、行1=シフト）
        #[arg(long)]
        header_rows: Option<usize>,

        /// 日付列（0始まり）
        #[arg(long)]
        date_column: Option<usize>,

        /// 曜日列（0始まり）
        #[arg(long, conflicts_with = "no_weekday")]
        weekday_column: Option<usize>,

        /// 曜日列なし
        #[arg(long)]
        no_weekday: bool,

        /// 03/06/2024 を6月3日として読む
        #[arg(long)]
        day_first: bool,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// 結果をファイルに出力（.xlsx/.json、ディレクトリ指定可）
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// ブック内のシート一覧を表示
    Sheets {
        /// 勤務表ファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の検索名を設定
        #[arg(long)]
        set_name: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
