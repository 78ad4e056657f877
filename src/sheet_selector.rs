//! シート対話式選択モジュール

use crate::error::Result;
use dialoguer::Select;

/// 対話式でシートを選択
///
/// シートが1枚以下なら問い合わせずにそれを返す。
/// 選択結果は標準エラーに出す。
pub fn select_sheet_interactive(sheets: &[String]) -> Result<Option<String>> {
    match sheets {
        [] => Ok(None),
        [only] => Ok(Some(only.clone())),
        _ => {
            let index = Select::new()
                .with_prompt("処理するシートを選択してください")
                .items(sheets)
                .default(0)
                .interact()?;
            eprintln!("→ {} を使用", sheets[index]);
            Ok(Some(sheets[index].clone()))
        }
    }
}
