//! 名前抽出・週グループ化モジュール
//!
//! ## 処理フロー
//! 1. 全レコードの最新年月を求める
//! 2. 最新月以外のレコードを捨てる
//! 3. 各セルを大文字小文字を区別せず部分一致で検索
//! 4. 月曜始まりの週にまとめ、週・日付の昇順に並べる

use crate::dates::{week_end, week_start};
use crate::error::{Error, Result};
use crate::types::{DayRecord, Match, WeekGroup, WeeklyRoster, YearMonth};
use std::collections::BTreeMap;

/// 全レコードの最新年月
pub fn latest_month(records: &[DayRecord]) -> Option<YearMonth> {
    records.iter().map(DayRecord::year_month).max()
}

/// 大文字小文字を区別しない部分一致
pub fn contains_name(text: &str, name: &str) -> bool {
    text.to_lowercase().contains(&name.to_lowercase())
}

/// 指定月のレコードから名前を含むセルを抽出（シート順）
pub fn find_matches<'a, I>(records: I, month: YearMonth, name: &str) -> Vec<Match>
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    records
        .into_iter()
        .filter(|r| month.contains(r.date))
        .flat_map(move |r| {
            r.cell_values
                .iter()
                .filter(move |cell| contains_name(&cell.text, name))
                .map(move |cell| Match {
                    date: r.date,
                    weekday_label: r.weekday_label.clone(),
                    place: cell.place.clone(),
                    shift: cell.shift.clone(),
                    matched_text: cell.text.clone(),
                })
        })
        .collect()
}

/// 一致を月曜始まりの週にまとめる
///
/// 週は開始日の昇順、週内は日付の昇順。同じ日付の一致は入力順を保つ。
pub fn group_by_week(matches: Vec<Match>) -> Vec<WeekGroup> {
    let mut weeks: BTreeMap<chrono::NaiveDate, Vec<Match>> = BTreeMap::new();
    for m in matches {
        weeks.entry(week_start(m.date)).or_default().push(m);
    }

    weeks
        .into_iter()
        .map(|(start, mut matches)| {
            // 安定ソート
            matches.sort_by_key(|m| m.date);
            WeekGroup {
                week_start: start,
                week_end: week_end(start),
                matches,
            }
        })
        .collect()
}

/// レコード列から最新月の週別一覧を作る
///
/// # Errors
/// * `Error::InvalidName` - 名前が空
/// * `Error::NoData` - レコードがない、または最新月に一致がない
pub fn extract_weekly(records: &[DayRecord], target_name: &str) -> Result<WeeklyRoster> {
    let name = target_name.trim();
    if name.is_empty() {
        return Err(Error::InvalidName("検索する名前が空です".into()));
    }

    let month = latest_month(records)
        .ok_or_else(|| Error::NoData("日付のあるレコードがありません".into()))?;

    let matches = find_matches(records, month, name);
    tracing::debug!(%month, name, matches = matches.len(), "名前を抽出");

    if matches.is_empty() {
        return Err(Error::NoData(format!(
            "{} に「{}」の割り当てがありません",
            month, name
        )));
    }

    Ok(WeeklyRoster {
        target_name: name.to_string(),
        month,
        groups: group_by_week(matches),
    })
}
