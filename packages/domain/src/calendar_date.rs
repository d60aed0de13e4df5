//! # 暦日（CalendarDate）
//!
//! 年・月・日の組で表される特定の 1 日を表現する値オブジェクト。
//!
//! ## 外部表現
//!
//! 外部との受け渡しには固定形式 `YYYY-MM-DD` のみを使用する。
//!
//! - 年は 4 桁、月と日は 2 桁（ゼロ埋め必須）
//! - 区切りは ASCII のハイフン
//! - 前後の空白、符号、タイムゾーン表記は受け付けない
//!
//! 形式が正しくても暦上存在しない日付（13 月、2 月 30 日、平年の 2 月 29 日、0 年など）は
//! [`ParseError::OutOfRange`] として拒否する。年の範囲は 1〜9999。

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::ParseError;

/// `YYYY-MM-DD` の文字列長
const FORMAT_LEN: usize = 10;

/// 受け付ける最小の年（0 年はグレゴリオ暦に存在しない）
const MIN_YEAR: i32 = 1;

/// ハイフンが置かれる位置
const SEPARATOR_POSITIONS: [usize; 2] = [4, 7];

/// 暦日（値オブジェクト）
///
/// 一度作成したら変更不可。内部では `chrono::NaiveDate` を保持し、
/// 暦上の妥当性は生成時に保証される。
///
/// # 使用例
///
/// ```rust
/// use agecalc_domain::CalendarDate;
///
/// let date = CalendarDate::parse("2024-02-29").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
/// assert_eq!(date.to_string(), "2024-02-29");
///
/// assert!(CalendarDate::parse("2023-02-29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
   /// `YYYY-MM-DD` 形式の文字列をパースする
   ///
   /// # エラー
   ///
   /// - 構造が一致しない場合は [`ParseError::Format`]
   /// - 暦上存在しない日付の場合は [`ParseError::OutOfRange`]
   pub fn parse(input: &str) -> Result<Self, ParseError> {
      let bytes = input.as_bytes();
      let well_formed = bytes.len() == FORMAT_LEN
         && bytes.iter().enumerate().all(|(i, b)| {
            if SEPARATOR_POSITIONS.contains(&i) {
               *b == b'-'
            } else {
               b.is_ascii_digit()
            }
         });
      if !well_formed {
         return Err(ParseError::Format {
            input: input.to_string(),
         });
      }

      // 4 桁の年は i32 に必ず収まる
      let year = decimal(&bytes[0..4]) as i32;
      let month = decimal(&bytes[5..7]);
      let day = decimal(&bytes[8..10]);

      Self::from_ymd(year, month, day)
   }

   /// 年・月・日から作成する
   ///
   /// # エラー
   ///
   /// 年が 1 未満、または暦上存在しない組み合わせの場合は
   /// [`ParseError::OutOfRange`] を返す。
   pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
      let out_of_range = ParseError::OutOfRange { year, month, day };
      if year < MIN_YEAR {
         return Err(out_of_range);
      }
      NaiveDate::from_ymd_opt(year, month, day)
         .map(Self)
         .ok_or(out_of_range)
   }

   /// 年
   pub fn year(&self) -> i32 {
      self.0.year()
   }

   /// 月（1〜12）
   pub fn month(&self) -> u32 {
      self.0.month()
   }

   /// 日（1〜31）
   pub fn day(&self) -> u32 {
      self.0.day()
   }
}

/// ASCII 数字列を 10 進数として読む（呼び出し側で数字のみであることを検証済み）
fn decimal(digits: &[u8]) -> u32 {
   digits
      .iter()
      .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl From<NaiveDate> for CalendarDate {
   fn from(date: NaiveDate) -> Self {
      Self(date)
   }
}

impl From<CalendarDate> for NaiveDate {
   fn from(date: CalendarDate) -> Self {
      date.0
   }
}

impl FromStr for CalendarDate {
   type Err = ParseError;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      Self::parse(s)
   }
}

impl fmt::Display for CalendarDate {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
   }
}
