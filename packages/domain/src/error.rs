//! # ドメイン層エラー定義
//!
//! 日付文字列の解析失敗を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Format` | 400 Bad Request | `YYYY-MM-DD` の形式に一致しない |
//! | `OutOfRange` | 400 Bad Request | 形式は正しいが暦上存在しない日付 |
//!
//! いずれもクライアント起因のエラーであり、5xx に変換してはならない。

use thiserror::Error;

/// 日付の解析エラー
///
/// API 層でこのエラーを受け取り、400 Bad Request に変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
   /// 形式エラー
   ///
   /// 区切り文字の誤り、数字以外の文字、桁数の不一致など、
   /// 文字列が `YYYY-MM-DD` の構造に一致しない場合に使用する。
   #[error("日付の形式が不正です（YYYY-MM-DD 形式で指定してください）: {input:?}")]
   Format {
      /// 解析対象の文字列
      input: String,
   },

   /// 範囲外エラー
   ///
   /// 13 月や 2 月 30 日のように、暦上存在しない日付の場合に使用する。
   #[error("存在しない日付です: {year:04}-{month:02}-{day:02}")]
   OutOfRange {
      year:  i32,
      month: u32,
      day:   u32,
   },
}
