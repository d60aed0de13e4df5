//! # 年齢計算
//!
//! 生年月日と基準日から満年齢を求める。
//!
//! ## 計算規則
//!
//! ```text
//! age = today.year - birth_date.year
//! 基準日の (月, 日) が誕生日の (月, 日) より前なら age -= 1
//! ```
//!
//! 妥当性の検証は行わない。生年月日が基準日より未来の場合は負の値を返し、
//! 極端に古い生年月日でもそのまま計算する。

use crate::{CalendarDate, clock::Clock};

/// 基準日時点の年齢を計算する
///
/// 副作用を持たない全域関数。同じ入力には常に同じ結果を返す。
///
/// # 使用例
///
/// ```rust
/// use agecalc_domain::{CalendarDate, age::age_on};
///
/// let today = CalendarDate::parse("2025-01-01").unwrap();
///
/// // 誕生日を迎えている
/// assert_eq!(age_on(CalendarDate::parse("1990-01-01").unwrap(), today), 35);
/// // 誕生日をまだ迎えていない
/// assert_eq!(age_on(CalendarDate::parse("1990-06-15").unwrap(), today), 34);
/// ```
pub fn age_on(birth_date: CalendarDate, today: CalendarDate) -> i32 {
   let age = today.year() - birth_date.year();
   if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
      age - 1
   } else {
      age
   }
}

/// 時刻プロバイダから取得した今日の時点での年齢を計算する
pub fn age_today(birth_date: CalendarDate, clock: &dyn Clock) -> i32 {
   age_on(birth_date, clock.today())
}
