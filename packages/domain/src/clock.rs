//! # Clock（時刻プロバイダ）
//!
//! ハンドラでの `Utc::now()` 直接呼び出しを置き換え、
//! テストで固定時刻を注入可能にするための抽象化。
//!
//! 「今日」は UTC の暦日として扱う。

use chrono::{DateTime, Utc};

use crate::CalendarDate;

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;

   /// 現在の暦日（UTC）
   fn today(&self) -> CalendarDate {
      CalendarDate::from(self.now().date_naive())
   }
}

/// 実際のシステム時刻を返す実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 固定時刻を返すテスト用実装
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }

   /// 指定した暦日の 00:00:00 UTC に固定する
   pub fn at_date(date: CalendarDate) -> Self {
      let now = chrono::NaiveDate::from(date)
         .and_time(chrono::NaiveTime::MIN)
         .and_utc();
      Self { now }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

#[cfg(test)]
mod tests {
   use chrono::TimeZone;

   use super::*;

   #[test]
   fn test_system_clock_は現在時刻を返す() {
      let clock = SystemClock;
      let before = Utc::now();
      let result = clock.now();
      let after = Utc::now();

      assert!(result >= before);
      assert!(result <= after);
   }

   #[test]
   fn test_fixed_clock_はコンストラクタで渡した時刻を返す() {
      let fixed_time = Utc::now();
      let clock = FixedClock::new(fixed_time);

      assert_eq!(clock.now(), fixed_time);
   }

   #[test]
   fn test_fixed_clock_は複数回呼んでも同じ時刻を返す() {
      let fixed_time = Utc::now();
      let clock = FixedClock::new(fixed_time);

      let first = clock.now();
      let second = clock.now();

      assert_eq!(first, fixed_time);
      assert_eq!(second, fixed_time);
   }

   #[test]
   fn test_todayはutcの暦日を返す() {
      let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 23, 59, 59).unwrap());

      assert_eq!(clock.today(), CalendarDate::from_ymd(2025, 1, 1).unwrap());
   }

   #[test]
   fn test_at_dateで指定した日付がtodayになる() {
      let date = CalendarDate::from_ymd(2024, 2, 29).unwrap();
      let clock = FixedClock::at_date(date);

      assert_eq!(clock.today(), date);
   }
}
