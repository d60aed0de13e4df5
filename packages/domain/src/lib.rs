//! # AgeCalc ドメイン層
//!
//! 年齢計算の中核となる値オブジェクトと純粋関数を定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: 生年月日などの日付は [`CalendarDate`] として不変に保持する
//! - **純粋関数**: 年齢計算は副作用を持たず、同じ入力には常に同じ結果を返す
//! - **時刻の抽象化**: 「今日」は [`clock::Clock`] から取得し、テストで固定できるようにする
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → domain
//!   └─→ shared
//! ```
//!
//! ドメイン層は HTTP やログ出力に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`age`] - 年齢計算
//! - [`calendar_date`] - `YYYY-MM-DD` 形式の日付
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use agecalc_domain::{CalendarDate, age::age_on};
//!
//! let birth_date: CalendarDate = "1990-06-15".parse().unwrap();
//! let today: CalendarDate = "2025-01-01".parse().unwrap();
//!
//! assert_eq!(age_on(birth_date, today), 34);
//! ```

pub mod age;
pub mod calendar_date;
pub mod clock;
pub mod error;

pub use calendar_date::CalendarDate;
pub use error::ParseError;
