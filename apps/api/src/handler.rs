//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、日付解析と年齢計算はドメイン層に委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── age.rs      # 年齢計算
//!     ├── fallback.rs # 404 / 405
//!     ├── health.rs   # ヘルスチェック
//!     └── root.rs     # 挨拶
//! ```

pub mod age;
pub mod fallback;
pub mod health;
pub mod root;

pub use age::{AgePath, AgeResponse, AgeState, compute_age};
pub use fallback::{method_not_allowed, not_found};
pub use health::health_check;
pub use root::{GreetingResponse, greeting};
