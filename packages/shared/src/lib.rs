//! # AgeCalc 共有ユーティリティ
//!
//! API サーバーとドメイン層の外側で共有される型とユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は API 側の責務）
//! - ログ初期化などの重い依存は `observability` feature の内側に置く

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{DetailResponse, ErrorResponse};
pub use health::HealthResponse;
