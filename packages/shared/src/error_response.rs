//! # エラーレスポンス
//!
//! API で返すエラーボディの型を提供する。
//!
//! ## 2 種類のボディ
//!
//! | 型 | 形状 | 用途 |
//! |----|------|------|
//! | [`ErrorResponse`] | `{type, title, status, detail}` | ハンドラが返すエラー（RFC 9457 Problem Details） |
//! | [`DetailResponse`] | `{detail}` | ルーティング層のエラー（404 / 405） |
//!
//! axum の `IntoResponse` 変換は API 側の責務（shared に axum 依存を入れない）。

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://agecalc.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
///
/// `type` フィールドは URI で問題の種類を識別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// `error_type_suffix` はベース URI に付加される（例: `"validation-error"`）。
   pub fn new(
      error_type_suffix: &str,
      title: impl Into<String>,
      status: u16,
      detail: impl Into<String>,
   ) -> Self {
      Self {
         error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
         title: title.into(),
         status,
         detail: detail.into(),
      }
   }

   /// 400 Validation Error
   pub fn validation_error(detail: impl Into<String>) -> Self {
      Self::new("validation-error", "Validation Error", 400, detail)
   }
}

/// ルーティング層のエラーレスポンス
///
/// 未定義のパスや未対応のメソッドに対して返す固定形状のボディ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DetailResponse {
   pub detail: String,
}

impl DetailResponse {
   /// 404 Not Found
   pub fn not_found() -> Self {
      Self {
         detail: "Not Found".to_string(),
      }
   }

   /// 405 Method Not Allowed
   pub fn method_not_allowed() -> Self {
      Self {
         detail: "Method Not Allowed".to_string(),
      }
   }
}
