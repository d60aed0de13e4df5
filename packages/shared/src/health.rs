//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントのレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックが返す固定のステータス値
pub const STATUS_OK: &str = "ok";

/// ヘルスチェックレスポンス
///
/// 依存サービスを持たないため、稼働中であれば常に `"ok"` を返す。
///
/// ## 使用例
///
/// ```
/// use agecalc_shared::HealthResponse;
///
/// let response = HealthResponse::ok();
/// assert_eq!(response.status, "ok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
   /// 稼働状態（`"ok"` 固定）
   #[cfg_attr(feature = "openapi", schema(example = "ok"))]
   pub status: String,
}

impl HealthResponse {
   pub fn ok() -> Self {
      Self {
         status: STATUS_OK.to_string(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_health_responseのserializeで正しいjson形状にする() {
      let json = serde_json::to_value(HealthResponse::ok()).unwrap();

      assert_eq!(json, serde_json::json!({ "status": "ok" }));
   }
}
