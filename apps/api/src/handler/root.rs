//! # ルートハンドラ
//!
//! `GET /` で固定の挨拶メッセージを返す。

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 挨拶メッセージ
pub const GREETING: &str = "Hello World from AgeCalc!";

/// 挨拶レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GreetingResponse {
   #[schema(example = "Hello World from AgeCalc!")]
   pub message: String,
}

/// 挨拶エンドポイント
///
/// 入力を持たず、何度呼んでも同じレスポンスを返す。
#[utoipa::path(
   get,
   path = "/",
   tag = "root",
   responses(
      (status = 200, description = "挨拶メッセージ", body = GreetingResponse)
   )
)]
pub async fn greeting() -> Json<GreetingResponse> {
   Json(GreetingResponse {
      message: GREETING.to_string(),
   })
}
