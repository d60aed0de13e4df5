//! # 年齢計算ハンドラ
//!
//! 名前と生年月日から、今日時点の年齢を返す。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /compute-age/{name}/{birth_date}
//! ```
//!
//! - `name`: 任意の文字列。検証せずそのまま返す
//! - `birth_date`: `YYYY-MM-DD` 形式の生年月日
//!
//! ## レスポンス例
//!
//! ```json
//! { "name": "Jose", "age": 35 }
//! ```
//!
//! 生年月日が不正な場合は 400 Bad Request（Problem Details）を返す。

use std::sync::Arc;

use agecalc_domain::{CalendarDate, age::age_today, clock::Clock};
use agecalc_shared::ErrorResponse;
use axum::{
   Json,
   extract::{FromRequestParts, Path, State},
   http::request::Parts,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// 年齢計算 API の State
///
/// 起動時に一度だけ構築し、以降は読み取り専用で共有する。
pub struct AgeState {
   pub clock: Arc<dyn Clock>,
}

/// 年齢計算レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgeResponse {
   /// リクエストで渡された名前
   #[schema(example = "Jose")]
   pub name: String,
   /// 年齢（生年月日が未来の場合は負の値）
   #[schema(example = 35)]
   pub age:  i32,
}

/// 年齢計算のパスパラメータ
///
/// `Path<(String, String)>` の抽出失敗を `ApiError` に変換し、
/// 不正なパスセグメントにも Problem Details を返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgePath {
   pub name:       String,
   pub birth_date: String,
}

impl<S> FromRequestParts<S> for AgePath
where
   S: Send + Sync,
{
   type Rejection = ApiError;

   async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
      let Path((name, birth_date)) =
         Path::<(String, String)>::from_request_parts(parts, state).await?;
      Ok(Self { name, birth_date })
   }
}

/// 年齢計算エンドポイント
#[utoipa::path(
   get,
   path = "/compute-age/{name}/{birth_date}",
   tag = "age",
   params(
      ("name" = String, Path, description = "名前（そのまま返す）"),
      ("birth_date" = String, Path, description = "生年月日（YYYY-MM-DD）", example = "1990-01-01")
   ),
   responses(
      (status = 200, description = "年齢", body = AgeResponse),
      (status = 400, description = "生年月日またはパスパラメータが不正", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn compute_age(
   State(state): State<Arc<AgeState>>,
   AgePath { name, birth_date }: AgePath,
) -> Result<Json<AgeResponse>, ApiError> {
   let birth_date = CalendarDate::parse(&birth_date)?;
   let age = age_today(birth_date, state.clock.as_ref());

   tracing::debug!(%birth_date, age, "年齢を計算しました");

   Ok(Json(AgeResponse { name, age }))
}
