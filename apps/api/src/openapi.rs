//! # OpenAPI 仕様定義
//!
//! utoipa を使用して API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{age, health, root};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "AgeCalc API",
      description = "名前と生年月日から年齢を計算する API"
   ),
   paths(
      root::greeting,
      health::health_check,
      age::compute_age,
   ),
   components(schemas(
      agecalc_shared::ErrorResponse,
      agecalc_shared::DetailResponse,
   )),
   tags(
      (name = "root", description = "挨拶"),
      (name = "health", description = "ヘルスチェック"),
      (name = "age", description = "年齢計算"),
   )
)]
pub struct ApiDoc;
