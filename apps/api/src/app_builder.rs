//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定の読み込みとサーバー起動に集中する。
//!
//! ルーターは起動時に一度だけ組み立て、以降は変更しない。

use std::sync::Arc;

use agecalc_domain::clock::Clock;
use agecalc_shared::observability::{MakeRequestUuidV7, make_request_span};
use axum::{Router, routing::get};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
   handler::{
      AgeState,
      compute_age,
      greeting,
      health_check,
      method_not_allowed,
      not_found,
   },
   openapi::ApiDoc,
};

/// Swagger UI のパス（`/docs` は `/docs/` へリダイレクトされる）
pub const DOCS_PATH: &str = "/docs";

/// OpenAPI 仕様（JSON）のパス
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// ルーターを構築する
///
/// `clock` は年齢計算の基準日（今日）の取得に使用する。
/// 本番では `SystemClock`、テストでは `FixedClock` を渡す。
pub fn build_app(clock: Arc<dyn Clock>) -> Router {
   let age_state = Arc::new(AgeState { clock });

   Router::new()
      .route("/", get(greeting))
      .route("/health", get(health_check))
      .route("/compute-age/{name}/{birth_date}", get(compute_age))
      // Swagger UI と OpenAPI 仕様
      .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
      // 定義済みルートへの未対応メソッド（ルート登録後に設定する必要がある）
      .method_not_allowed_fallback(method_not_allowed)
      .fallback(not_found)
      .with_state(age_state)
      // Request ID レイヤー（下に書いたものが外側）
      // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
      // 2. TraceLayer: スパンに request_id を含める
      // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
