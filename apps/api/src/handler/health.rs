//! # ヘルスチェックハンドラ
//!
//! サーバーの稼働状態を確認するためのエンドポイント。
//!
//! ## 用途
//!
//! - **コンテナオーケストレーター**: ECS/Kubernetes の liveness probe
//! - **監視システム**: 外部監視サービスからの死活監視
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! { "status": "ok" }
//! ```

use agecalc_shared::HealthResponse;
use axum::Json;

/// ヘルスチェックエンドポイント
///
/// 依存サービスを持たないため、外部への問い合わせは行わず常に 200 OK を返す。
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::ok())
}
