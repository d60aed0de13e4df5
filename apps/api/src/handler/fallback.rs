//! # フォールバックハンドラ
//!
//! ルーティングに一致しなかったリクエストへの応答。
//!
//! | 状況 | ステータス | ボディ |
//! |------|-----------|--------|
//! | 未定義のパス | 404 | `{"detail": "Not Found"}` |
//! | 定義済みパスへの未対応メソッド | 405 | `{"detail": "Method Not Allowed"}` |

use agecalc_shared::DetailResponse;
use axum::{Json, http::StatusCode};

/// 未定義のパス
pub async fn not_found() -> (StatusCode, Json<DetailResponse>) {
   (StatusCode::NOT_FOUND, Json(DetailResponse::not_found()))
}

/// 未対応のメソッド
pub async fn method_not_allowed() -> (StatusCode, Json<DetailResponse>) {
   (
      StatusCode::METHOD_NOT_ALLOWED,
      Json(DetailResponse::method_not_allowed()),
   )
}
