//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! ドメイン層エラー (ParseError) / パスの抽出失敗 (PathRejection)
//!        ↓ From
//! API エラー (ApiError)
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + RFC 9457 JSON)
//! ```
//!
//! 入力起因のエラーは必ず 4xx に変換し、5xx として扱わない。

use agecalc_domain::ParseError;
use agecalc_shared::ErrorResponse;
use axum::{
   Json,
   extract::rejection::PathRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;

/// API 層で発生するエラー
///
/// ハンドラから返されるエラー型。`IntoResponse` を実装しているため、
/// axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
   /// 生年月日の解析失敗（400 Bad Request）
   #[error(transparent)]
   InvalidBirthDate(#[from] ParseError),

   /// パスパラメータの抽出失敗（400 Bad Request）
   ///
   /// パーセントデコード後に UTF-8 として不正なセグメントなど。
   #[error("パスパラメータが不正です: {}", .0.body_text())]
   InvalidPath(#[from] PathRejection),
}

impl ApiError {
   /// 対応する HTTP ステータスコード
   pub fn status_code(&self) -> StatusCode {
      match self {
         ApiError::InvalidBirthDate(_) | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let status = self.status_code();
      let body = match &self {
         ApiError::InvalidBirthDate(e) => {
            tracing::debug!(error = %e, "生年月日の解析に失敗しました");
            ErrorResponse::validation_error(e.to_string())
         }
         ApiError::InvalidPath(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "パスパラメータの抽出に失敗しました");
            ErrorResponse::validation_error(self.to_string())
         }
      };

      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_invalid_birth_dateは400に変換される() {
      let error = ApiError::from(ParseError::Format {
         input: "1990/01/01".to_string(),
      });

      let response = error.into_response();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   }

   #[test]
   fn test_エラーメッセージはドメインエラーをそのまま表示する() {
      let parse_error = ParseError::OutOfRange {
         year:  1990,
         month: 2,
         day:   31,
      };
      let error = ApiError::from(parse_error.clone());

      assert_eq!(error.to_string(), parse_error.to_string());
   }
}
