//! # AgeCalc API サーバー
//!
//! 挨拶・ヘルスチェック・年齢計算の 3 エンドポイントを提供する HTTP サーバー。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────┐     ┌──────────────────┐
//! │   Client    │────▶│  agecalc-api (axum)  │────▶│  agecalc-domain  │
//! └─────────────┘     │     port: 8000       │     │ (年齢計算・日付) │
//!                     └──────────────────────┘     └──────────────────┘
//! ```
//!
//! 状態を持たず、永続化も行わない。共有するのは起動時に組み立てた
//! 読み取り専用のルーターと時刻プロバイダのみ。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーターとミドルウェアの組み立て
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`openapi`] - OpenAPI 仕様定義
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use agecalc_api::app_builder::build_app;
//! use agecalc_domain::clock::SystemClock;
//!
//! let app = build_app(Arc::new(SystemClock));
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
