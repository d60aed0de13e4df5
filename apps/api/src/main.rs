//! # AgeCalc API サーバー
//!
//! 名前と生年月日から年齢を計算する HTTP サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | GET | `/` | 挨拶メッセージ |
//! | GET | `/health` | ヘルスチェック |
//! | GET | `/compute-age/{name}/{birth_date}` | 年齢計算 |
//! | GET | `/openapi.json` | OpenAPI 仕様 |
//! | GET | `/docs` | Swagger UI |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p agecalc-api
//!
//! # 本番環境
//! API_PORT=8080 LOG_FORMAT=json cargo run -p agecalc-api --release
//! ```

use std::sync::Arc;

use agecalc_api::{app_builder::build_app, config::ApiConfig};
use agecalc_domain::clock::SystemClock;
use agecalc_shared::observability::{self, TracingConfig};
use anyhow::Context as _;
use tokio::{net::TcpListener, signal};

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動（SIGINT / SIGTERM で graceful shutdown）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("agecalc-api");
   observability::init_tracing(tracing_config);
   let _tracing_guard = tracing::info_span!("app", service = "agecalc-api").entered();

   // 設定読み込み
   let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;
   let addr = config
      .socket_addr()
      .context("アドレスのパースに失敗しました")?;

   tracing::info!("API サーバーを起動します: {}", addr);

   let app = build_app(Arc::new(SystemClock));

   let listener = TcpListener::bind(addr)
      .await
      .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("API サーバーを停止しました");

   Ok(())
}

/// 停止シグナル（Ctrl+C / SIGTERM）を待つ
///
/// シグナルハンドラの登録に失敗した場合は、そのシグナルを待たない。
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = signal::ctrl_c().await {
         tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match signal::unix::signal(signal::unix::SignalKind::terminate()) {
         Ok(mut sigterm) => {
            sigterm.recv().await;
         }
         Err(e) => {
            tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      () = ctrl_c => {},
      () = terminate => {},
   }

   tracing::info!("停止シグナルを受信しました");
}
