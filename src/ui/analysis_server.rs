use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::Filter;
use crate::config::constants::{sleep_duration_millis, MAX_REQUEST_BODY_BYTES, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::errors::{GapAnalyzerError, GapResult};
use crate::services::gap_analyzer::GapAnalyzer;

/// HTTP front for the analyzer: `POST /analyze`, `GET /catalog` and `GET /health`.
pub struct AnalysisServer {
    analyzer: Arc<GapAnalyzer>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl AnalysisServer {
    pub const fn new(analyzer: Arc<GapAnalyzer>) -> Self {
        Self {
            analyzer,
            shutdown_tx: None,
        }
    }

    pub fn routes(
        analyzer: Arc<GapAnalyzer>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let analyzer_filter = warp::any().map(move || Arc::clone(&analyzer));

        let analyze = warp::path!("analyze")
            .and(warp::post())
            .and(warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES))
            .and(warp::body::bytes())
            .and(analyzer_filter.clone())
            .and_then(analyze_handler);

        let catalog = warp::path!("catalog")
            .and(warp::get())
            .and(analyzer_filter)
            .and_then(catalog_handler);

        let health = warp::path!("health")
            .and(warp::get())
            .and_then(health_handler);

        analyze.or(catalog).or(health).with(warp::log("gap_analyzer::http"))
    }

    /// Binds and serves in the background; returns the bound address (useful with port 0).
    pub fn start(&mut self, addr: SocketAddr) -> GapResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (bound, server) = warp::serve(Self::routes(Arc::clone(&self.analyzer)))
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| GapAnalyzerError::server_error(&format!("binding {addr}"), &e.to_string()))?;

        tokio::spawn(server);
        self.shutdown_tx = Some(shutdown_tx);

        log::info!("🌐 Analysis server listening on http://{bound}");
        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> GapResult<()> {
        log::info!("🛑 Shutting down analysis server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|()| GapAnalyzerError::server_error("shutdown", "server already stopped"))?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }

    /// Serves until Ctrl-C.
    pub async fn run(&mut self, addr: SocketAddr) -> GapResult<()> {
        self.start(addr)?;
        println!("Press Ctrl-C to stop");

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| GapAnalyzerError::system_error("waiting for Ctrl-C", &e.to_string()))?;

        self.shutdown().await
    }
}

fn error_reply(error: &GapAnalyzerError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match error {
        GapAnalyzerError::InvalidScanResultError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warp::reply::with_status(
        warp::reply::json(&json!({
            "error": error.kind(),
            "message": error.to_string(),
        })),
        status,
    )
}

async fn analyze_handler(body: Bytes, analyzer: Arc<GapAnalyzer>) -> Result<impl warp::Reply, Infallible> {
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            let error = GapAnalyzerError::invalid_scan_result("<payload>", &format!("is not valid JSON: {e}"));
            return Ok(error_reply(&error));
        }
    };

    match analyzer.analyze_value(payload) {
        Ok(result) => Ok(warp::reply::with_status(warp::reply::json(&result), StatusCode::OK)),
        Err(error) => {
            log::warn!("Rejected analysis request: {error}");
            Ok(error_reply(&error))
        }
    }
}

async fn catalog_handler(analyzer: Arc<GapAnalyzer>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&analyzer.catalog()))
}

async fn health_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
