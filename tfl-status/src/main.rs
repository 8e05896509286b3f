use std::sync::Arc;

use tracing::{error, info};

use tfl_status::config::ServerConfig;
use tfl_status::lines::LineStyles;
use tfl_status::status::{BoardRegistry, StatusFetcher};
use tfl_status::telemetry;
use tfl_status::tfl::{MockTflClient, TflClient, TflSource};
use tfl_status::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    telemetry::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    telemetry::log_usage_instructions(config.dev_mode);

    // Pick the status source
    let source = match &config.mock_file {
        Some(path) => {
            let mock = MockTflClient::new(path).expect("Failed to load mock status file");
            info!(path = %path.display(), lines = mock.line_count(), "serving mock TfL data");
            TflSource::Mock(mock)
        }
        None => {
            if config.tfl.app_key.is_none() {
                info!("TFL_APP_KEY not set; using anonymous (rate limited) access");
            }
            TflSource::Live(TflClient::new(config.tfl.clone()).expect("Failed to create TfL client"))
        }
    };

    // Line styles are fixed for the life of the process
    let styles = Arc::new(LineStyles::london());
    let fetcher = StatusFetcher::new(source, styles);
    let boards = BoardRegistry::new(fetcher, &config.registry);

    let state = AppState::new(boards, config.page_refresh_secs);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listen address");
    info!(
        "TfL status listening on http://{}/ (fallback refresh every {}s)",
        config.addr,
        config.registry.fallback.as_secs()
    );

    axum::serve(listener, app).await.expect("Server error");
}
