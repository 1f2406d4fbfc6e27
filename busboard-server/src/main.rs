use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use busboard_server::board::{BoardConfig, BoardSnapshot};
use busboard_server::poller::Poller;
use busboard_server::provider::{OvApiClient, OvApiConfig};
use busboard_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config();

    // A configuration error still serves the board so the error is
    // visible on screen; the poller is simply never started. The sender
    // half of the bare channel is kept alongside the poller slot so the
    // channel stays open for the server's lifetime.
    let (_poller, _board_tx, board_rx) = match config.validate() {
        Ok(_) => {
            let selection = config
                .stop_selection()
                .expect("validated config has a stop selection");
            let client_config = OvApiConfig::default()
                .with_departures_only(config.show_only_departures)
                .with_show_town_name(config.show_town_name);
            let client = OvApiClient::new(client_config, selection)
                .expect("Failed to create OV API client");

            let (mut poller, rx) =
                Poller::new(client, Duration::from_secs(config.refresh_interval_secs));
            poller.start();
            (Some(poller), None, rx)
        }
        Err(err) => {
            eprintln!("Warning: {err}. Departure refresh disabled.");
            let (tx, rx) = watch::channel(Arc::new(BoardSnapshot::initial()));
            (None, Some(tx), rx)
        }
    };

    // Build app state
    let state = AppState::new(board_rx, config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    println!("Departure board listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET /        - Full board page (auto-refreshing)");
    println!("  GET /board   - Board table fragment");
    println!("  GET /health  - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Load configuration from the JSON file named by `BUSBOARD_CONFIG`, or
/// fall back to defaults plus the stop/mode environment variables.
fn load_config() -> BoardConfig {
    if let Ok(path) = std::env::var("BUSBOARD_CONFIG") {
        let json = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read config file {path}: {e}"));
        return serde_json::from_str(&json)
            .unwrap_or_else(|e| panic!("Failed to parse config file {path}: {e}"));
    }

    let mut config = BoardConfig::default();
    if let Ok(codes) = std::env::var("BUSBOARD_TIMING_POINTS") {
        config.timing_point_codes = codes
            .split(',')
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Ok(code) = std::env::var("BUSBOARD_STOP_AREA") {
        config.stop_area_code = Some(code);
    }
    if let Ok(mode) = std::env::var("BUSBOARD_DISPLAY_MODE") {
        config.display_mode = mode;
    }
    config
}
