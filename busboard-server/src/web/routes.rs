//! HTTP route handlers.

use askama::Template;
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::Local;

use crate::board::compose;

use super::state::AppState;
use super::templates::{BoardFragmentTemplate, BoardPageTemplate, BoardView};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(board_page))
        .route("/board", get(board_fragment))
        .route("/health", get(health))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn current_view(state: &AppState) -> BoardView {
    let snapshot = state.board.borrow().clone();
    let content = compose(&state.config, &snapshot, Local::now().naive_local());
    BoardView::from_content(content, state.config.language)
}

/// Full board page with auto-refresh.
async fn board_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = BoardPageTemplate {
        board: current_view(&state),
        refresh_secs: state.config.refresh_interval_secs,
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Board fragment for clients polling just the table.
async fn board_fragment(State(state): State<AppState>) -> impl IntoResponse {
    let template = BoardFragmentTemplate {
        board: current_view(&state),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardConfig, BoardSnapshot};
    use crate::domain::{Departure, DepartureSet, TransportType};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tokio::sync::watch;

    fn state_with(snapshot: BoardSnapshot, config: BoardConfig) -> AppState {
        let (_tx, rx) = watch::channel(Arc::new(snapshot));
        AppState::new(rx, config)
    }

    fn configured() -> BoardConfig {
        BoardConfig {
            display_mode: "small".to_string(),
            timing_point_codes: vec!["31000495".to_string()],
            ..BoardConfig::default()
        }
    }

    fn one_stop() -> DepartureSet {
        let t = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut set = DepartureSet::new();
        set.insert(
            "Dam",
            vec![Departure {
                line_public_number: "4".to_string(),
                destination: "Station RAI".to_string(),
                transport_type: TransportType::Tram,
                operator: "GVB".to_string(),
                target_departure: t,
                expected_departure: t,
                last_update: Some(t),
                timing_point_wheelchair_accessible: false,
                timing_point_visual_accessible: false,
                line_wheelchair_accessible: false,
            }],
        );
        set
    }

    #[test]
    fn view_keeps_serving_after_the_sender_drops() {
        let (tx, rx) = watch::channel(Arc::new(BoardSnapshot::loaded(one_stop())));
        drop(tx);

        let state = AppState::new(rx, configured());
        let view = current_view(&state);
        assert!(view.table.is_some());
    }

    #[test]
    fn view_shows_loading_before_first_fetch() {
        let state = state_with(BoardSnapshot::initial(), configured());
        let view = current_view(&state);
        assert!(view.message.is_some());
        assert!(view.table.is_none());
    }

    #[test]
    fn view_shows_table_once_loaded() {
        let state = state_with(BoardSnapshot::loaded(one_stop()), configured());
        let view = current_view(&state);
        assert!(view.message.is_none());
        let table = view.table.unwrap();
        assert_eq!(table.class, "ovtable-small");
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn fragment_renders_table_markup() {
        let state = state_with(BoardSnapshot::loaded(one_stop()), configured());
        let html = BoardFragmentTemplate {
            board: current_view(&state),
        }
        .render()
        .unwrap();

        assert!(html.contains("ovtable-small"));
        assert!(html.contains("Dam"));
        assert!(html.contains("10:00"));
    }
}
