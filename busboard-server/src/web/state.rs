//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::watch;

use crate::board::{BoardConfig, BoardSnapshot};

/// Shared application state.
///
/// The snapshot receiver is the read side of the poller's watch channel;
/// handlers borrow whole snapshots from it and never mutate anything.
#[derive(Clone)]
pub struct AppState {
    /// Latest board snapshot from the poller.
    pub board: watch::Receiver<Arc<BoardSnapshot>>,

    /// Read-only board configuration.
    pub config: Arc<BoardConfig>,
}

impl AppState {
    pub fn new(board: watch::Receiver<Arc<BoardSnapshot>>, config: BoardConfig) -> Self {
        Self {
            board,
            config: Arc::new(config),
        }
    }
}
