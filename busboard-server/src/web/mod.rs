//! Web renderer for the departure board.
//!
//! Consumes the abstract layout produced by the board compositor and
//! paints it as HTML. Nothing in the board module knows this exists.

mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::{BoardFragmentTemplate, BoardPageTemplate, BoardView};
