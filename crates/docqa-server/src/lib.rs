//! DocQA server: HTTP surface over the answering pipeline.

pub mod fetch;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
