pub mod ai;
pub mod app;
pub mod calendar;
pub mod csv;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use ai::AiClient;
pub use app::router;
pub use state::AppState;
pub use storage::{load_store, resolve_data_dir};
