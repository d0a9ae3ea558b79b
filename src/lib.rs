pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod storage;
pub mod ui;
pub mod whiteboard;

pub use app::router;
pub use state::AppState;
pub use storage::{load_store, resolve_data_path, resolve_whiteboard_dir};
