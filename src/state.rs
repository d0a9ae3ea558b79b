use crate::models::PlannerData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub whiteboard_dir: PathBuf,
    pub data: Arc<Mutex<PlannerData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, whiteboard_dir: PathBuf, data: PlannerData) -> Self {
        Self {
            data_path,
            whiteboard_dir,
            data: Arc::new(Mutex::new(data)),
        }
    }
}
