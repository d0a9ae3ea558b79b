use crate::errors::AppError;
use crate::models::PlannerData;
use crate::whiteboard::WhiteboardImage;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;

pub fn resolve_data_path() -> PathBuf {
    env::var("APP_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/planner.json"))
}

pub fn resolve_whiteboard_dir() -> PathBuf {
    env::var("APP_WHITEBOARD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/whiteboards"))
}

/// Reads the full store. A missing file is an empty store; an unreadable or
/// unparseable file is an error for the caller to surface.
pub async fn load_store(path: &Path) -> Result<PlannerData, std::io::Error> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(PlannerData::default()),
        Err(err) => Err(err),
    }
}

pub async fn persist_store(path: &Path, data: &PlannerData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub fn whiteboard_path(dir: &Path, date: &str) -> PathBuf {
    dir.join(format!("whiteboard_{date}.png"))
}

pub async fn save_whiteboard(
    dir: &Path,
    date: &str,
    image: &WhiteboardImage,
) -> Result<(), AppError> {
    let png = image.encode_png().map_err(AppError::internal)?;
    fs::write(whiteboard_path(dir, date), png)
        .await
        .map_err(AppError::internal)?;
    Ok(())
}

/// `Ok(None)` when no drawing has been saved for `date`.
pub async fn load_whiteboard(dir: &Path, date: &str) -> Result<Option<WhiteboardImage>, AppError> {
    match fs::read(whiteboard_path(dir, date)).await {
        Ok(bytes) => WhiteboardImage::decode_png(&bytes)
            .map(Some)
            .map_err(AppError::internal),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{slot_label, DayRecord};

    #[tokio::test]
    async fn store_round_trips_including_non_ascii_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");

        let mut data = PlannerData::default();
        let mut record = DayRecord::new();
        record.tasks.insert(slot_label(7), "café ☕".to_string());
        record.notes = "日本語のメモ\nsecond line".to_string();
        data.days.insert("2026-08-07".to_string(), record);

        persist_store(&path, &data).await.unwrap();
        let loaded = load_store(&path).await.unwrap();
        assert_eq!(loaded.days.len(), 1);
        assert_eq!(loaded.days["2026-08-07"], data.days["2026-08-07"]);
    }

    #[tokio::test]
    async fn missing_store_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_store(&dir.path().join("nope.json")).await.unwrap();
        assert!(loaded.days.is_empty());
    }

    #[tokio::test]
    async fn corrupt_store_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");
        fs::write(&path, b"{ not json").await.unwrap();
        let err = load_store(&path).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn whiteboard_round_trips_within_quantization() {
        let dir = tempfile::tempdir().unwrap();
        let image = WhiteboardImage {
            width: 3,
            height: 2,
            pixels: (0..24).map(|i| i as f32 / 23.0).collect(),
        };

        save_whiteboard(dir.path(), "2026-08-07", &image)
            .await
            .unwrap();
        let loaded = load_whiteboard(dir.path(), "2026-08-07")
            .await
            .unwrap()
            .expect("saved drawing");
        assert_eq!(loaded.width, 3);
        assert_eq!(loaded.height, 2);
        for (a, b) in image.pixels.iter().zip(&loaded.pixels) {
            assert!((a - b).abs() <= 1.0 / 255.0);
        }
    }

    #[tokio::test]
    async fn absent_whiteboard_is_none_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_whiteboard(dir.path(), "2026-08-07").await.unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn whiteboard_file_name_embeds_the_date() {
        let path = whiteboard_path(Path::new("data/whiteboards"), "2026-08-07");
        assert!(path.ends_with("whiteboard_2026-08-07.png"));
    }
}
