use crate::errors::AppError;
use crate::models::{DatesResponse, DayRecord, DayResponse, IndexQuery, SaveDayRequest};
use crate::schedule::apply_plan;
use crate::state::AppState;
use crate::storage::{load_whiteboard, persist_store, save_whiteboard};
use crate::ui::render_index;
use crate::whiteboard::WhiteboardImage;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(Query(query): Query<IndexQuery>) -> Html<String> {
    let date = query
        .date
        .filter(|date| validate_date_key(date).is_ok())
        .unwrap_or_else(today_string);
    Html(render_index(&date))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    validate_date_key(&date)?;
    let data = state.data.lock().await;
    let record = data.day(&date);
    Ok(Json(to_response(date, record)))
}

pub async fn save_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<SaveDayRequest>,
) -> Result<Json<DayResponse>, AppError> {
    validate_date_key(&date)?;
    let sleep = match payload.sleep {
        Some(range) => {
            if range.start > 23 || range.end > 23 {
                return Err(AppError::bad_request("sleep hours must be in 0..=23"));
            }
            Some((range.start, range.end))
        }
        None => None,
    };

    let mut record = DayRecord::new();
    for (slot, text) in record.tasks.iter_mut() {
        if let Some(sent) = payload.tasks.get(slot) {
            *text = sent.clone();
        }
    }
    record.notes = payload.notes;
    apply_plan(&mut record.tasks, sleep, &payload.fun, &payload.work);

    let mut data = state.data.lock().await;
    record.whiteboard_present = data
        .days
        .get(&date)
        .map(|existing| existing.whiteboard_present)
        .unwrap_or(false);
    data.days.insert(date.clone(), record.clone());
    persist_store(&state.data_path, &data).await?;

    Ok(Json(to_response(date, record)))
}

pub async fn list_dates(State(state): State<AppState>) -> Result<Json<DatesResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(DatesResponse {
        dates: data.days.keys().cloned().collect(),
    }))
}

pub async fn get_whiteboard(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Response, AppError> {
    validate_date_key(&date)?;
    match load_whiteboard(&state.whiteboard_dir, &date).await? {
        Some(image) => {
            let png = image.encode_png().map_err(AppError::internal)?;
            Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

pub async fn put_whiteboard(
    State(state): State<AppState>,
    Path(date): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    validate_date_key(&date)?;
    let image = WhiteboardImage::decode_png(&body)
        .map_err(|_| AppError::bad_request("body must be a decodable PNG image"))?;
    save_whiteboard(&state.whiteboard_dir, &date, &image).await?;

    let mut data = state.data.lock().await;
    {
        let record = data.days.entry(date).or_default();
        record.whiteboard_present = true;
    }
    persist_store(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn download_whiteboard(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Response, AppError> {
    validate_date_key(&date)?;
    let image = load_whiteboard(&state.whiteboard_dir, &date)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no whiteboard saved for {date}")))?;
    let png = image.encode_png().map_err(AppError::internal)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"whiteboard_{date}.png\""),
            ),
        ],
        png,
    )
        .into_response())
}

fn to_response(date: String, record: DayRecord) -> DayResponse {
    DayResponse {
        date,
        tasks: record.tasks,
        notes: record.notes,
        whiteboard_present: record.whiteboard_present,
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}

fn validate_date_key(date: &str) -> Result<(), AppError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be a valid YYYY-MM-DD date"))?;
    // Reject non-canonical spellings like 2026-8-7; they would fork the store
    // key and the whiteboard file name.
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(AppError::bad_request("date must be a valid YYYY-MM-DD date"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_date_key;

    #[test]
    fn date_keys_must_be_canonical() {
        assert!(validate_date_key("2026-08-07").is_ok());
        assert!(validate_date_key("2026-8-7").is_err());
        assert!(validate_date_key("2026-02-30").is_err());
        assert!(validate_date_key("tomorrow").is_err());
        assert!(validate_date_key("2026-08-07T00:00").is_err());
    }
}
