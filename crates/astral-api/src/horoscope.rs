use anyhow::anyhow;
use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use tracing::warn;
use uuid::Uuid;

use astral_core::{HistoryEntry, Sign, reconcile, selector};
use astral_db::models::UserRow;
use astral_types::api::{Claims, HistoryDay, HistoryResponse, HoroscopeResponse, SignsResponse};

use crate::auth::AppState;
use crate::error::ApiError;

/// Stored history is pruned to this many rows per user after each insert.
const MAX_STORED_DAYS: usize = 30;

/// Days covered by the `/history` endpoint.
const HISTORY_WINDOW_DAYS: usize = 7;

pub async fn today(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let user = load_user(&state, &claims)?;
    let sign = user_sign(&user)?;

    let today = Utc::now().date_naive();
    let horoscope = selector::select(sign, today);

    // Lazy once-per-day persistence. INSERT OR IGNORE makes the second of
    // two same-day requests a no-op, so repeat calls neither duplicate the
    // row nor change the returned text.
    let inserted = state.db.insert_history_entry(
        &Uuid::new_v4().to_string(),
        &user.id,
        &today.format("%Y-%m-%d").to_string(),
        sign.as_str(),
        horoscope,
    )?;
    if inserted {
        state.db.prune_history(&user.id, MAX_STORED_DAYS)?;
    }

    Ok(Json(HoroscopeResponse {
        date: today,
        zodiac_sign: sign,
        horoscope: horoscope.to_string(),
        message: format!("Here's your horoscope for today, {}!", user.name),
    }))
}

pub async fn history(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let user = load_user(&state, &claims)?;
    let sign = user_sign(&user)?;
    let today = Utc::now().date_naive();

    let stored: Vec<HistoryEntry> = state
        .db
        .get_history(&user.id)?
        .into_iter()
        .filter_map(|row| {
            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .inspect_err(|e| warn!("corrupt history date '{}' on row {}: {e}", row.date, row.id))
                .ok()?;
            Some(HistoryEntry {
                date,
                sign,
                horoscope: row.horoscope,
            })
        })
        .collect();

    let window = reconcile(&stored, sign, HISTORY_WINDOW_DAYS, today);
    let total_days = window.len();

    Ok(Json(HistoryResponse {
        history: window
            .into_iter()
            .map(|entry| HistoryDay {
                date: entry.date,
                zodiac_sign: entry.sign,
                horoscope: entry.horoscope,
            })
            .collect(),
        total_days,
        message: format!(
            "Here's your horoscope history for the last {} days, {}!",
            total_days, user.name
        ),
    }))
}

pub async fn signs() -> impl IntoResponse {
    Json(SignsResponse {
        signs: Sign::ALL.iter().map(|s| s.as_str()).collect(),
        message: "All zodiac signs retrieved successfully".into(),
    })
}

pub async fn by_date(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(date): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let today = Utc::now().date_naive();
    let requested = parse_requested_date(&date, today)?;

    let user = load_user(&state, &claims)?;
    let sign = user_sign(&user)?;

    // Serve the stored text if this day was ever persisted; otherwise the
    // selector recomputes it deterministically.
    let horoscope = match state
        .db
        .get_history_entry(&user.id, &requested.format("%Y-%m-%d").to_string())?
    {
        Some(row) => row.horoscope,
        None => selector::select(sign, requested).to_string(),
    };

    Ok(Json(HoroscopeResponse {
        date: requested,
        zodiac_sign: sign,
        horoscope,
        message: format!(
            "Here's your horoscope for {}, {}!",
            requested.format("%a %b %d %Y"),
            user.name
        ),
    }))
}

fn parse_requested_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ApiError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("Invalid date format. Use YYYY-MM-DD.".into()))?;

    if date > today {
        return Err(ApiError::Validation(
            "Cannot get horoscope for future dates.".into(),
        ));
    }

    Ok(date)
}

fn load_user(state: &AppState, claims: &Claims) -> Result<UserRow, ApiError> {
    state
        .db
        .get_user_by_id(&claims.sub.to_string())?
        .ok_or(ApiError::Unauthorized)
}

fn user_sign(user: &UserRow) -> Result<Sign, ApiError> {
    user.zodiac_sign
        .parse()
        .map_err(|e| ApiError::from(anyhow!("corrupt zodiac_sign on user {}: {e}", user.id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn requested_date_validation() {
        let today = date(2025, 8, 20);

        assert_eq!(
            parse_requested_date("2025-08-15", today).unwrap(),
            date(2025, 8, 15)
        );
        // Today itself is allowed; tomorrow is not.
        assert!(parse_requested_date("2025-08-20", today).is_ok());
        assert!(matches!(
            parse_requested_date("2025-08-21", today),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            parse_requested_date("2025-08-30", today),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            parse_requested_date("not-a-date", today),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            parse_requested_date("2025-13-40", today),
            Err(ApiError::Validation(_))
        ));
    }
}
