use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use astral_core::Sign;

// -- JWT Claims --

/// Canonical claims definition, shared by token issuance in the auth
/// handlers and verification in the middleware layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// YYYY-MM-DD
    pub birthdate: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub zodiac_sign: Sign,
    pub birthdate: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserProfile,
}

// -- Horoscope --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeResponse {
    pub date: NaiveDate,
    pub zodiac_sign: Sign,
    pub horoscope: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDay {
    pub date: NaiveDate,
    pub zodiac_sign: Sign,
    pub horoscope: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub history: Vec<HistoryDay>,
    pub total_days: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SignsResponse {
    pub signs: Vec<&'static str>,
    pub message: String,
}
