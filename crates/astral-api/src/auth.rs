use std::sync::Arc;

use anyhow::{Context, anyhow};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use astral_core::Sign;
use astral_db::Database;
use astral_db::models::UserRow;
use astral_types::api::{
    AuthResponse, Claims, LoginRequest, ProfileResponse, SignupRequest, UserProfile,
};

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub jwt_secret: String,
}

const TOKEN_LIFETIME_DAYS: i64 = 7;

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = req.name.trim();
    if name.len() < 2 {
        return Err(ApiError::Validation(
            "Name must be at least 2 characters long".into(),
        ));
    }
    if !is_plausible_email(&req.email) {
        return Err(ApiError::Validation("Please enter a valid email".into()));
    }
    if req.password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters long".into(),
        ));
    }
    let birthdate = NaiveDate::parse_from_str(&req.birthdate, "%Y-%m-%d").map_err(|_| {
        ApiError::Validation("Please enter a valid birthdate (YYYY-MM-DD)".into())
    })?;

    if state.db.get_user_by_email(&req.email)?.is_some() {
        return Err(ApiError::Validation(
            "User with this email already exists".into(),
        ));
    }

    // The sign is computed once here and stored as a snapshot on the row;
    // nothing ever recomputes it from the birthdate again.
    let sign = Sign::from_birthdate(birthdate)
        .ok_or_else(|| anyhow!("no sign for birthdate {birthdate}"))?;

    // Hash password with Argon2id
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(req.password.as_bytes(), &salt)
        .map_err(|e| anyhow!("password hashing failed: {e}"))?
        .to_string();

    let user_id = Uuid::new_v4();

    // Store the normalized form; chrono accepts unpadded input like
    // 2000-7-15, and the text must round-trip against later parses.
    state.db.create_user(
        &user_id.to_string(),
        name,
        &req.email,
        &password_hash,
        &birthdate.format("%Y-%m-%d").to_string(),
        sign.as_str(),
    )?;

    let token = create_token(&state.jwt_secret, user_id, &req.email)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".into(),
            token,
            user: UserProfile {
                id: user_id,
                name: name.to_string(),
                email: req.email,
                zodiac_sign: sign,
                birthdate,
            },
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .get_user_by_email(&req.email)?
        .ok_or(ApiError::BadCredentials)?;

    let parsed_hash =
        PasswordHash::new(&user.password).map_err(|e| anyhow!("stored hash invalid: {e}"))?;

    Argon2::default()
        .verify_password(req.password.as_bytes(), &parsed_hash)
        .map_err(|_| ApiError::BadCredentials)?;

    let user_id: Uuid = user.id.parse().context("corrupt user id")?;
    let token = create_token(&state.jwt_secret, user_id, &user.email)?;

    Ok(Json(AuthResponse {
        message: "Login successful".into(),
        token,
        user: profile_from_row(&user)?,
    }))
}

pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .get_user_by_id(&claims.sub.to_string())?
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(ProfileResponse {
        user: profile_from_row(&user)?,
    }))
}

/// Map a users row to the API shape. Parse failures here mean the row was
/// corrupted outside this service, so they surface as server errors.
pub(crate) fn profile_from_row(row: &UserRow) -> Result<UserProfile, ApiError> {
    Ok(UserProfile {
        id: row.id.parse().context("corrupt user id")?,
        name: row.name.clone(),
        email: row.email.clone(),
        zodiac_sign: row
            .zodiac_sign
            .parse()
            .map_err(|e| anyhow!("corrupt zodiac_sign on user {}: {e}", row.id))?,
        birthdate: NaiveDate::parse_from_str(&row.birthdate, "%Y-%m-%d")
            .map_err(|e| anyhow!("corrupt birthdate on user {}: {e}", row.id))?,
    })
}

fn create_token(secret: &str, user_id: Uuid, email: &str) -> Result<String, ApiError> {
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::days(TOKEN_LIFETIME_DAYS)).timestamp()
            as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| anyhow!("token encoding failed: {e}"))?;

    Ok(token)
}

/// Cheap shape check, not RFC 5322. Rejects the obvious garbage and leaves
/// real verification to the email round trip it would take anyway.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("a.b+c@sub.example.org"));
        assert!(!is_plausible_email("no-at-sign"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@nodot"));
        assert!(!is_plausible_email("user@.com"));
        assert!(!is_plausible_email("user@example."));
    }
}
