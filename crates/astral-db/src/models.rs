/// Database row types — these map directly to SQLite rows.
/// Distinct from the astral-types API models to keep the DB layer
/// independent; dates and signs travel as TEXT and are parsed at the
/// handler boundary.

pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub birthdate: String,
    pub zodiac_sign: String,
    pub created_at: String,
}

pub struct HistoryRow {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub zodiac_sign: String,
    pub horoscope: String,
    pub created_at: String,
}
