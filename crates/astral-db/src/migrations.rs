use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            birthdate   TEXT NOT NULL,
            zodiac_sign TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- UNIQUE(user_id, date) makes the daily upsert race-free: two
        -- concurrent 'today' requests cannot both append a row.
        CREATE TABLE IF NOT EXISTS horoscope_history (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL REFERENCES users(id),
            date        TEXT NOT NULL,
            zodiac_sign TEXT NOT NULL,
            horoscope   TEXT NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_history_user_date
            ON horoscope_history(user_id, date);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
