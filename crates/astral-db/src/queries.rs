use crate::Database;
use crate::models::{HistoryRow, UserRow};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Users --

    pub fn create_user(
        &self,
        id: &str,
        name: &str,
        email: &str,
        password_hash: &str,
        birthdate: &str,
        zodiac_sign: &str,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, name, email, password, birthdate, zodiac_sign)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                (id, name, email, password_hash, birthdate, zodiac_sign),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "email", email))
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id", id))
    }

    // -- Horoscope history --

    /// Insert the day's record unless one already exists for (user, date).
    /// Returns true if a row was written. `INSERT OR IGNORE` against the
    /// UNIQUE(user_id, date) constraint keeps concurrent same-day requests
    /// from creating duplicates.
    pub fn insert_history_entry(
        &self,
        id: &str,
        user_id: &str,
        date: &str,
        zodiac_sign: &str,
        horoscope: &str,
    ) -> Result<bool> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "INSERT OR IGNORE INTO horoscope_history (id, user_id, date, zodiac_sign, horoscope)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (id, user_id, date, zodiac_sign, horoscope),
            )?;
            Ok(changed > 0)
        })
    }

    pub fn get_history_entry(&self, user_id: &str, date: &str) -> Result<Option<HistoryRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, user_id, date, zodiac_sign, horoscope, created_at
                       FROM horoscope_history
                      WHERE user_id = ?1 AND date = ?2",
                    (user_id, date),
                    map_history_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Full stored history for a user, newest first.
    pub fn get_history(&self, user_id: &str) -> Result<Vec<HistoryRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, date, zodiac_sign, horoscope, created_at
                   FROM horoscope_history
                  WHERE user_id = ?1
                  ORDER BY date DESC",
            )?;
            let rows = stmt
                .query_map([user_id], map_history_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Drop everything but the `keep` most-recent-by-date rows.
    pub fn prune_history(&self, user_id: &str, keep: usize) -> Result<usize> {
        self.with_conn(|conn| {
            let removed = conn.execute(
                "DELETE FROM horoscope_history
                  WHERE user_id = ?1
                    AND id NOT IN (
                        SELECT id FROM horoscope_history
                         WHERE user_id = ?1
                         ORDER BY date DESC
                         LIMIT ?2
                    )",
                (user_id, keep as i64),
            )?;
            Ok(removed)
        })
    }
}

fn query_user(conn: &Connection, column: &str, value: &str) -> Result<Option<UserRow>> {
    // `column` is a compile-time constant from the two callers above, never
    // user input.
    let sql = format!(
        "SELECT id, name, email, password, birthdate, zodiac_sign, created_at
           FROM users WHERE {column} = ?1"
    );
    let mut stmt = conn.prepare(&sql)?;

    let row = stmt
        .query_row([value], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                birthdate: row.get(4)?,
                zodiac_sign: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn map_history_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryRow> {
    Ok(HistoryRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        date: row.get(2)?,
        zodiac_sign: row.get(3)?,
        horoscope: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_with_user(user_id: &str) -> Database {
        let db = Database::open_in_memory().unwrap();
        db.create_user(user_id, "Test User", "test@example.com", "hash", "2000-07-15", "Cancer")
            .unwrap();
        db
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let db = db_with_user("u1");
        let err = db.create_user("u2", "Other", "test@example.com", "hash", "1990-01-01", "Capricorn");
        assert!(err.is_err());
    }

    #[test]
    fn user_lookup_by_email_and_id() {
        let db = db_with_user("u1");
        let by_email = db.get_user_by_email("test@example.com").unwrap().unwrap();
        assert_eq!(by_email.id, "u1");
        assert_eq!(by_email.zodiac_sign, "Cancer");

        let by_id = db.get_user_by_id("u1").unwrap().unwrap();
        assert_eq!(by_id.email, "test@example.com");

        assert!(db.get_user_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn same_day_insert_is_idempotent() {
        let db = db_with_user("u1");

        let first = db
            .insert_history_entry("h1", "u1", "2025-08-20", "Cancer", "text")
            .unwrap();
        let second = db
            .insert_history_entry("h2", "u1", "2025-08-20", "Cancer", "text")
            .unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(db.get_history("u1").unwrap().len(), 1);
    }

    #[test]
    fn history_is_newest_first() {
        let db = db_with_user("u1");
        db.insert_history_entry("h1", "u1", "2025-08-18", "Cancer", "a").unwrap();
        db.insert_history_entry("h2", "u1", "2025-08-20", "Cancer", "b").unwrap();
        db.insert_history_entry("h3", "u1", "2025-08-19", "Cancer", "c").unwrap();

        let rows = db.get_history("u1").unwrap();
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2025-08-20", "2025-08-19", "2025-08-18"]);
    }

    #[test]
    fn prune_keeps_most_recent_by_date() {
        let db = db_with_user("u1");
        for day in 1..=31 {
            db.insert_history_entry(
                &format!("h{day}"),
                "u1",
                &format!("2025-08-{day:02}"),
                "Cancer",
                "text",
            )
            .unwrap();
        }

        let removed = db.prune_history("u1", 30).unwrap();
        assert_eq!(removed, 1);

        let rows = db.get_history("u1").unwrap();
        assert_eq!(rows.len(), 30);
        // The oldest day fell off.
        assert!(rows.iter().all(|r| r.date != "2025-08-01"));
        assert_eq!(rows[0].date, "2025-08-31");
    }
}
