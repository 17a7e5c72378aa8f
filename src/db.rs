use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        // Cascade from employees to attendance relies on this pragma
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Creates both tables if absent. Re-runnable; shared by the server binary
/// and the test suite.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY,
            employee_id TEXT NOT NULL UNIQUE,
            full_name   TEXT NOT NULL,
            email       TEXT NOT NULL UNIQUE,
            department  TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id          INTEGER PRIMARY KEY,
            employee_id TEXT NOT NULL
                        REFERENCES employees (employee_id) ON DELETE CASCADE,
            date        DATE NOT NULL,
            status      TEXT NOT NULL,
            UNIQUE (employee_id, date)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_attendance_employee ON attendance (employee_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance (date)")
        .execute(pool)
        .await?;

    Ok(())
}
