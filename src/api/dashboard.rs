use crate::error::ApiError;
use crate::utils::stats::percentage;
use actix_web::{HttpResponse, web};
use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DashboardToday {
    #[schema(example = 40)]
    pub total_employees: i64,
    #[schema(example = 18)]
    pub present_today: i64,
    #[schema(example = 6)]
    pub absent_today: i64,
    /// Present employees over the whole directory, not over today's records
    #[schema(example = 45.0)]
    pub attendance_rate: f64,
}

#[derive(Serialize, ToSchema)]
pub struct TrendPoint {
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = 30)]
    pub total: i64,
    #[schema(example = 24)]
    pub present: i64,
    #[schema(example = 80.0)]
    pub attendance_rate: f64,
}

#[derive(sqlx::FromRow)]
struct TrendRow {
    date: NaiveDate,
    total: i64,
    present: i64,
}

/// Today's Snapshot
#[utoipa::path(
    get,
    path = "/dashboard/today",
    responses(
        (status = 200, description = "Directory size and today's marks", body = DashboardToday)
    ),
    tag = "Dashboard"
)]
pub async fn today_snapshot(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let today = Local::now().date_naive();

    let total_employees = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to count employees");
            ApiError::Database(e)
        })?;

    let present_today = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE date = ? AND status = 'Present'",
    )
    .bind(today)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to count today's present marks");
        ApiError::Database(e)
    })?;

    let absent_today = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE date = ? AND status = 'Absent'",
    )
    .bind(today)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to count today's absent marks");
        ApiError::Database(e)
    })?;

    Ok(HttpResponse::Ok().json(DashboardToday {
        total_employees,
        present_today,
        absent_today,
        attendance_rate: percentage(present_today, total_employees),
    }))
}

/// 30-day Attendance Trend
#[utoipa::path(
    get,
    path = "/dashboard/last-30-days",
    responses(
        (status = 200, description = "One point per day with records, ascending", body = [TrendPoint])
    ),
    tag = "Dashboard"
)]
pub async fn last_30_days(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let today = Local::now().date_naive();
    let window_start = today - Duration::days(29);

    let rows = sqlx::query_as::<_, TrendRow>(
        "SELECT date, \
         COUNT(*) AS total, \
         SUM(CASE WHEN status = 'Present' THEN 1 ELSE 0 END) AS present \
         FROM attendance \
         WHERE date >= ? AND date <= ? \
         GROUP BY date \
         ORDER BY date",
    )
    .bind(window_start)
    .bind(today)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to aggregate attendance trend");
        ApiError::Database(e)
    })?;

    let trend: Vec<TrendPoint> = rows
        .into_iter()
        .map(|row| TrendPoint {
            date: row.date,
            total: row.total,
            present: row.present,
            attendance_rate: percentage(row.present, row.total),
        })
        .collect();

    Ok(HttpResponse::Ok().json(trend))
}
