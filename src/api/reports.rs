use crate::api::employee::employee_exists;
use crate::error::ApiError;
use crate::utils::db_utils::{SqlValue, push_date_bounds};
use crate::utils::stats::percentage;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct ReportRangeQuery {
    /// Inclusive lower bound
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound
    #[schema(example = "2024-12-31", value_type = String, format = "date")]
    pub end_date: Option<NaiveDate>,
}

/// Both bounds are mandatory here; the extractor rejects requests missing either.
#[derive(Deserialize, IntoParams, ToSchema)]
pub struct MonthlyRangeQuery {
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub start_date: NaiveDate,

    #[schema(example = "2024-12-31", value_type = String, format = "date")]
    pub end_date: NaiveDate,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeAttendanceReport {
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = 20)]
    pub total_days: i64,
    #[schema(example = 15)]
    pub present_days: i64,
    #[schema(example = 5)]
    pub absent_days: i64,
    #[schema(example = 75.0)]
    pub present_percentage: f64,
}

#[derive(Serialize, ToSchema)]
pub struct MonthlyAttendanceReport {
    #[schema(example = "2024-01")]
    pub month: String,
    #[schema(example = 22)]
    pub total_days: i64,
    #[schema(example = 18)]
    pub present_days: i64,
    #[schema(example = 4)]
    pub absent_days: i64,
    #[schema(example = 81.82)]
    pub present_percentage: f64,
}

#[derive(Serialize, ToSchema)]
pub struct OrganizationAttendanceSummary {
    #[schema(example = 1200)]
    pub total_records: i64,
    #[schema(example = 900)]
    pub present_records: i64,
    #[schema(example = 300)]
    pub absent_records: i64,
    #[schema(example = 75.0)]
    pub present_percentage: f64,
}

#[derive(sqlx::FromRow)]
struct AttendanceCounts {
    total: i64,
    present: i64,
}

#[derive(sqlx::FromRow)]
struct MonthlyRow {
    month: String,
    total_days: i64,
    present_days: i64,
}

async fn fetch_counts(
    pool: &SqlitePool,
    where_sql: &str,
    args: Vec<SqlValue>,
) -> Result<AttendanceCounts, sqlx::Error> {
    let sql = format!(
        "SELECT COUNT(*) AS total, \
         COALESCE(SUM(CASE WHEN status = 'Present' THEN 1 ELSE 0 END), 0) AS present \
         FROM attendance{}",
        where_sql
    );

    let mut counts_query = sqlx::query_as::<_, AttendanceCounts>(&sql);
    for arg in args {
        counts_query = match arg {
            SqlValue::Text(v) => counts_query.bind(v),
            SqlValue::Date(d) => counts_query.bind(d),
        };
    }

    counts_query.fetch_one(pool).await
}

/// Attendance Summary per Employee
#[utoipa::path(
    get,
    path = "/reports/attendance/employee/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Business identifier, e.g. EMP001"),
        ReportRangeQuery
    ),
    responses(
        (status = 200, description = "Aggregated counts for the employee", body = EmployeeAttendanceReport),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Reports"
)]
pub async fn employee_report(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<ReportRangeQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let exists = employee_exists(pool.get_ref(), &employee_id)
        .await
        .map_err(|e| {
            error!(error = %e, %employee_id, "Employee lookup failed");
            ApiError::Database(e)
        })?;

    if !exists {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let mut where_sql = String::from(" WHERE employee_id = ?");
    let mut args = vec![SqlValue::Text(employee_id.clone())];
    push_date_bounds(&mut where_sql, &mut args, query.start_date, query.end_date);

    let counts = fetch_counts(pool.get_ref(), &where_sql, args)
        .await
        .map_err(|e| {
            error!(error = %e, %employee_id, "Failed to aggregate attendance");
            ApiError::Database(e)
        })?;

    Ok(HttpResponse::Ok().json(EmployeeAttendanceReport {
        employee_id,
        total_days: counts.total,
        present_days: counts.present,
        absent_days: counts.total - counts.present,
        present_percentage: percentage(counts.present, counts.total),
    }))
}

/// Monthly Attendance Breakdown per Employee
#[utoipa::path(
    get,
    path = "/reports/attendance/monthly/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Business identifier, e.g. EMP001"),
        MonthlyRangeQuery
    ),
    responses(
        (status = 200, description = "One row per month with records, ascending", body = [MonthlyAttendanceReport]),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Reports"
)]
pub async fn monthly_report(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<MonthlyRangeQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let exists = employee_exists(pool.get_ref(), &employee_id)
        .await
        .map_err(|e| {
            error!(error = %e, %employee_id, "Employee lookup failed");
            ApiError::Database(e)
        })?;

    if !exists {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    let rows = sqlx::query_as::<_, MonthlyRow>(
        "SELECT strftime('%Y-%m', date) AS month, \
         COUNT(*) AS total_days, \
         SUM(CASE WHEN status = 'Present' THEN 1 ELSE 0 END) AS present_days \
         FROM attendance \
         WHERE employee_id = ? AND date >= ? AND date <= ? \
         GROUP BY month \
         ORDER BY month",
    )
    .bind(&employee_id)
    .bind(query.start_date)
    .bind(query.end_date)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, %employee_id, "Failed to aggregate monthly attendance");
        ApiError::Database(e)
    })?;

    let report: Vec<MonthlyAttendanceReport> = rows
        .into_iter()
        .map(|row| MonthlyAttendanceReport {
            month: row.month,
            total_days: row.total_days,
            present_days: row.present_days,
            absent_days: row.total_days - row.present_days,
            present_percentage: percentage(row.present_days, row.total_days),
        })
        .collect();

    Ok(HttpResponse::Ok().json(report))
}

/// Organization-wide Attendance Summary
#[utoipa::path(
    get,
    path = "/reports/attendance/summary",
    params(ReportRangeQuery),
    responses(
        (status = 200, description = "Counts over every employee", body = OrganizationAttendanceSummary)
    ),
    tag = "Reports"
)]
pub async fn organization_summary(
    pool: web::Data<SqlitePool>,
    query: web::Query<ReportRangeQuery>,
) -> Result<HttpResponse, ApiError> {
    let mut where_sql = String::from(" WHERE 1=1");
    let mut args = Vec::new();
    push_date_bounds(&mut where_sql, &mut args, query.start_date, query.end_date);

    let counts = fetch_counts(pool.get_ref(), &where_sql, args)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to aggregate organization attendance");
            ApiError::Database(e)
        })?;

    Ok(HttpResponse::Ok().json(OrganizationAttendanceSummary {
        total_records: counts.total,
        present_records: counts.present,
        absent_records: counts.total - counts.present,
        present_percentage: percentage(counts.present, counts.total),
    }))
}
