use crate::api::employee::employee_exists;
use crate::error::ApiError;
use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::utils::db_utils::{SqlValue, push_date_bounds};
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::error;
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, ToSchema)]
pub struct CreateAttendance {
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "Present")]
    pub status: AttendanceStatus,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AttendanceRangeQuery {
    /// Inclusive lower bound
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper bound
    #[schema(example = "2024-01-31", value_type = String, format = "date")]
    pub end_date: Option<NaiveDate>,
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = CreateAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = Attendance),
        (status = 400, description = "Future date or already marked", body = Object, example = json!({
            "message": "Attendance already marked for this employee on this date"
        })),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "message": "Employee does not exist"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let today = Local::now().date_naive();

    if payload.date > today {
        return Err(ApiError::BadRequest(
            "Future dates are not allowed".to_string(),
        ));
    }

    let exists = employee_exists(pool.get_ref(), &payload.employee_id)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id = %payload.employee_id, "Employee lookup failed");
            ApiError::Database(e)
        })?;

    if !exists {
        return Err(ApiError::NotFound("Employee does not exist".to_string()));
    }

    // No duplicate pre-check; UNIQUE(employee_id, date) arbitrates the race.
    let result = sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
        .bind(&payload.employee_id)
        .bind(payload.date)
        .bind(payload.status)
        .execute(pool.get_ref())
        .await;

    let id = match result {
        Ok(res) => res.last_insert_rowid(),
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return Err(ApiError::Conflict(
                        "Attendance already marked for this employee on this date".to_string(),
                    ));
                }

                // Employee deleted between the lookup and the insert
                if db_err.is_foreign_key_violation() {
                    return Err(ApiError::NotFound("Employee does not exist".to_string()));
                }
            }

            error!(error = %e, employee_id = %payload.employee_id, "Failed to mark attendance");
            return Err(ApiError::Database(e));
        }
    };

    Ok(HttpResponse::Created().json(Attendance {
        id,
        employee_id: payload.employee_id,
        date: payload.date,
        status: payload.status,
    }))
}

/// View Attendance per Employee
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Business identifier, e.g. EMP001"),
        AttendanceRangeQuery
    ),
    responses(
        (status = 200, description = "Matching records, most recent first", body = [Attendance]),
        (status = 400, description = "Inverted date range", body = Object, example = json!({
            "message": "start_date cannot be greater than end_date"
        })),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<AttendanceRangeQuery>,
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

    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Err(ApiError::BadRequest(
                "start_date cannot be greater than end_date".to_string(),
            ));
        }
    }

    let mut where_sql = String::from(" WHERE employee_id = ?");
    let mut args = vec![SqlValue::Text(employee_id.clone())];
    push_date_bounds(&mut where_sql, &mut args, query.start_date, query.end_date);

    let sql = format!(
        "SELECT id, employee_id, date, status FROM attendance{} ORDER BY date DESC",
        where_sql
    );

    let mut data_query = sqlx::query_as::<_, Attendance>(&sql);
    for arg in args {
        data_query = match arg {
            SqlValue::Text(v) => data_query.bind(v),
            SqlValue::Date(d) => data_query.bind(d),
        };
    }

    let records = data_query.fetch_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, %employee_id, "Failed to fetch attendance");
        ApiError::Database(e)
    })?;

    // Employee exists but nothing matched: empty array, not an error
    Ok(HttpResponse::Ok().json(records))
}
