use crate::error::ApiError;
use crate::model::employee::Employee;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, error};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "Aarav Sharma")]
    pub full_name: String,

    #[validate(email)]
    #[schema(example = "aarav.sharma@company.com", format = "email")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct EmployeeQuery {
    /// Case-insensitive substring matched against employee_id, full_name,
    /// email and department
    #[schema(example = "sharma")]
    pub search: Option<String>,
}

/// True when the business identifier is present in the directory.
pub(crate) async fn employee_exists(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ? LIMIT 1)",
    )
    .bind(employee_id)
    .fetch_one(pool)
    .await
}

/// Add Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid email or duplicate employee", body = Object, example = json!({
            "message": "Employee with this employee_id already exists"
        }))
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();

    if payload.validate().is_err() {
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }

    // No existence pre-check; the UNIQUE indexes arbitrate duplicates.
    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&payload.employee_id)
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .execute(pool.get_ref())
    .await;

    let id = match result {
        Ok(res) => res.last_insert_rowid(),
        Err(e) => {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    let message = if db_err.message().contains("employees.email") {
                        "Employee with this email already exists"
                    } else {
                        "Employee with this employee_id already exists"
                    };
                    return Err(ApiError::Conflict(message.to_string()));
                }
            }

            error!(error = %e, employee_id = %payload.employee_id, "Failed to create employee");
            return Err(ApiError::Database(e));
        }
    };

    Ok(HttpResponse::Created().json(Employee {
        id,
        employee_id: payload.employee_id,
        full_name: payload.full_name,
        email: payload.email,
        department: payload.department,
    }))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Full filtered employee list, ordered by employee_id", body = [Employee])
    ),
    tag = "Employees"
)]
pub async fn list_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, ApiError> {
    let mut sql =
        String::from("SELECT id, employee_id, full_name, email, department FROM employees");
    let mut like = None;

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(
            " WHERE LOWER(employee_id) LIKE ? OR LOWER(full_name) LIKE ? \
             OR LOWER(email) LIKE ? OR LOWER(department) LIKE ?",
        );
        like = Some(format!("%{}%", search.to_lowercase()));
    }

    sql.push_str(" ORDER BY employee_id ASC");
    debug!(sql = %sql, search = ?query.search, "Listing employees");

    let mut data_query = sqlx::query_as::<_, Employee>(&sql);
    if let Some(term) = &like {
        for _ in 0..4 {
            data_query = data_query.bind(term.clone());
        }
    }

    let employees = data_query.fetch_all(pool.get_ref()).await.map_err(|e| {
        error!(error = %e, "Failed to list employees");
        ApiError::Database(e)
    })?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Business identifier, e.g. EMP001")
    ),
    responses(
        (status = 200, description = "Employee and all its attendance removed", body = Object, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    // Attendance rows go with the employee via ON DELETE CASCADE
    let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(&employee_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, %employee_id, "Failed to delete employee");
            ApiError::Database(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Employee deleted successfully" })))
}
