mod common;

use actix_web::{App, http::StatusCode, test, web};
use anyhow::Result;
use serde_json::Value;
use sqlx::SqlitePool;

use common::test_pool;
use hrms::routes;

async fn seed_employee(pool: &SqlitePool, employee_id: &str) {
    sqlx::query(
        "INSERT INTO employees (employee_id, full_name, email, department) VALUES (?, ?, ?, ?)",
    )
    .bind(employee_id)
    .bind(format!("Test {}", employee_id))
    .bind(format!("{}@company.com", employee_id.to_lowercase()))
    .bind("Engineering")
    .execute(pool)
    .await
    .expect("Failed to seed employee");
}

async fn insert_attendance(pool: &SqlitePool, employee_id: &str, date: &str, status: &str) {
    sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
        .bind(employee_id)
        .bind(date)
        .bind(status)
        .execute(pool)
        .await
        .expect("Failed to insert attendance");
}

#[actix_web::test]
async fn test_employee_report_counts_and_percentage() -> Result<()> {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001").await;
    insert_attendance(&pool, "EMP001", "2024-01-01", "Present").await;
    insert_attendance(&pool, "EMP001", "2024-01-02", "Absent").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/employee/EMP001")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["employee_id"], "EMP001");
    assert_eq!(body["total_days"], 2);
    assert_eq!(body["present_days"], 1);
    assert_eq!(body["absent_days"], 1);
    assert_eq!(body["present_percentage"], 50.0);

    Ok(())
}

#[actix_web::test]
async fn test_employee_report_honors_date_bounds() -> Result<()> {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001").await;
    insert_attendance(&pool, "EMP001", "2024-01-01", "Present").await;
    insert_attendance(&pool, "EMP001", "2024-01-02", "Absent").await;
    insert_attendance(&pool, "EMP001", "2024-02-01", "Present").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/employee/EMP001?start_date=2024-02-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_days"], 1);
    assert_eq!(body["present_days"], 1);
    assert_eq!(body["present_percentage"], 100.0);

    let req = test::TestRequest::get()
        .uri("/reports/attendance/employee/EMP001?end_date=2024-01-02")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_days"], 2);
    assert_eq!(body["present_days"], 1);
    assert_eq!(body["present_percentage"], 50.0);

    Ok(())
}

#[actix_web::test]
async fn test_employee_report_without_records_is_all_zero() -> Result<()> {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/employee/EMP001")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_days"], 0);
    assert_eq!(body["present_days"], 0);
    assert_eq!(body["absent_days"], 0);
    assert_eq!(body["present_percentage"], 0.0);

    Ok(())
}

#[actix_web::test]
async fn test_employee_report_unknown_employee_is_not_found() -> Result<()> {
    let pool = test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/employee/GHOST")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Employee not found");

    Ok(())
}

#[actix_web::test]
async fn test_monthly_report_groups_by_month() -> Result<()> {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001").await;
    insert_attendance(&pool, "EMP001", "2024-01-01", "Present").await;
    insert_attendance(&pool, "EMP001", "2024-01-15", "Absent").await;
    insert_attendance(&pool, "EMP001", "2024-02-01", "Present").await;
    insert_attendance(&pool, "EMP001", "2024-02-02", "Present").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/monthly/EMP001?start_date=2024-01-01&end_date=2024-12-31")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().unwrap();

    // Only months with records appear, ascending
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["month"], "2024-01");
    assert_eq!(rows[0]["total_days"], 2);
    assert_eq!(rows[0]["present_days"], 1);
    assert_eq!(rows[0]["absent_days"], 1);
    assert_eq!(rows[0]["present_percentage"], 50.0);
    assert_eq!(rows[1]["month"], "2024-02");
    assert_eq!(rows[1]["total_days"], 2);
    assert_eq!(rows[1]["present_days"], 2);
    assert_eq!(rows[1]["absent_days"], 0);
    assert_eq!(rows[1]["present_percentage"], 100.0);

    Ok(())
}

#[actix_web::test]
async fn test_monthly_report_range_filters_months() -> Result<()> {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001").await;
    insert_attendance(&pool, "EMP001", "2024-01-01", "Present").await;
    insert_attendance(&pool, "EMP001", "2024-02-01", "Present").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/monthly/EMP001?start_date=2024-02-01&end_date=2024-02-29")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["month"], "2024-02");

    Ok(())
}

#[actix_web::test]
async fn test_monthly_report_requires_both_bounds() -> Result<()> {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/monthly/EMP001")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/reports/attendance/monthly/EMP001?start_date=2024-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn test_monthly_report_unknown_employee_is_not_found() -> Result<()> {
    let pool = test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/monthly/GHOST?start_date=2024-01-01&end_date=2024-12-31")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn test_org_summary_empty_database_is_all_zero() -> Result<()> {
    let pool = test_pool().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/summary")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_records"], 0);
    assert_eq!(body["present_records"], 0);
    assert_eq!(body["absent_records"], 0);
    assert_eq!(body["present_percentage"], 0.0);

    Ok(())
}

#[actix_web::test]
async fn test_org_summary_spans_employees() -> Result<()> {
    let pool = test_pool().await;
    seed_employee(&pool, "EMP001").await;
    seed_employee(&pool, "EMP002").await;
    insert_attendance(&pool, "EMP001", "2024-01-01", "Present").await;
    insert_attendance(&pool, "EMP001", "2024-01-02", "Absent").await;
    insert_attendance(&pool, "EMP002", "2024-01-01", "Present").await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/reports/attendance/summary")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_records"], 3);
    assert_eq!(body["present_records"], 2);
    assert_eq!(body["absent_records"], 1);
    assert_eq!(body["present_percentage"], 66.67);

    // Bounded to the second day only
    let req = test::TestRequest::get()
        .uri("/reports/attendance/summary?start_date=2024-01-02&end_date=2024-01-02")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_records"], 1);
    assert_eq!(body["present_records"], 0);
    assert_eq!(body["present_percentage"], 0.0);

    Ok(())
}
