use crate::api::attendance::{AttendanceRangeQuery, CreateAttendance};
use crate::api::dashboard::{DashboardToday, TrendPoint};
use crate::api::employee::{CreateEmployee, EmployeeQuery};
use crate::api::reports::{
    EmployeeAttendanceReport, MonthlyAttendanceReport, MonthlyRangeQuery,
    OrganizationAttendanceSummary, ReportRangeQuery,
};
use crate::model::attendance::{Attendance, AttendanceStatus};
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Attendance API",
        version = "1.0.0",
        description = r#"
## Human Resource Management System (HRMS)

This API powers a lightweight **HRMS backend** focused on employee records and
daily attendance tracking.

### 🔹 Key Features
- **Employee Management**
  - Create, search, and remove employee profiles
- **Attendance Tracking**
  - One record per employee per day, Present or Absent
- **Reports**
  - Per-employee summaries, monthly breakdowns, and organization-wide totals
- **Dashboard**
  - Today's snapshot and a 30-day attendance trend

### 📦 Response Format
- JSON-based RESTful responses
- Errors carry a single `message` field

### 🚀 Usage
Use this API to build:
- Attendance dashboards
- Employee self-service portals
- HR reporting tools

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,

        crate::api::reports::employee_report,
        crate::api::reports::monthly_report,
        crate::api::reports::organization_summary,

        crate::api::dashboard::today_snapshot,
        crate::api::dashboard::last_30_days
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeQuery,
            Attendance,
            AttendanceStatus,
            CreateAttendance,
            AttendanceRangeQuery,
            EmployeeAttendanceReport,
            MonthlyAttendanceReport,
            OrganizationAttendanceSummary,
            ReportRangeQuery,
            MonthlyRangeQuery,
            DashboardToday,
            TrendPoint
        )
    ),
    tags(
        (name = "Employees", description = "Employee directory APIs"),
        (name = "Attendance", description = "Daily attendance APIs"),
        (name = "Reports", description = "Attendance aggregation APIs"),
        (name = "Dashboard", description = "Live overview APIs"),
    )
)]
pub struct ApiDoc;
