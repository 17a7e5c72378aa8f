use crate::api::{attendance, dashboard, employee, reports};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{employee_id}
            .service(
                web::resource("/{employee_id}")
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            // /attendance
            .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
            // /attendance/{employee_id}
            .service(
                web::resource("/{employee_id}").route(web::get().to(attendance::get_attendance)),
            ),
    );

    cfg.service(
        web::scope("/reports")
            // /reports/attendance/employee/{employee_id}
            .service(
                web::resource("/attendance/employee/{employee_id}")
                    .route(web::get().to(reports::employee_report)),
            )
            // /reports/attendance/monthly/{employee_id}
            .service(
                web::resource("/attendance/monthly/{employee_id}")
                    .route(web::get().to(reports::monthly_report)),
            )
            // /reports/attendance/summary
            .service(
                web::resource("/attendance/summary")
                    .route(web::get().to(reports::organization_summary)),
            ),
    );

    cfg.service(
        web::scope("/dashboard")
            // /dashboard/today
            .service(web::resource("/today").route(web::get().to(dashboard::today_snapshot)))
            // /dashboard/last-30-days
            .service(
                web::resource("/last-30-days").route(web::get().to(dashboard::last_30_days)),
            ),
    );
}
