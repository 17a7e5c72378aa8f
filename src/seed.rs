use crate::model::attendance::AttendanceStatus;
use chrono::{Duration, Local};
use rand::Rng;
use rand::seq::IndexedRandom;
use sqlx::SqlitePool;
use tracing::info;

pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "HR",
    "Finance",
    "Sales",
    "Marketing",
    "Operations",
    "Support",
    "IT",
];

pub const EMPLOYEES_DATA: [(&str, &str); 40] = [
    ("Aarav Sharma", "aarav.sharma@company.com"),
    ("Vivaan Verma", "vivaan.verma@company.com"),
    ("Aditya Singh", "aditya.singh@company.com"),
    ("Rohan Mehta", "rohan.mehta@company.com"),
    ("Arjun Patel", "arjun.patel@company.com"),
    ("Kunal Gupta", "kunal.gupta@company.com"),
    ("Nikhil Malhotra", "nikhil.malhotra@company.com"),
    ("Siddharth Jain", "siddharth.jain@company.com"),
    ("Amit Khanna", "amit.khanna@company.com"),
    ("Rahul Iyer", "rahul.iyer@company.com"),
    ("Ananya Gupta", "ananya.gupta@company.com"),
    ("Priya Sharma", "priya.sharma@company.com"),
    ("Neha Verma", "neha.verma@company.com"),
    ("Kriti Kapoor", "kriti.kapoor@company.com"),
    ("Pooja Nair", "pooja.nair@company.com"),
    ("Sneha Rao", "sneha.rao@company.com"),
    ("Ritika Bansal", "ritika.bansal@company.com"),
    ("Ishita Chawla", "ishita.chawla@company.com"),
    ("Aditi Kulkarni", "aditi.kulkarni@company.com"),
    ("Simran Kaur", "simran.kaur@company.com"),
    ("Mohit Aggarwal", "mohit.aggarwal@company.com"),
    ("Deepak Yadav", "deepak.yadav@company.com"),
    ("Suresh Reddy", "suresh.reddy@company.com"),
    ("Manish Pandey", "manish.pandey@company.com"),
    ("Vikas Mishra", "vikas.mishra@company.com"),
    ("Sunil Chauhan", "sunil.chauhan@company.com"),
    ("Rajeev Saxena", "rajeev.saxena@company.com"),
    ("Pradeep Arora", "pradeep.arora@company.com"),
    ("Alok Srivastava", "alok.srivastava@company.com"),
    ("Ashish Tiwari", "ashish.tiwari@company.com"),
    ("Kavita Joshi", "kavita.joshi@company.com"),
    ("Meena Pillai", "meena.pillai@company.com"),
    ("Rashmi Deshpande", "rashmi.deshpande@company.com"),
    ("Nandita Ghosh", "nandita.ghosh@company.com"),
    ("Shalini Agarwal", "shalini.agarwal@company.com"),
    ("Divya Saxena", "divya.saxena@company.com"),
    ("Preeti Arvind", "preeti.arvind@company.com"),
    ("Anjali Bhat", "anjali.bhat@company.com"),
    ("Tanvi Kulkarni", "tanvi.kulkarni@company.com"),
    ("Riya Sengupta", "riya.sengupta@company.com"),
];

/// Days of history generated before today.
pub const ATTENDANCE_DAYS: i64 = 30;

/// Tops the directory up to the roster size. Safe to re-run.
///
/// Numbering continues from the current headcount, so a partially seeded
/// directory keeps its EMP ids stable.
async fn seed_employees<R: Rng>(pool: &SqlitePool, rng: &mut R) -> Result<(), sqlx::Error> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await? as usize;

    if existing >= EMPLOYEES_DATA.len() {
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    for (offset, &(name, email)) in EMPLOYEES_DATA[existing..].iter().enumerate() {
        let employee_id = format!("EMP{:03}", existing + offset + 1);
        let department = DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())];

        sqlx::query(
            "INSERT INTO employees (employee_id, full_name, email, department) VALUES (?, ?, ?, ?)",
        )
        .bind(&employee_id)
        .bind(name)
        .bind(email)
        .bind(department)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(
        "Seeded {} employees ({} already present)",
        EMPLOYEES_DATA.len() - existing,
        existing
    );
    Ok(())
}

/// Backfills attendance for the last `ATTENDANCE_DAYS` days, excluding today.
/// Existing (employee, date) keys are left untouched.
async fn seed_attendance<R: Rng>(pool: &SqlitePool, rng: &mut R) -> Result<(), sqlx::Error> {
    let employee_ids =
        sqlx::query_scalar::<_, String>("SELECT employee_id FROM employees ORDER BY employee_id")
            .fetch_all(pool)
            .await?;

    if employee_ids.is_empty() {
        return Ok(());
    }

    let today = Local::now().date_naive();
    let mut inserted = 0u32;
    let mut tx = pool.begin().await?;

    for employee_id in &employee_ids {
        for days_back in 1..=ATTENDANCE_DAYS {
            let date = today - Duration::days(days_back);

            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM attendance WHERE employee_id = ? AND date = ?)",
            )
            .bind(employee_id)
            .bind(date)
            .fetch_one(&mut *tx)
            .await?;

            if exists {
                continue;
            }

            let status = if rng.random_bool(0.75) {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };

            sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
                .bind(employee_id)
                .bind(date)
                .bind(status)
                .execute(&mut *tx)
                .await?;
            inserted += 1;
        }
    }

    tx.commit().await?;
    info!("Seeded {} historical attendance records", inserted);
    Ok(())
}

/// Marks a random 60% of employees for today, but only when today has no
/// records yet. Leaving the rest unmarked keeps the dashboard snapshot
/// realistic.
async fn seed_today_partial<R: Rng>(pool: &SqlitePool, rng: &mut R) -> Result<(), sqlx::Error> {
    let today = Local::now().date_naive();

    let today_count =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE date = ?")
            .bind(today)
            .fetch_one(pool)
            .await?;

    if today_count > 0 {
        return Ok(());
    }

    let employee_ids =
        sqlx::query_scalar::<_, String>("SELECT employee_id FROM employees ORDER BY employee_id")
            .fetch_all(pool)
            .await?;

    let sample_size = (employee_ids.len() as f64 * 0.6) as usize;
    let sampled: Vec<&String> = employee_ids.choose_multiple(rng, sample_size).collect();

    let mut tx = pool.begin().await?;

    for employee_id in &sampled {
        let status = if rng.random_bool(0.8) {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        };

        sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
            .bind(employee_id.as_str())
            .bind(today)
            .bind(status)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!("Seeded today's attendance for {} employees", sampled.len());
    Ok(())
}

/// Runs all three seeding phases. Idempotent: re-running adds nothing once
/// the directory and history are fully populated.
pub async fn run_seed<R: Rng>(pool: &SqlitePool, rng: &mut R) -> Result<(), sqlx::Error> {
    seed_employees(pool, rng).await?;
    seed_attendance(pool, rng).await?;
    seed_today_partial(pool, rng).await?;
    Ok(())
}
