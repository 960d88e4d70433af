//! Demo directory data for local development.
//!
//! Seeding runs once at startup when `seed.demo_data` is enabled and the
//! stores are empty. Secrets go through the hasher supplied by the caller,
//! so each seeded credential carries its own salt.

use chrono::NaiveDate;
use tracing::info;

use roster_core::AppError;
use roster_core::config::seed::SeedConfig;
use roster_core::result::AppResult;
use roster_core::types::EmployeeId;
use roster_entity::{Credential, Employee, EmployeeRole};

use crate::traits::{CredentialStore, EmployeeStore};

/// Populate empty stores with the demo directory.
///
/// `hash_secret` turns the configured demo secret into a stored hash. A
/// no-op when seeding is disabled or records already exist.
pub async fn seed_demo_directory<F>(
    config: &SeedConfig,
    employees: &dyn EmployeeStore,
    credentials: &dyn CredentialStore,
    hash_secret: F,
) -> AppResult<()>
where
    F: Fn(&str) -> AppResult<String>,
{
    if !config.demo_data {
        return Ok(());
    }
    if employees.count().await? > 0 || credentials.count().await? > 0 {
        return Ok(());
    }

    for record in demo_employees()? {
        employees.insert(record).await?;
    }

    // admin@company.com is a bootstrap login with no directory record.
    for (email, role) in [
        ("admin@company.com", EmployeeRole::Admin),
        ("john@company.com", EmployeeRole::Employee),
    ] {
        let secret_hash = hash_secret(&config.demo_secret)?;
        credentials
            .insert(Credential::new(email, secret_hash, role))
            .await?;
    }

    info!(
        employees = employees.count().await?,
        credentials = credentials.count().await?,
        "Demo directory seeded"
    );
    Ok(())
}

/// The demo personnel records, in presentation order.
fn demo_employees() -> AppResult<Vec<Employee>> {
    Ok(vec![
        employee(
            "John Doe",
            "john@company.com",
            30,
            "Senior Developer",
            &["JavaScript", "React", "Node.js"],
            95.0,
            "Engineering",
            75000.0,
            date(2020, 1, 15)?,
            EmployeeRole::Employee,
        ),
        employee(
            "Jane Smith",
            "jane@company.com",
            28,
            "Product Manager",
            &["Product Strategy", "Analytics", "UX Design"],
            98.0,
            "Product",
            80000.0,
            date(2019, 3, 20)?,
            EmployeeRole::Employee,
        ),
        employee(
            "Mike Johnson",
            "mike@company.com",
            35,
            "Engineering Manager",
            &["Team Leadership", "Architecture", "DevOps"],
            92.0,
            "Engineering",
            95000.0,
            date(2018, 6, 10)?,
            EmployeeRole::Admin,
        ),
        employee(
            "Sarah Wilson",
            "sarah@company.com",
            26,
            "UI/UX Designer",
            &["Design Systems", "Figma", "User Research"],
            97.0,
            "Design",
            65000.0,
            date(2021, 9, 5)?,
            EmployeeRole::Employee,
        ),
        employee(
            "David Brown",
            "david@company.com",
            32,
            "DevOps Engineer",
            &["AWS", "Docker", "Kubernetes"],
            94.0,
            "Engineering",
            85000.0,
            date(2019, 11, 12)?,
            EmployeeRole::Employee,
        ),
    ])
}

#[allow(clippy::too_many_arguments)]
fn employee(
    name: &str,
    email: &str,
    age: u32,
    title: &str,
    skills: &[&str],
    attendance_rate: f64,
    department: &str,
    salary: f64,
    join_date: NaiveDate,
    role: EmployeeRole,
) -> Employee {
    Employee {
        id: EmployeeId::new(),
        name: name.to_string(),
        email: email.to_string(),
        age,
        title: title.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        attendance_rate,
        department: department.to_string(),
        salary,
        join_date,
        role,
    }
}

fn date(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::internal(format!("Invalid demo date: {year}-{month}-{day}")))
}
