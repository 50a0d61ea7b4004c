//! Data seeder
//!
//! Writes the default users and a demo employee roster to the configured
//! data directory, replacing whatever is there.
//!
//! ```text
//! cargo run --bin seed
//! ```

use chrono::Utc;
use uuid::Uuid;

use roster_server::db::models::{Employee, User};
use roster_server::db::store::{JsonStore, RecordStore};
use roster_server::{Config, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "Seeding collections");

    let users = User::seed_defaults()
        .map_err(|e| anyhow::anyhow!("Failed to hash seed passwords: {e}"))?;
    JsonStore::<User>::new(&config.data_dir, "users")
        .save(&users)
        .await?;
    tracing::info!("{} users seeded (admin/admin123, user/user123)", users.len());

    let employees = seed_employees();
    JsonStore::<Employee>::new(&config.data_dir, "employees")
        .save(&employees)
        .await?;
    tracing::info!("{} employees seeded", employees.len());

    Ok(())
}

fn employee(
    full_name: &str,
    username: &str,
    email: &str,
    phone: &str,
    position: &str,
    department: &str,
    avatar: u32,
) -> Employee {
    let now = Utc::now();
    Employee {
        id: Uuid::new_v4().to_string(),
        full_name: full_name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        avatar_url: Some(format!("https://i.pravatar.cc/150?img={avatar}")),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn seed_employees() -> Vec<Employee> {
    vec![
        employee(
            "John Doe",
            "johndoe",
            "john.doe@company.com",
            "+1 (555) 123-4567",
            "Senior Software Engineer",
            "Engineering",
            1,
        ),
        employee(
            "Jane Smith",
            "janesmith",
            "jane.smith@company.com",
            "+1 (555) 234-5678",
            "Product Manager",
            "Product",
            2,
        ),
        employee(
            "Michael Johnson",
            "michaelj",
            "michael.johnson@company.com",
            "+1 (555) 345-6789",
            "UX Designer",
            "Design",
            3,
        ),
        employee(
            "Emily Davis",
            "emilyd",
            "emily.davis@company.com",
            "+1 (555) 456-7890",
            "Marketing Director",
            "Marketing",
            4,
        ),
        employee(
            "David Wilson",
            "davidw",
            "david.wilson@company.com",
            "+1 (555) 567-8901",
            "DevOps Engineer",
            "Engineering",
            5,
        ),
        employee(
            "Sarah Brown",
            "sarahb",
            "sarah.brown@company.com",
            "+1 (555) 678-9012",
            "HR Manager",
            "Human Resources",
            6,
        ),
        employee(
            "Robert Taylor",
            "robertt",
            "robert.taylor@company.com",
            "+1 (555) 789-0123",
            "Data Analyst",
            "Analytics",
            7,
        ),
        employee(
            "Lisa Anderson",
            "lisaa",
            "lisa.anderson@company.com",
            "+1 (555) 890-1234",
            "Sales Manager",
            "Sales",
            8,
        ),
        employee(
            "James Martinez",
            "jamesm",
            "james.martinez@company.com",
            "+1 (555) 901-2345",
            "QA Engineer",
            "Engineering",
            9,
        ),
        employee(
            "Jennifer Garcia",
            "jenniferr",
            "jennifer.garcia@company.com",
            "+1 (555) 012-3456",
            "Content Writer",
            "Marketing",
            10,
        ),
        employee(
            "William Lee",
            "williaml",
            "william.lee@company.com",
            "+1 (555) 123-4560",
            "Backend Developer",
            "Engineering",
            11,
        ),
        employee(
            "Amanda White",
            "amandaw",
            "amanda.white@company.com",
            "+1 (555) 234-5601",
            "Frontend Developer",
            "Engineering",
            12,
        ),
    ]
}
