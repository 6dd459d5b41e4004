//! Identity phase: users and staff profiles
//!
//! Users are upserted by email, concurrently — none depends on another's
//! result. Staff profiles follow once the STAFF users exist.

use futures::future::try_join_all;

use crate::db::models::{StaffCreate, UserCreate, UserRole};
use crate::db::repository::{StaffRepository, UserRepository};
use crate::utils::{AppError, AppResult};

/// (email, name, role, phone)
const USERS: &[(&str, &str, UserRole, Option<&str>)] = &[
    (
        "admin@banquet.example",
        "Avery Quinn",
        UserRole::Admin,
        Some("+1-555-0100"),
    ),
    (
        "manager@banquet.example",
        "Morgan Reyes",
        UserRole::Manager,
        Some("+1-555-0101"),
    ),
    (
        "sofia.martin@client.example",
        "Sofia Martin",
        UserRole::Client,
        Some("+1-555-0201"),
    ),
    (
        "derek.chen@client.example",
        "Derek Chen",
        UserRole::Client,
        Some("+1-555-0202"),
    ),
    (
        "amara.osei@client.example",
        "Amara Osei",
        UserRole::Client,
        None,
    ),
    (
        "chef.luca@banquet.example",
        "Luca Moretti",
        UserRole::Staff,
        Some("+1-555-0301"),
    ),
    (
        "sous.priya@banquet.example",
        "Priya Nair",
        UserRole::Staff,
        Some("+1-555-0302"),
    ),
    (
        "server.tom@banquet.example",
        "Tom Becker",
        UserRole::Staff,
        None,
    ),
    (
        "server.elena@banquet.example",
        "Elena Vasquez",
        UserRole::Staff,
        None,
    ),
    (
        "driver.sam@banquet.example",
        "Sam Okafor",
        UserRole::Staff,
        Some("+1-555-0305"),
    ),
    (
        "coord.jade@banquet.example",
        "Jade Wheeler",
        UserRole::Staff,
        Some("+1-555-0306"),
    ),
];

/// (staff email, position, hourly rate, skills, availability)
const STAFF_PROFILES: &[(&str, &str, f64, &[&str], &[&str])] = &[
    (
        "chef.luca@banquet.example",
        "Head Chef",
        42.0,
        &["menu design", "plating", "food safety"],
        &["MON", "TUE", "WED", "THU", "FRI", "SAT"],
    ),
    (
        "sous.priya@banquet.example",
        "Sous Chef",
        31.5,
        &["prep", "sauces", "pastry"],
        &["TUE", "WED", "THU", "FRI", "SAT"],
    ),
    (
        "server.tom@banquet.example",
        "Server",
        18.0,
        &["table service", "bar service"],
        &["THU", "FRI", "SAT", "SUN"],
    ),
    (
        "server.elena@banquet.example",
        "Server",
        18.5,
        &["table service", "wine service"],
        &["WED", "FRI", "SAT", "SUN"],
    ),
    (
        "driver.sam@banquet.example",
        "Driver",
        21.0,
        &["delivery", "equipment handling"],
        &["MON", "WED", "FRI", "SAT"],
    ),
    (
        "coord.jade@banquet.example",
        "Event Coordinator",
        26.0,
        &["client liaison", "floor management", "vendor coordination"],
        &["MON", "TUE", "THU", "FRI", "SAT", "SUN"],
    ),
];

pub(super) async fn seed(
    users: &UserRepository,
    staff: &StaffRepository,
    password: &str,
) -> AppResult<()> {
    // Independent creations, dispatched concurrently
    try_join_all(USERS.iter().map(|(email, name, role, phone)| {
        let data = UserCreate {
            email: (*email).to_string(),
            name: (*name).to_string(),
            password: password.to_string(),
            role: *role,
            phone: phone.map(str::to_string),
        };
        async move { users.upsert(data).await }
    }))
    .await?;

    // One profile per STAFF user, keyed by the user link
    for (email, position, hourly_rate, skills, availability) in STAFF_PROFILES {
        let user = users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("seeded user {email} missing")))?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::database("user row without id"))?;
        staff
            .upsert(StaffCreate {
                user: user_id,
                position: (*position).to_string(),
                hourly_rate: *hourly_rate,
                skills: skills.iter().map(|s| s.to_string()).collect(),
                availability: availability.iter().map(|s| s.to_string()).collect(),
            })
            .await?;
    }

    Ok(())
}

/// 运行结束时打印的固定测试账号表 (角色 → 邮箱 → 共享密码)
pub fn print_test_credentials(password: &str) {
    println!();
    println!("  Test credentials (all accounts share one password)");
    println!("  --------------------------------------------------");
    for (email, _, role, _) in USERS {
        println!("  {:<8} {email}", role.as_str());
    }
    println!("  password: {password}");
    println!();
}
