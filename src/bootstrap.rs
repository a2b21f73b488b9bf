use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::repositories::UserRepository;
use crate::services::signup::{AdminAccount, create_admin_account};

/// Creates the configured admin account on first start.
pub async fn initialize_admin_user(db: &DatabaseConnection, config: &Config) -> Result<()> {
    let existing_admin = UserRepository::new(db)
        .find_by_email(&config.admin_email)
        .await
        .context("Failed to check existing admin")?;

    if existing_admin.is_some() {
        tracing::info!("Admin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default admin user...");

    let (user, _) = create_admin_account(
        db,
        config.bcrypt_cost,
        AdminAccount {
            name: config.admin_name.clone(),
            email: config.admin_email.clone(),
            phone: config.admin_phone.clone(),
            password: config.admin_password.clone(),
        },
    )
    .await
    .context("Failed to create admin user")?;

    tracing::info!(user_id = %user.id, email = %user.email, "admin user created");
    tracing::warn!("Please change the default admin password after first login");

    Ok(())
}
