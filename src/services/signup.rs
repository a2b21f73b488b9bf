//! Account creation for pre-approved profiles and administrators.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::auth::password::hash_password;
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::{admin, user};
use crate::error::{AppError, AppResult};
use crate::repositories::{AdminRepository, StudentRepository, TeacherRepository, UserRepository};

pub struct SignupRequest {
    pub email: String,
    pub registration_number: String,
    pub password: String,
}

pub struct AdminAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

async fn ensure_email_free(db: &DatabaseConnection, email: &str) -> AppResult<()> {
    if UserRepository::new(db).find_by_email(email).await?.is_some() {
        return Err(AppError::already_exists("Email already registered"));
    }
    Ok(())
}

/// Creates a student account and links it to the matching pre-approved row.
///
/// The user insert and the claim share one transaction. The claim only
/// succeeds while the row is unclaimed, so a racing signup rolls back.
pub async fn student_signup(
    db: &DatabaseConnection,
    bcrypt_cost: u32,
    request: SignupRequest,
) -> AppResult<user::Model> {
    let profile = StudentRepository::new(db)
        .find_for_signup(&request.email, &request.registration_number)
        .await?
        .ok_or_else(|| AppError::not_found("Student email or registration no. not pre-approved"))?;
    if profile.user_id.is_some() {
        return Err(AppError::already_linked("This student already signed up"));
    }
    ensure_email_free(db, &request.email).await?;

    let hashed = hash_password(&request.password, bcrypt_cost)?;

    let txn = db.begin().await?;
    let user = UserRepository::new(&txn)
        .create(request.email, hashed, RoleEnum::Student)
        .await?;
    if !StudentRepository::new(&txn).claim(profile.id, user.id).await? {
        txn.rollback().await?;
        return Err(AppError::already_linked("This student already signed up"));
    }
    txn.commit().await?;

    tracing::info!(user_id = %user.id, student_id = %profile.id, "student signed up");
    Ok(user)
}

pub async fn teacher_signup(
    db: &DatabaseConnection,
    bcrypt_cost: u32,
    request: SignupRequest,
) -> AppResult<user::Model> {
    let profile = TeacherRepository::new(db)
        .find_for_signup(&request.email, &request.registration_number)
        .await?
        .ok_or_else(|| AppError::not_found("Teacher email or registration no. not pre-approved"))?;
    if profile.user_id.is_some() {
        return Err(AppError::already_linked("This teacher already signed up"));
    }
    ensure_email_free(db, &request.email).await?;

    let hashed = hash_password(&request.password, bcrypt_cost)?;

    let txn = db.begin().await?;
    let user = UserRepository::new(&txn)
        .create(request.email, hashed, RoleEnum::Teacher)
        .await?;
    if !TeacherRepository::new(&txn).claim(profile.id, user.id).await? {
        txn.rollback().await?;
        return Err(AppError::already_linked("This teacher already signed up"));
    }
    txn.commit().await?;

    tracing::info!(user_id = %user.id, teacher_id = %profile.id, "teacher signed up");
    Ok(user)
}

/// Creates a user with the Admin role and its admin profile row.
pub async fn create_admin_account(
    db: &DatabaseConnection,
    bcrypt_cost: u32,
    account: AdminAccount,
) -> AppResult<(user::Model, admin::Model)> {
    ensure_email_free(db, &account.email).await?;

    let hashed = hash_password(&account.password, bcrypt_cost)?;

    let txn = db.begin().await?;
    let user = UserRepository::new(&txn)
        .create(account.email.clone(), hashed.clone(), RoleEnum::Admin)
        .await?;
    let admin = AdminRepository::new(&txn)
        .create(user.id, account.name, account.email, account.phone, hashed)
        .await?;
    txn.commit().await?;

    tracing::info!(user_id = %user.id, admin_id = %admin.id, "admin account created");
    Ok((user, admin))
}
