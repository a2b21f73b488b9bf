use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::dto::{
    AddStudentRequest, AddTeacherRequest, AdminSignupRequest, AdminSignupResponse,
    StudentQueryParams, TeacherQueryParams, UpdateAdminRequest, UpdateStudentMetaRequest,
    UpdateTeacherMetaRequest,
};
use crate::auth::password::hash_password;
use crate::entities::{admin, student, teacher};
use crate::error::{AppError, AppResult};
use crate::extractor::{AppJson, AppPath, AppQuery, CurrentUser};
use crate::policy::{self, ADMIN_ONLY};
use crate::repositories::{
    AdminRepository, AdminUpdate, StudentFilter, StudentRepository, TeacherFilter,
    TeacherRepository, UserRepository,
};
use crate::routes::MessageResponse;
use crate::services::signup::{self, AdminAccount};
use crate::state::AppState;
use crate::utils::pagination::{Paged, Pagination};
use crate::utils::patch::non_null;

pub fn create_route() -> Router<AppState> {
    Router::new()
        .route("/admin/signup", post(admin_signup))
        .route("/admin/me", get(get_admin_profile))
        .route("/admin/update", put(update_admin_profile))
        .route("/admin/add/student", post(add_student))
        .route("/admin/add/teacher", post(add_teacher))
        .route("/admin/update/student/{student_id}", put(update_student_meta))
        .route("/admin/update/teacher/{teacher_id}", put(update_teacher_meta))
        .route("/admin/students", get(list_students))
        .route("/admin/teachers", get(list_teachers))
        .route("/admin/student/{student_id}", delete(delete_student))
        .route("/admin/teacher/{teacher_id}", delete(delete_teacher))
        .route("/admin/user/{user_id}", delete(delete_user))
}

/// Self-service admin registration, only when enabled in configuration.
#[utoipa::path(
    post,
    path = "/admin/signup",
    request_body = AdminSignupRequest,
    responses(
        (status = 201, description = "Admin registered", body = AdminSignupResponse),
        (status = 400, description = "Email already registered"),
        (status = 403, description = "Admin signup disabled")
    ),
    tag = "Admin"
)]
pub async fn admin_signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AdminSignupRequest>,
) -> AppResult<(StatusCode, Json<AdminSignupResponse>)> {
    if !state.config.admin_signup_enabled {
        return Err(AppError::forbidden("Admin signup is disabled"));
    }

    let (user, _) = signup::create_admin_account(
        &state.db,
        state.config.bcrypt_cost,
        AdminAccount {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            password: payload.password,
        },
    )
    .await?;

    let access_token = state
        .jwt
        .create_jwt(user.id, user.role, state.config.jwt_expires_in)?;

    Ok((
        StatusCode::CREATED,
        Json(AdminSignupResponse {
            message: "Admin registered successfully".to_string(),
            access_token,
            token_type: "bearer".to_string(),
        }),
    ))
}

async fn load_admin(state: &AppState, caller: &CurrentUser) -> AppResult<admin::Model> {
    policy::require_role(caller, ADMIN_ONLY)?;
    AdminRepository::new(&state.db)
        .find_by_user_id(caller.id())
        .await?
        .ok_or_else(|| AppError::not_found("Admin profile not found."))
}

#[utoipa::path(
    get,
    path = "/admin/me",
    responses(
        (status = 200, description = "Admin profile", body = admin::Model),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Admin profile not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_admin_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> AppResult<Json<admin::Model>> {
    let admin = load_admin(&state, &caller).await?;
    Ok(Json(admin))
}

/// Partial update of the caller's own admin profile. A new password is
/// applied to the login account as well.
#[utoipa::path(
    put,
    path = "/admin/update",
    request_body = UpdateAdminRequest,
    responses(
        (status = 200, description = "Admin profile updated", body = admin::Model),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_admin_profile(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<UpdateAdminRequest>,
) -> AppResult<Json<admin::Model>> {
    let admin = load_admin(&state, &caller).await?;

    let password = match non_null("password", payload.password)? {
        Some(raw) => Some(hash_password(&raw, state.config.bcrypt_cost)?),
        None => None,
    };
    let updates = AdminUpdate {
        name: non_null("name", payload.name)?,
        phone: non_null("phone", payload.phone)?,
        password: password.clone(),
    };

    let txn = state.db.begin().await?;
    let updated = AdminRepository::new(&txn).update(admin, updates).await?;
    if let Some(hashed) = password {
        UserRepository::new(&txn)
            .update_password(caller.id(), hashed)
            .await?;
    }
    txn.commit().await?;

    Ok(Json(updated))
}

/// Pre-approves a student so they can sign up.
#[utoipa::path(
    post,
    path = "/admin/add/student",
    request_body = AddStudentRequest,
    responses(
        (status = 201, description = "Student pre-approved", body = student::Model),
        (status = 400, description = "Student already exists"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn add_student(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<AddStudentRequest>,
) -> AppResult<(StatusCode, Json<student::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let student_repo = StudentRepository::new(&state.db);
    if student_repo
        .find_by_registration_number(&payload.registration_number)
        .await?
        .is_some()
    {
        return Err(AppError::already_exists("Student already exists"));
    }

    let student = student_repo.create(payload.into()).await?;
    tracing::info!(student_id = %student.id, "student pre-approved");
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    post,
    path = "/admin/add/teacher",
    request_body = AddTeacherRequest,
    responses(
        (status = 201, description = "Teacher pre-approved", body = teacher::Model),
        (status = 400, description = "Teacher already exists"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn add_teacher(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppJson(payload): AppJson<AddTeacherRequest>,
) -> AppResult<(StatusCode, Json<teacher::Model>)> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let teacher_repo = TeacherRepository::new(&state.db);
    if teacher_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::already_exists(
            "Teacher with this email already exists",
        ));
    }
    if teacher_repo
        .find_by_registration_number(&payload.registration_number)
        .await?
        .is_some()
    {
        return Err(AppError::already_exists(
            "Teacher with this registration number already exists",
        ));
    }

    let teacher = teacher_repo.create(payload.into()).await?;
    tracing::info!(teacher_id = %teacher.id, "teacher pre-approved");
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// The login account linked to a profile keeps the profile's email.
/// Returns the account to update when the email actually changes.
async fn linked_email_change(
    state: &AppState,
    user_id: Option<Uuid>,
    current_email: &str,
    new_email: Option<&String>,
) -> AppResult<Option<(Uuid, String)>> {
    let (Some(user_id), Some(email)) = (user_id, new_email) else {
        return Ok(None);
    };
    if email == current_email {
        return Ok(None);
    }
    if let Some(existing) = UserRepository::new(&state.db).find_by_email(email).await? {
        if existing.id != user_id {
            return Err(AppError::already_exists("Email already registered"));
        }
    }
    Ok(Some((user_id, email.clone())))
}

#[utoipa::path(
    put,
    path = "/admin/update/student/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student id")),
    request_body = UpdateStudentMetaRequest,
    responses(
        (status = 200, description = "Student updated", body = student::Model),
        (status = 400, description = "Registration number or email already exists"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Student not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_student_meta(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(student_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateStudentMetaRequest>,
) -> AppResult<Json<student::Model>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let student_repo = StudentRepository::new(&state.db);
    let student = student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

    let updates = payload.into_update()?;
    if let Some(registration_number) = &updates.registration_number {
        if *registration_number != student.registration_number
            && student_repo
                .find_by_registration_number(registration_number)
                .await?
                .is_some()
        {
            return Err(AppError::already_exists(
                "Registration number already exists",
            ));
        }
    }

    let email_change =
        linked_email_change(&state, student.user_id, &student.email, updates.email.as_ref()).await?;

    let txn = state.db.begin().await?;
    let updated = StudentRepository::new(&txn).update(student, updates).await?;
    if let Some((user_id, email)) = email_change {
        UserRepository::new(&txn).update_email(user_id, email).await?;
    }
    txn.commit().await?;

    Ok(Json(updated))
}

#[utoipa::path(
    put,
    path = "/admin/update/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    request_body = UpdateTeacherMetaRequest,
    responses(
        (status = 200, description = "Teacher updated", body = teacher::Model),
        (status = 400, description = "Registration number or email already exists"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Teacher not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_teacher_meta(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(teacher_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateTeacherMetaRequest>,
) -> AppResult<Json<teacher::Model>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let teacher_repo = TeacherRepository::new(&state.db);
    let teacher = teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| AppError::not_found("Teacher not found"))?;

    let updates = payload.into_update()?;
    if let Some(registration_number) = &updates.registration_number {
        if *registration_number != teacher.registration_number
            && teacher_repo
                .find_by_registration_number(registration_number)
                .await?
                .is_some()
        {
            return Err(AppError::already_exists(
                "Registration number already exists",
            ));
        }
    }
    if let Some(email) = &updates.email {
        if *email != teacher.email && teacher_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::already_exists("Email already exists"));
        }
    }

    let email_change =
        linked_email_change(&state, teacher.user_id, &teacher.email, updates.email.as_ref()).await?;

    let txn = state.db.begin().await?;
    let updated = TeacherRepository::new(&txn).update(teacher, updates).await?;
    if let Some((user_id, email)) = email_change {
        UserRepository::new(&txn).update_email(user_id, email).await?;
    }
    txn.commit().await?;

    Ok(Json(updated))
}

#[utoipa::path(
    get,
    path = "/admin/students",
    params(StudentQueryParams),
    responses(
        (status = 200, description = "Students page", body = Paged<student::Model>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_students(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppQuery(params): AppQuery<StudentQueryParams>,
) -> AppResult<Json<Paged<student::Model>>> {
    policy::require_role(&caller, ADMIN_ONLY)?;
    let pagination = Pagination::new(params.page, params.page_size)?;

    let filter = StudentFilter {
        semester: params.semester,
        session: params.session,
        search: params.search,
    };
    let (students, total) = StudentRepository::new(&state.db)
        .find_all_with_pagination(filter, pagination)
        .await?;

    Ok(Json(Paged::new(students, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/admin/teachers",
    params(TeacherQueryParams),
    responses(
        (status = 200, description = "Teachers page", body = Paged<teacher::Model>),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_teachers(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppQuery(params): AppQuery<TeacherQueryParams>,
) -> AppResult<Json<Paged<teacher::Model>>> {
    policy::require_role(&caller, ADMIN_ONLY)?;
    let pagination = Pagination::new(params.page, params.page_size)?;

    let filter = TeacherFilter {
        department: params.department,
        search: params.search,
    };
    let (teachers, total) = TeacherRepository::new(&state.db)
        .find_all_with_pagination(filter, pagination)
        .await?;

    Ok(Json(Paged::new(teachers, total, pagination)))
}

/// Deletes the student profile, and its login account when linked.
#[utoipa::path(
    delete,
    path = "/admin/student/{student_id}",
    params(("student_id" = Uuid, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Student not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(student_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let student_repo = StudentRepository::new(&state.db);
    let student = student_repo
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::not_found("Student not found"))?;

    let txn = state.db.begin().await?;
    match student.user_id {
        Some(user_id) => {
            UserRepository::new(&txn).delete(user_id).await?;
        }
        None => {
            StudentRepository::new(&txn).delete(student.id).await?;
        }
    }
    txn.commit().await?;

    tracing::info!(student_id = %student.id, "student deleted");
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

#[utoipa::path(
    delete,
    path = "/admin/teacher/{teacher_id}",
    params(("teacher_id" = Uuid, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Teacher not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(teacher_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;

    let teacher_repo = TeacherRepository::new(&state.db);
    let teacher = teacher_repo
        .find_by_id(teacher_id)
        .await?
        .ok_or_else(|| AppError::not_found("Teacher not found"))?;

    let txn = state.db.begin().await?;
    match teacher.user_id {
        Some(user_id) => {
            UserRepository::new(&txn).delete(user_id).await?;
        }
        None => {
            TeacherRepository::new(&txn).delete(teacher.id).await?;
        }
    }
    txn.commit().await?;

    tracing::info!(teacher_id = %teacher.id, "teacher deleted");
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}

/// Deletes a login account together with its linked profile.
#[utoipa::path(
    delete,
    path = "/admin/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Cannot delete own account"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    caller: CurrentUser,
    AppPath(user_id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    policy::require_role(&caller, ADMIN_ONLY)?;
    if user_id == caller.id() {
        return Err(AppError::invalid_input("Cannot delete your own account"));
    }

    let user_repo = UserRepository::new(&state.db);
    user_repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    let txn = state.db.begin().await?;
    UserRepository::new(&txn).delete(user_id).await?;
    txn.commit().await?;

    tracing::info!(user_id = %user_id, "user deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
