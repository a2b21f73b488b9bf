//! Role and ownership checks. Every check fails closed.

use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::{AppError, AppResult};
use crate::extractor::CurrentUser;

pub const ADMIN_ONLY: &[RoleEnum] = &[RoleEnum::Admin];
pub const STAFF: &[RoleEnum] = &[RoleEnum::Admin, RoleEnum::Teacher];
pub const TEACHER_ONLY: &[RoleEnum] = &[RoleEnum::Teacher];
pub const STUDENT_ONLY: &[RoleEnum] = &[RoleEnum::Student];

pub fn authorize(user: &CurrentUser, required_roles: &[RoleEnum]) -> bool {
    required_roles.contains(&user.role())
}

pub fn require_role(user: &CurrentUser, required_roles: &[RoleEnum]) -> AppResult<()> {
    if authorize(user, required_roles) {
        Ok(())
    } else {
        Err(AppError::forbidden("Not authorized to perform this action"))
    }
}

/// True when `owner` is the caller's linked profile. Callers without a
/// linked profile own nothing.
pub fn owns(user: &CurrentUser, owner: Option<Uuid>) -> bool {
    match (user.profile, owner) {
        (Some(profile), Some(owner)) => profile.id() == owner,
        _ => false,
    }
}

pub fn require_owner(user: &CurrentUser, owner: Option<Uuid>) -> AppResult<()> {
    if owns(user, owner) {
        Ok(())
    } else {
        Err(AppError::forbidden("Not authorized to modify this resource"))
    }
}

/// The caller's teacher profile id, or `Forbidden` for anyone else.
pub fn require_teacher(user: &CurrentUser) -> AppResult<Uuid> {
    require_role(user, TEACHER_ONLY)?;
    user.teacher_id()
        .ok_or_else(|| AppError::forbidden("Teacher profile not linked"))
}

/// The caller's student profile id, or `Forbidden` for anyone else.
pub fn require_student(user: &CurrentUser) -> AppResult<Uuid> {
    require_role(user, STUDENT_ONLY)?;
    user.student_id()
        .ok_or_else(|| AppError::forbidden("Student profile not linked"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::user;
    use crate::extractor::Profile;

    fn caller(role: RoleEnum, profile: Option<Profile>) -> CurrentUser {
        CurrentUser {
            user: user::Model {
                id: Uuid::new_v4(),
                email: "someone@dept.edu".to_string(),
                password: String::new(),
                role,
                created_at: chrono::Utc::now().naive_utc(),
            },
            profile,
        }
    }

    #[test]
    fn authorize_matches_listed_roles_only() {
        let teacher = caller(RoleEnum::Teacher, None);
        assert!(authorize(&teacher, STAFF));
        assert!(!authorize(&teacher, ADMIN_ONLY));
        assert!(!authorize(&teacher, &[]));
    }

    #[test]
    fn require_role_is_forbidden_for_other_roles() {
        let student = caller(RoleEnum::Student, None);
        let err = require_role(&student, STAFF).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn owner_is_matched_by_profile_id() {
        let teacher_id = Uuid::new_v4();
        let teacher = caller(RoleEnum::Teacher, Some(Profile::Teacher(teacher_id)));
        assert!(owns(&teacher, Some(teacher_id)));
        assert!(!owns(&teacher, Some(Uuid::new_v4())));
        assert!(!owns(&teacher, None));
    }

    #[test]
    fn unlinked_caller_owns_nothing() {
        let teacher = caller(RoleEnum::Teacher, None);
        assert!(!owns(&teacher, Some(Uuid::new_v4())));
        assert!(require_owner(&teacher, Some(Uuid::new_v4())).is_err());
        assert!(require_teacher(&teacher).is_err());
    }

    #[test]
    fn require_teacher_returns_profile_id() {
        let teacher_id = Uuid::new_v4();
        let teacher = caller(RoleEnum::Teacher, Some(Profile::Teacher(teacher_id)));
        assert_eq!(require_teacher(&teacher).unwrap(), teacher_id);

        let admin = caller(RoleEnum::Admin, Some(Profile::Admin(Uuid::new_v4())));
        assert!(require_teacher(&admin).is_err());
    }
}
