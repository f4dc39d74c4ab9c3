pub mod complaint;
pub mod fee;
pub mod food_feedback;
pub mod health_record;
pub mod leave;
pub mod notification;
pub mod room;
pub mod staff;
pub mod student;

use hostelhub_store::models::Role;

use crate::error::ApiError;
use crate::extractors::role::RoleUser;

pub(crate) fn require_staff(user: &RoleUser) -> Result<(), ApiError> {
    if !user.role.is_staff() {
        return Err(ApiError::Forbidden("Staff role required".to_string()));
    }
    Ok(())
}

pub(crate) fn require_manager(user: &RoleUser) -> Result<(), ApiError> {
    if !matches!(user.role, Role::Warden | Role::Admin) {
        return Err(ApiError::Forbidden("Warden or admin role required".to_string()));
    }
    Ok(())
}

pub(crate) fn require_admin(user: &RoleUser) -> Result<(), ApiError> {
    if user.role != Role::Admin {
        return Err(ApiError::Forbidden("Admin role required".to_string()));
    }
    Ok(())
}
