//! Authorization policy
//!
//! Every role or ownership decision in the HTTP layer goes through these
//! functions; handlers never compare role strings directly. Keeping the
//! rules in one place means one test suite covers them and one change
//! adjusts them.

use crate::domain::{DomainError, DomainResult};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Admin-only operations (user management, hostel moderation).
pub fn require_admin(user: &AuthenticatedUser) -> DomainResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(DomainError::Forbidden("Admin access required".to_string()))
    }
}

/// Operations on a user account: the account holder or an admin.
pub fn require_self_or_admin(user: &AuthenticatedUser, target_user_id: &str) -> DomainResult<()> {
    if user.is_admin() || user.user_id == target_user_id {
        Ok(())
    } else {
        Err(DomainError::Forbidden(
            "You can only access your own account".to_string(),
        ))
    }
}

/// Operations on an owned resource (hostel, room): the resource owner or
/// an admin.
pub fn require_owner_or_admin(user: &AuthenticatedUser, owner_id: &str) -> DomainResult<()> {
    if user.is_admin() || user.user_id == owner_id {
        Ok(())
    } else {
        Err(DomainError::Forbidden(
            "You do not own this resource".to_string(),
        ))
    }
}

/// Operations restricted to one role (e.g. only owners create hostels).
pub fn require_role(user: &AuthenticatedUser, role: &str) -> DomainResult<()> {
    if user.is_admin() || user.role == role {
        Ok(())
    } else {
        Err(DomainError::Forbidden(format!(
            "Requires {} role",
            role
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: id.to_string(),
            email: format!("{}@test.dev", id),
            role: role.to_string(),
        }
    }

    #[test]
    fn admin_passes_everything() {
        let admin = user("u1", "admin");
        assert!(require_admin(&admin).is_ok());
        assert!(require_self_or_admin(&admin, "u2").is_ok());
        assert!(require_owner_or_admin(&admin, "u2").is_ok());
        assert!(require_role(&admin, "owner").is_ok());
    }

    #[test]
    fn student_is_not_admin() {
        let student = user("u1", "student");
        assert!(matches!(
            require_admin(&student),
            Err(DomainError::Forbidden(_))
        ));
    }

    #[test]
    fn self_access_allowed_other_denied() {
        let student = user("u1", "student");
        assert!(require_self_or_admin(&student, "u1").is_ok());
        assert!(require_self_or_admin(&student, "u2").is_err());
    }

    #[test]
    fn ownership_is_checked() {
        let owner = user("u1", "owner");
        assert!(require_owner_or_admin(&owner, "u1").is_ok());
        assert!(require_owner_or_admin(&owner, "u2").is_err());
    }

    #[test]
    fn role_gate() {
        let student = user("u1", "student");
        assert!(require_role(&student, "student").is_ok());
        assert!(require_role(&student, "owner").is_err());
    }
}
