//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{ReviewError, User, UserId};

/// Domain use-case port for toggling user activity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Set the activity flag of a single user.
    ///
    /// Open reviews of the user are left untouched.
    async fn set_user_active(&self, user_id: &UserId, is_active: bool)
    -> Result<User, ReviewError>;
}
