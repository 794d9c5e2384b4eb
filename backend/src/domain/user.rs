//! User data model.

use super::{TeamName, UserId};

/// Validation errors returned by [`User::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user name must not be empty")]
    EmptyName,
}

/// Team member who may author or review pull requests.
///
/// Users are created when a team is created and only updated afterwards.
///
/// # Examples
/// ```
/// use reviewer_service::domain::{TeamName, User, UserId};
///
/// let user = User::new(
///     UserId::new("u1").unwrap(),
///     "Alice",
///     TeamName::new("backend").unwrap(),
///     true,
/// )
/// .unwrap();
/// assert!(user.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    team_name: TeamName,
    is_active: bool,
}

impl User {
    /// Build a user, rejecting blank names.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        team_name: TeamName,
        is_active: bool,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            team_name,
            is_active,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Team that currently owns the user.
    pub fn team_name(&self) -> &TeamName {
        &self.team_name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Toggle the activity flag; inactive users are never picked as reviewers.
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }
}

#[cfg(test)]
mod tests;
