//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A user with the same identifier is already stored.
        Duplicate { user_id: UserId } => "user {user_id} already exists",
        /// The user to update is not stored.
        Missing { user_id: UserId } => "user {user_id} does not exist",
    }
}

/// Port for reading and writing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Overwrite an existing user.
    async fn update(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Every stored user ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}
