//! User administration service.

use async_trait::async_trait;
use tracing::info;

use super::ports::{UserCommand, UsersQuery};
use super::review_ports::{ReviewStorePorts, map_user_error};
use super::{ReviewError, User, UserId};

/// Service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService {
    ports: ReviewStorePorts,
}

impl UserService {
    pub fn new(ports: ReviewStorePorts) -> Self {
        Self { ports }
    }
}

#[async_trait]
impl UserCommand for UserService {
    async fn set_user_active(&self, user_id: &UserId, is_active: bool) -> Result<User, ReviewError> {
        let mut user = self.ports.require_user(user_id).await?;
        user.set_active(is_active);
        self.ports
            .users
            .update(&user)
            .await
            .map_err(map_user_error)?;
        info!(user_id = %user_id, is_active, "user activity updated");
        Ok(user)
    }
}

#[async_trait]
impl UsersQuery for UserService {
    async fn list_users(&self) -> Result<Vec<User>, ReviewError> {
        self.ports.users.list().await.map_err(map_user_error)
    }
}
