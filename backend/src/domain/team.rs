//! Team aggregate and the member payload used to create it.

use std::collections::HashSet;

use super::{TeamName, User, UserId, UserValidationError};

/// Validation errors raised while assembling a team.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamValidationError {
    #[error("member {user_id} appears more than once")]
    DuplicateMember { user_id: UserId },
    #[error("member {user_id} is invalid: {source}")]
    InvalidMember {
        user_id: UserId,
        #[source]
        source: UserValidationError,
    },
}

/// Member description supplied when a team is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub user_id: UserId,
    pub name: String,
    pub is_active: bool,
}

/// Named group of users; the unit of reviewer selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: TeamName,
    members: Vec<User>,
}

impl Team {
    /// Build a team from its members.
    ///
    /// Every member is re-homed into the team, so `team_name` always matches
    /// the owning team.
    pub fn new(name: TeamName, members: Vec<TeamMember>) -> Result<Self, TeamValidationError> {
        let mut seen = HashSet::with_capacity(members.len());
        let mut users = Vec::with_capacity(members.len());
        for member in members {
            if !seen.insert(member.user_id.clone()) {
                return Err(TeamValidationError::DuplicateMember {
                    user_id: member.user_id,
                });
            }
            let user = User::new(
                member.user_id.clone(),
                member.name,
                name.clone(),
                member.is_active,
            )
            .map_err(|source| TeamValidationError::InvalidMember {
                user_id: member.user_id,
                source,
            })?;
            users.push(user);
        }
        Ok(Self {
            name,
            members: users,
        })
    }

    /// Rebuild a team from users already resolved by a store.
    pub fn from_users(name: TeamName, members: Vec<User>) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn members(&self) -> &[User] {
        &self.members
    }

    pub fn into_members(self) -> Vec<User> {
        self.members
    }

    /// Whether the user is listed in this team.
    pub fn contains(&self, user_id: &UserId) -> bool {
        self.members.iter().any(|member| member.id() == user_id)
    }

    /// Identifiers of members that are currently active.
    pub fn active_member_ids(&self) -> Vec<UserId> {
        self.members
            .iter()
            .filter(|member| member.is_active())
            .map(|member| member.id().clone())
            .collect()
    }
}
