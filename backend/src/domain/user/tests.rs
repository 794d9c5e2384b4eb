//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn team() -> TeamName {
    TeamName::new("backend").expect("team name")
}

#[rstest]
fn new_keeps_fields(team: TeamName) {
    let user = User::new(UserId::new("u1").expect("id"), "Alice", team.clone(), true)
        .expect("valid user");

    assert_eq!(user.id().as_str(), "u1");
    assert_eq!(user.name(), "Alice");
    assert_eq!(user.team_name(), &team);
    assert!(user.is_active());
}

#[rstest]
#[case("")]
#[case("   ")]
fn new_rejects_blank_names(team: TeamName, #[case] name: &str) {
    let result = User::new(UserId::new("u1").expect("id"), name, team, true);
    assert_eq!(result, Err(UserValidationError::EmptyName));
}

#[rstest]
fn set_active_toggles_flag(team: TeamName) {
    let mut user =
        User::new(UserId::new("u2").expect("id"), "Bob", team, true).expect("valid user");

    user.set_active(false);
    assert!(!user.is_active());

    user.set_active(true);
    assert!(user.is_active());
}
