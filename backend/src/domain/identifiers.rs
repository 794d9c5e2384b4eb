//! Opaque string identifiers shared by users, teams and pull requests.
//!
//! Identifiers are supplied by callers (for example `u1`, `backend`,
//! `pr-1001`) and are compared byte for byte. The only rules are that they are
//! non-empty and carry no surrounding whitespace.

use std::fmt;

/// Validation errors raised when constructing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    #[error("{kind} must not contain leading or trailing whitespace")]
    SurroundingWhitespace { kind: &'static str },
}

fn validate(raw: &str, kind: &'static str) -> Result<(), IdentifierValidationError> {
    if raw.is_empty() {
        return Err(IdentifierValidationError::Empty { kind });
    }
    if raw.trim() != raw {
        return Err(IdentifierValidationError::SurroundingWhitespace { kind });
    }
    Ok(())
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierValidationError> {
                let raw = raw.into();
                validate(&raw, $kind)?;
                Ok(Self(raw))
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdentifierValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_identifier! {
    /// Stable user identifier.
    UserId => "user id"
}

define_identifier! {
    /// Unique team name; teams are keyed by name.
    TeamName => "team name"
}

define_identifier! {
    /// Unique pull request identifier.
    PullRequestId => "pull request id"
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("u1")]
    #[case("backend team")]
    #[case("pr-1001")]
    fn accepts_opaque_values(#[case] raw: &str) {
        let id = UserId::new(raw).expect("valid identifier");
        assert_eq!(id.as_str(), raw);
        assert_eq!(id.to_string(), raw);
    }

    #[rstest]
    fn rejects_empty_values() {
        let err = TeamName::new("").expect_err("empty name");
        assert_eq!(err, IdentifierValidationError::Empty { kind: "team name" });
    }

    #[rstest]
    #[case(" pr-1")]
    #[case("pr-1\n")]
    fn rejects_surrounding_whitespace(#[case] raw: &str) {
        let err = PullRequestId::new(raw).expect_err("padded id");
        assert_eq!(
            err.to_string(),
            "pull request id must not contain leading or trailing whitespace"
        );
    }

    #[rstest]
    fn orders_lexicographically() {
        let mut ids = vec![
            UserId::new("u3").expect("id"),
            UserId::new("u1").expect("id"),
            UserId::new("u2").expect("id"),
        ];
        ids.sort();
        let raw: Vec<&str> = ids.iter().map(UserId::as_str).collect();
        assert_eq!(raw, ["u1", "u2", "u3"]);
    }
}
