use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Job role sent along with the resume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    General,
    Teacher,
    Admin,
    ItSupport,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}', expected one of: general, teacher, admin, it_support")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 4] = [Role::General, Role::Teacher, Role::Admin, Role::ItSupport];

    /// Value of the `role` form field
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::General => "general",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::ItSupport => "it_support",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::General => "General",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
            Role::ItSupport => "IT Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_general() {
        assert_eq!(Role::default(), Role::General);
    }

    #[test]
    fn parses_wire_values() {
        assert_eq!("it_support".parse::<Role>().unwrap(), Role::ItSupport);
        assert_eq!("teacher".parse::<Role>().unwrap(), Role::Teacher);
    }

    #[test]
    fn rejects_values_outside_the_set() {
        let err = "IT Support".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("IT Support".to_string()));
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn serde_uses_wire_values() {
        assert_eq!(serde_json::to_string(&Role::ItSupport).unwrap(), "\"it_support\"");
    }
}
