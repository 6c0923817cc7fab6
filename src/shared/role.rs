use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access level attached to a user in the settings form.
///
/// The wire labels are matched exactly, so `"Admin"` or `"professionals"`
/// are not roles.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Role {
  #[serde(rename = "superadmin")]
  Superadmin,
  #[serde(rename = "admin")]
  Admin,
  #[serde(rename = "evaluator")]
  Evaluator,
  // Label is Portuguese for "professionals" and is kept as sent by the form.
  #[serde(rename = "profissionais")]
  Profissionais,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid role: {0:?}")]
pub struct ParseRoleError(pub String);

impl Role {
  pub const ALL: [Role; 4] = [
    Role::Superadmin,
    Role::Admin,
    Role::Evaluator,
    Role::Profissionais,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Superadmin => "superadmin",
      Role::Admin => "admin",
      Role::Evaluator => "evaluator",
      Role::Profissionais => "profissionais",
    }
  }
}

impl FromStr for Role {
  type Err = ParseRoleError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    Role::ALL
      .into_iter()
      .find(|role| role.as_str() == value)
      .ok_or_else(|| ParseRoleError(value.to_string()))
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
