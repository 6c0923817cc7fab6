use serde::{Deserialize, Serialize};

use crate::shared::role::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct RolesRto {
  pub roles: Vec<Role>,
}

impl Default for RolesRto {
  fn default() -> Self {
    Self {
      roles: Role::ALL.to_vec(),
    }
  }
}
