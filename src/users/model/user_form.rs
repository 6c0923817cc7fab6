use crate::shared::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
  pub email: String,
  pub full_name: String,
  pub role: Role,
  pub company_ids: Option<Vec<String>>,
}

impl UserForm {
  pub fn company_ids(&self) -> Option<&[String]> {
    self.company_ids.as_deref()
  }
}
