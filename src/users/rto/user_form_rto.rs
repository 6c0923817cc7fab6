use serde::{Deserialize, Serialize};

use crate::shared::role::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct UserFormRto {
  pub email: String,
  pub full_name: String,
  pub role: Role,
  #[serde(skip_serializing_if = "Option::is_none")]
  #[serde(rename = "companyIds")]
  pub company_ids: Option<Vec<String>>,
}
