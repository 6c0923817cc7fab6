use serde::{Deserialize, Deserializer};
use validator_derive::Validate;

use crate::shared::role::Role;

/// Payload of the user create/edit form.
///
/// `email` and `full_name` carry no format rules. A missing `companyIds`
/// stays `None`, while `companyIds: null` is rejected.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserFormDto {
  pub email: String,
  pub full_name: String,
  pub role: Role,
  #[serde(
    rename = "companyIds",
    default,
    deserialize_with = "deserialize_company_ids"
  )]
  pub company_ids: Option<Vec<String>>,
}

// Only reached when the key is present; `default` covers the missing case.
fn deserialize_company_ids<'de, D>(
  deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Vec::<String>::deserialize(deserializer).map(Some)
}
