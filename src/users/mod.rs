pub mod dto;
pub mod model;
pub mod rto;

use actix_web::{web, HttpResponse, Responder};
use dto::user_form_dto::UserFormDto;
use model::user_form::UserForm;
use rto::roles_rto::RolesRto;
use rto::user_form_rto::UserFormRto;
use validator::Validate;

use crate::shared::http_error::invalid_payload;

pub async fn submit_user_form(
  payload: web::Json<UserFormDto>,
) -> impl Responder {
  // Perform validation
  if let Err(validation_errors) = payload.validate() {
    return invalid_payload(validation_errors);
  }

  let user_form = UserForm::from(payload.into_inner());
  log::debug!(
    "Accepted user form for role {} with {} company ids",
    user_form.role,
    user_form.company_ids().map_or(0, <[String]>::len)
  );

  HttpResponse::Ok()
    .content_type("application/json")
    .json(UserFormRto::from(user_form))
}

pub async fn list_roles() -> impl Responder {
  HttpResponse::Ok()
    .content_type("application/json")
    .json(RolesRto::default())
}

impl From<UserFormDto> for UserForm {
  fn from(dto: UserFormDto) -> Self {
    Self {
      email: dto.email,
      full_name: dto.full_name,
      role: dto.role,
      company_ids: dto.company_ids,
    }
  }
}

// Transform UserForm domain to RTO
impl From<UserForm> for UserFormRto {
  fn from(user_form: UserForm) -> Self {
    Self {
      email: user_form.email,
      full_name: user_form.full_name,
      role: user_form.role,
      company_ids: user_form.company_ids,
    }
  }
}
