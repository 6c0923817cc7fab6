pub mod user_form_dto;
