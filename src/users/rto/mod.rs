pub mod roles_rto;
pub mod user_form_rto;
