mod shared;
mod users;

use std::io;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use shared::config::Config;
use shared::http_error::json_error_handler;
use users::{list_roles, submit_user_form};

#[actix_web::main]
async fn main() -> io::Result<()> {
  env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

  let settings = Config::default();
  settings
    .validate()
    .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

  log::info!("Listening on http://{}", settings.server_address);

  let server_address = settings.server_address.clone();
  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .configure(|cfg| config(cfg, &settings))
  })
  .bind(server_address)?
  .run()
  .await
}

// Function to initialize the App. `settings` must have passed
// `Config::validate`, which keeps the rate and burst inside what the
// governor accepts.
fn config(config: &mut web::ServiceConfig, settings: &Config) {
  // Rate limit per peer IP
  let governor_config = GovernorConfigBuilder::default()
    .requests_per_second(settings.requests_per_second)
    .burst_size(settings.burst_size)
    .finish()
    .expect("validated rate and burst give a non zero governor quota");

  config
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .service(
      web::scope("/v1")
        .service(
          web::scope("/users")
            .wrap(Governor::new(&governor_config))
            .route("/form", web::post().to(submit_user_form)),
        )
        .service(
          web::scope("/roles")
            .wrap(Governor::new(&governor_config))
            .route("", web::get().to(list_roles)),
        ),
    );
}
