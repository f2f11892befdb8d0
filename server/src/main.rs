//! garageql server
//!
//! Serves the users-and-cars schema with actix-web: `POST /graphql` executes
//! documents, `GET /graphql` opens GraphiQL.
#[macro_use]
extern crate lazy_static;
use std::io;

use actix_web::{middleware, web, App, HttpServer};
use garageql::Ctx;

mod config;
mod handlers;

use config::Settings;

lazy_static! {
    static ref SETTINGS: Settings = Settings::from_env();
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = SETTINGS
        .store()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    match &SETTINGS.seed_file {
        Some(path) => log::info!("Loaded seed data from {:?}", path),
        None => log::info!("Using built-in seed data"),
    }

    let ctx = web::Data::new(Ctx::from(store));
    let schema = web::Data::new(garageql::schema());

    log::info!(
        "Running a GraphQL API server at http://{}/graphql",
        SETTINGS.addr()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(schema.clone())
            .app_data(ctx.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::register)
    })
    .bind(SETTINGS.addr())?
    .run()
    .await
}
