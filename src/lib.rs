//! Medication delivery drone registry with a battery simulator and a route
//! planner, served over a JSON API.

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod planner;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;

/// Prepares the database, starts the simulator and runs the HTTP server
/// until it is stopped.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    db::run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to migrate the database: {e}")))?;

    let repo = DieselRepository::new(pool);

    if server_config.seed_demo_data {
        services::seed::seed_demo_data(&repo)
            .map_err(|e| std::io::Error::other(format!("Failed to seed demo data: {e}")))?;
    }

    let simulator =
        services::simulator::spawn_simulator(repo.clone(), server_config.simulator_interval());

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(routes::json_config())
            .app_data(routes::path_config())
            .app_data(web::Data::new(repo.clone()))
            .service(web::scope("/api").configure(routes::configure))
    })
    .bind(bind_address)?
    .run()
    .await;

    simulator.shutdown();
    result
}
