#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use bgs_ledger::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let ingame_ids = exit_on_error(startup::load_ingame_ids(&config.ingame_ids_path).await);
        let session = exit_on_error(startup::connect_to_session(&config).await);
        let db = exit_on_error(startup::connect_to_database(&config).await);

        tracing::info!("Starting server");

        let state = AppState {
            db,
            ingame_ids: Arc::new(ingame_ids),
            query_timeout: config.query_timeout,
            background_images_dir: config.background_images_dir,
        };

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}

/// Startup failures are fatal; report them the same way as configuration errors.
#[cfg(feature = "server")]
fn exit_on_error<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Startup error: {}", e);
            std::process::exit(1);
        }
    }
}
