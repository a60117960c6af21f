use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::state::AppState;
use astra::Server;

mod config;
mod db;
mod domain;
mod errors;
mod feed;
mod forms;
mod notice;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let db = Database::new(&config.db_path);
    if let Err(e) = init_db(&db) {
        log::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let app = AppState::new(db, config.poll_interval_secs);
    match app.feed.refresh(&app.db) {
        Ok(snap) => log::info!("loaded {} leads", snap.leads.len()),
        Err(e) => log::warn!("initial load failed, board will retry: {e}"),
    }

    log::info!("starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("server ended with error: {e}");
    }

    log::info!("server shut down cleanly");
}
