use crate::config::{AppConfig, Mode};
use crate::db::connection::{init_db, Database};
use crate::db::seed::seed_if_empty;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;

mod auth;
mod config;
mod controller;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod sources;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = AppConfig::from_env();

    // 1. Database handle + schema
    let db = Database::new(&cfg.db_path);
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 2. Development mode gets the fixture dataset out of the box
    if cfg.mode == Mode::Development {
        match seed_if_empty(&db) {
            Ok(0) => {}
            Ok(n) => println!("Seeded {n} fixture listings"),
            Err(e) => eprintln!("Fixture seeding failed: {e}"),
        }
    }

    // 3. Serve
    println!("Starting server at http://{} ({:?} mode)", cfg.addr, cfg.mode);

    let server = Server::bind(&cfg.addr).max_workers(8);

    let mode = cfg.mode;
    let result = server.serve(move |req, _info| match handle(req, &db, mode) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
