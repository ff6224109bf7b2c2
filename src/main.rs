use crate::config::Config;
use crate::db::{init_db, Database, SqliteReviews};
use crate::router::respond;
use crate::store::{FixtureReviews, ReviewSource};
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Configuration
    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Pick the review source
    let source = match open_source(&cfg) {
        Ok(source) => source,
        Err(e) => {
            error!("Review source initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!("Starting server at http://{}", cfg.addr);
    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req: astra::Request, _info| respond(req, source.as_ref()));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}

fn open_source(cfg: &Config) -> Result<Box<dyn ReviewSource>, errors::ServerError> {
    match &cfg.db_path {
        Some(path) => {
            let db = Database::new(path);
            init_db(&db, &cfg.schema_path)?;
            info!("Serving reviews from SQLite at {}", path.display());
            Ok(Box::new(SqliteReviews::new(db)))
        }
        None => {
            info!("Serving the built-in review set");
            Ok(Box::new(FixtureReviews))
        }
    }
}
