use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use attendee_match::config::Settings;
use attendee_match::routes::{self, matches::AppState};
use attendee_match::services::{RankingCache, RosterStore};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration is read before logging so the [logging] section applies;
    // LOG_LEVEL / LOG_FORMAT still win when set.
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or(logging.level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(logging.format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting attendee match service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    // A missing roster file is not fatal: inline ranking still works
    let roster = match RosterStore::load(&settings.roster.path).await {
        Ok(store) => store,
        Err(e) => {
            warn!("Failed to load rosters from {} ({}), starting with none", settings.roster.path, e);
            RosterStore::empty()
        }
    };

    info!("Roster version {}", roster.version());

    let cache = if settings.cache.enabled {
        let ttl = settings.cache.ttl_secs.unwrap_or(300);
        let size = settings.cache.l1_cache_size.unwrap_or(1000);
        info!("Ranking cache initialized ({} entries, TTL: {}s)", size, ttl);
        Some(Arc::new(RankingCache::new(size, ttl)))
    } else {
        info!("Ranking cache disabled");
        None
    };

    let app_state = AppState {
        roster: Arc::new(roster),
        cache,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
