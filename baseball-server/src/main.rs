use std::sync::Arc;

use tokio::signal;
use tracing::info;

use baseball_persistence::{
    connection::connect_and_migrate, repositories::GameRepository, seed::seed_sample_league,
};
use baseball_server::{auth::TokenService, config::Config, create_routes, service::GameService};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting baseball server...");

    let config = Config::new();

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    // A fresh store gets the demo league so the endpoints have data to serve
    if let Err(e) = seed_sample_league(&db).await {
        tracing::error!("Failed to seed the demo league: {}", e);
        std::process::exit(1);
    }

    let repository = Arc::new(GameRepository::new(db));
    let game_service = Arc::new(GameService::new(repository));
    let token_service = Arc::new(TokenService::new(&config.jwt_secret));

    let routes = create_routes(game_service, token_service);

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
