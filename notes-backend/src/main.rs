use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use dotenv::dotenv;

use notes_backend::config::{defaults, Config};
use notes_backend::notes::NoteStore;
use notes_backend::{controllers, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::parse();

    let cache_dir = match config.cache_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("[CONFIG] {}", e);
            eprintln!("Directory cache path is invalid");
            std::process::exit(1);
        }
    };
    log::info!("[CONFIG] Using cache directory {:?}", cache_dir);

    let store = match NoteStore::open(&cache_dir) {
        Ok(store) => store,
        Err(e) => {
            log::error!("[NOTES] Failed to load notes: {}", e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState::new(store));

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::configure)
    })
    .bind((defaults::BIND_ADDRESS, config.port))
    .inspect_err(|e| log::error!("Server error: {}", e))?
    .run();

    log::info!("Server started at {}", config.public_url());

    let server_handle = server.handle();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            log::warn!("Failed to listen for Ctrl+C");
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
        log::info!("Shutdown complete");
    });

    server.await
}
