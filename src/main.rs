use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use todoforge::config::Config;
use todoforge::routes;
use todoforge::store::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let state = web::Data::new(AppState::new(&config));

    // Expired sessions are already rejected by `resolve`; this only reclaims memory.
    let sweeper = state.clone();
    let sweep_interval = config.sweep_interval();
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        loop {
            ticker.tick().await;
            let purged = sweeper.sessions.sweep();
            if purged > 0 {
                info!("purged {} expired sessions", purged);
            }
        }
    });

    info!("starting web server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(routes::json_config())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
