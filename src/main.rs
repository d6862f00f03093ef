use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use blog_tags::config::ServerConfig;
use blog_tags::db::{establish_connection_pool, run_migrations};
use blog_tags::repository::DieselRepository;
use blog_tags::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let server_config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(0) => {}
        Ok(applied) => log::info!("Applied {applied} pending migration(s)"),
        Err(e) => {
            log::error!("Failed to run database migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let bind = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
