use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get, web};
use dotenvy::dotenv;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hrms::config::Config;
use hrms::db::{init_db, init_schema};
use hrms::docs::ApiDoc;
use hrms::{routes, seed};

// Root goes straight to the interactive docs
#[get("/")]
async fn index() -> impl Responder {
    web::Redirect::to("/swagger-ui/index.html")
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await?;
    init_schema(&pool).await?;

    if config.seed_on_startup {
        let mut rng = match config.seed_rng_seed {
            Some(seed_value) => StdRng::seed_from_u64(seed_value),
            None => StdRng::from_os_rng(),
        };
        seed::run_seed(&pool, &mut rng).await?;
    }

    let server_addr = config.server_addr.clone();
    info!("Server listening at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard {_:.*} matches the bundled JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(pool.clone()))
            .service(index)
            .configure(routes::configure)
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
