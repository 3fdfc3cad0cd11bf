use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpServer};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gridtrace::{
    api::{
        openapi::ApiDoc,
        routes::{configure, json_config, path_config, query_config},
    },
    config::AppConfig,
    data::scenarios::ScenarioStore,
};

fn cors(origin: Option<&str>) -> Cors {
    match origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    info!("Grid search tracer listening on http://{bind_addr}");
    info!("   POST /api/runs");
    info!("   POST /api/scenarios");
    info!("   GET  /api/scenarios");
    info!("   GET  /api/scenarios/{{id}}");
    info!("   Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");
    info!("   trace limit: {} positions", config.max_trace);

    let config = web::Data::new(config);
    let store = web::Data::new(ScenarioStore::new());
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors(config.cors_origin.as_deref()))
            .app_data(config.clone())
            .app_data(store.clone())
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
