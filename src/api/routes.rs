use std::fmt;

use actix_web::{error::InternalError, web, HttpResponse};

use crate::{
    api::handlers::{create_scenario, get_scenario, list_scenarios, post_run},
    models::request::ErrorResponse,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(post_run)
            .service(create_scenario)
            .service(list_scenarios)
            .service(get_scenario),
    );
}

fn bad_request<E>(err: E, message: String) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse {
            error: message,
            supported: None,
        }),
    )
    .into()
}

/// JSON extractor settings: malformed bodies answer 400 with an `ErrorResponse`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        bad_request(err, message)
    })
}

/// Query-string extractor settings, e.g. `?page=abc`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid query string: {err}");
        bad_request(err, message)
    })
}

/// Path-segment extractor settings, e.g. `/api/scenarios/abc`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid path parameter: {err}");
        bad_request(err, message)
    })
}
