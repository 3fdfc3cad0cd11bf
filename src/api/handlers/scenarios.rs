use actix_web::{get, http::Method, post, web, HttpResponse};
use log::warn;

use crate::{
    data::scenarios::ScenarioStore,
    error::ApiError,
    models::{
        request::{
            link, ApiResponse, Links, PageQuery, PaginatedResponse, Pagination, DEFAULT_PER_PAGE,
            MAX_PER_PAGE,
        },
        scenario::{ScenarioRequest, ScenarioResponse},
    },
};

fn scenario_links(id: u64) -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link(format!("/api/scenarios/{id}"), Method::GET));
    links.insert("collection".into(), link("/api/scenarios", Method::GET));
    links
}

fn page_href(page: usize, per_page: usize) -> String {
    format!("/api/scenarios?page={page}&perPage={per_page}")
}

/// POST /api/scenarios
/// Stores a named scenario; `dataJson` is kept as-is.
#[utoipa::path(
    post,
    path = "/api/scenarios",
    tag = "scenarios",
    request_body = ScenarioRequest,
    responses(
        (status = 201, description = "Scenario stored", body = ScenarioApiResponse),
        (status = 400, description = "A required field is blank", body = ErrorResponse),
    )
)]
#[post("/scenarios")]
pub async fn create_scenario(
    store: web::Data<ScenarioStore>,
    body: web::Json<ScenarioRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let blank = request.blank_fields();
    if !blank.is_empty() {
        warn!("scenario rejected, blank fields: {blank:?}");
        return Err(ApiError::Validation(format!(
            "{} must not be blank",
            blank.join(", ")
        )));
    }

    let scenario = store.create(request).await;
    let links = scenario_links(scenario.id);
    Ok(HttpResponse::Created().json(ApiResponse::new(ScenarioResponse::from(scenario), links)))
}

/// GET /api/scenarios/{id}
#[utoipa::path(
    get,
    path = "/api/scenarios/{id}",
    tag = "scenarios",
    params(("id" = u64, Path, description = "Scenario id")),
    responses(
        (status = 200, description = "The scenario", body = ScenarioApiResponse),
        (status = 404, description = "No scenario with this id", body = ErrorResponse),
    )
)]
#[get("/scenarios/{id}")]
pub async fn get_scenario(
    store: web::Data<ScenarioStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let scenario = store.get(id).await.ok_or(ApiError::ScenarioNotFound(id))?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        ScenarioResponse::from(scenario),
        scenario_links(id),
    )))
}

/// GET /api/scenarios
/// Lists stored scenarios by ascending id, one page at a time.
#[utoipa::path(
    get,
    path = "/api/scenarios",
    tag = "scenarios",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of scenarios", body = ScenarioListResponse),
        (status = 400, description = "page or perPage is zero", body = ErrorResponse),
    )
)]
#[get("/scenarios")]
pub async fn list_scenarios(
    store: web::Data<ScenarioStore>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).min(MAX_PER_PAGE);
    if page == 0 || per_page == 0 {
        return Err(ApiError::Validation(
            "page and perPage must be at least 1".into(),
        ));
    }

    let all = store.list().await;
    let pagination = Pagination::new(page, per_page, all.len());
    let items: Vec<ScenarioResponse> = all[pagination.range()]
        .iter()
        .cloned()
        .map(ScenarioResponse::from)
        .collect();

    let mut links = Links::new();
    links.insert("self".into(), link(page_href(page, per_page), Method::GET));
    if pagination.has_next() {
        links.insert("next".into(), link(page_href(page + 1, per_page), Method::GET));
    }
    if pagination.has_prev() {
        links.insert("prev".into(), link(page_href(page - 1, per_page), Method::GET));
    }

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(items, links, pagination)))
}
