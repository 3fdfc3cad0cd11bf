use utoipa::OpenApi;

use crate::models::{
    request::{
        ErrorResponse, GridRunRequest, Link, Pagination, RunResponse, RunStep,
        ScenarioApiResponse, ScenarioListResponse,
    },
    scenario::{ScenarioRequest, ScenarioResponse},
    Position,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grid Search Tracer API",
        description = "Runs BFS, DFS and Dijkstra on a rectangular grid with walls and returns every expansion step for animation. Also stores named scenarios as opaque JSON.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::runs::post_run,
        crate::api::handlers::scenarios::create_scenario,
        crate::api::handlers::scenarios::get_scenario,
        crate::api::handlers::scenarios::list_scenarios,
    ),
    components(
        schemas(
            // Runs
            Position, GridRunRequest, RunStep, RunResponse,
            // Scenarios
            ScenarioRequest, ScenarioResponse,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            ScenarioApiResponse,
            ScenarioListResponse,
        )
    ),
    tags(
        (name = "runs",      description = "Search execution — step traces for BFS, DFS and Dijkstra"),
        (name = "scenarios", description = "Saved scenarios — create, fetch, list"),
    )
)]
pub struct ApiDoc;
