use actix_web::{test, web, App};
use gridtrace::{
    api::routes::{configure, json_config, path_config, query_config},
    config::AppConfig,
    data::scenarios::ScenarioStore,
};

fn build_app_with(
    config: AppConfig,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(config))
        .app_data(web::Data::new(ScenarioStore::new()))
        .app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .configure(configure)
}

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    build_app_with(AppConfig::default())
}

fn run_payload(algorithm: &str) -> serde_json::Value {
    serde_json::json!({
        "algorithm": algorithm,
        "rows": 3,
        "cols": 3,
        "start": { "row": 0, "col": 0 },
        "target": { "row": 2, "col": 2 },
        "walls": [{ "row": 1, "col": 1 }]
    })
}

fn scenario_payload(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "type": "GRID",
        "dataJson": "{\"rows\":3,\"cols\":3}"
    })
}

// ---------------------------------------------------------------------------
// POST /api/runs
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_post_run_bfs_returns_200() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(run_payload("BFS"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_post_run_body_matches_contract() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(run_payload("bfs"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["algorithm"], "BFS");
    assert_eq!(body["found"], true);
    let steps = body["steps"].as_array().expect("steps must be an array");
    assert_eq!(body["totalSteps"].as_u64(), Some(steps.len() as u64));

    let last = steps.last().unwrap();
    assert_eq!(last["current"], serde_json::json!({ "row": 2, "col": 2 }));
    for key in ["index", "current", "visited", "frontier", "finished", "found"] {
        assert!(last.get(key).is_some(), "step must carry '{key}'");
    }
}

#[actix_web::test]
async fn test_post_run_each_algorithm_finds_target() {
    let app = test::init_service(build_app()).await;
    for algorithm in ["BFS", "DFS", "DIJKSTRA"] {
        let req = test::TestRequest::post()
            .uri("/api/runs")
            .set_json(run_payload(algorithm))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["algorithm"], algorithm);
        assert_eq!(body["found"], true, "{algorithm} must reach the target");
    }
}

#[actix_web::test]
async fn test_post_run_unsupported_algorithm_returns_400_with_supported_list() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(run_payload("A_STAR"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let error_msg = body["error"].as_str().unwrap_or("");
    assert!(error_msg.contains("Unsupported algorithm"), "got: {error_msg}");
    assert_eq!(body["supported"], serde_json::json!(["BFS", "DFS", "DIJKSTRA"]));
}

#[actix_web::test]
async fn test_post_run_blank_algorithm_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(run_payload("   "))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_post_run_start_on_wall_returns_400() {
    let app = test::init_service(build_app()).await;
    let mut payload = run_payload("BFS");
    payload["walls"] = serde_json::json!([{ "row": 0, "col": 0 }]);
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Start and target must not be walls.");
}

#[actix_web::test]
async fn test_post_run_negative_target_returns_400() {
    let app = test::init_service(build_app()).await;
    let mut payload = run_payload("DFS");
    payload["target"] = serde_json::json!({ "row": -1, "col": 0 });
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or("").contains("out of bounds"));
}

fn strip_payload(cols: i32) -> serde_json::Value {
    serde_json::json!({
        "algorithm": "BFS",
        "rows": 1,
        "cols": cols,
        "start": { "row": 0, "col": 0 },
        "target": { "row": 0, "col": cols - 1 }
    })
}

#[actix_web::test]
async fn test_post_run_grid_at_trace_limit_returns_200() {
    // 1x10 grid: 10 * 10 / 2 = 50 positions.
    let config = AppConfig {
        max_trace: 50,
        ..AppConfig::default()
    };
    let app = test::init_service(build_app_with(config)).await;
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(strip_payload(10))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["totalSteps"], 10);
}

#[actix_web::test]
async fn test_post_run_grid_over_trace_limit_returns_400() {
    // 1x11 grid: 11 * 11 / 2 = 60 positions.
    let config = AppConfig {
        max_trace: 50,
        ..AppConfig::default()
    };
    let app = test::init_service(build_app_with(config)).await;
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(strip_payload(11))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Grid of 1x11 would record about 60 positions, over the limit of 50."
    );
}

#[actix_web::test]
async fn test_post_run_missing_walls_defaults_to_open_grid() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({
        "algorithm": "DIJKSTRA",
        "rows": 1,
        "cols": 3,
        "start": { "row": 0, "col": 0 },
        "target": { "row": 0, "col": 2 }
    });
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["totalSteps"], 3);
    assert_eq!(body["found"], true);
}

#[actix_web::test]
async fn test_post_run_malformed_json_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/runs")
        .insert_header(("content-type", "application/json"))
        .set_payload("{invalid json}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or("")
        .starts_with("JSON deserialization error"));
}

// ---------------------------------------------------------------------------
// /api/scenarios
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_create_scenario_returns_201_with_links() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/scenarios")
        .set_json(scenario_payload("detour"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["payload"]["id"], 1);
    assert_eq!(body["payload"]["name"], "detour");
    assert_eq!(body["payload"]["type"], "GRID");
    assert_eq!(body["payload"]["dataJson"], "{\"rows\":3,\"cols\":3}");
    assert!(body["payload"]["createdAt"].is_string());
    assert_eq!(body["_links"]["self"]["href"], "/api/scenarios/1");
    assert_eq!(body["_links"]["self"]["method"], "GET");
}

#[actix_web::test]
async fn test_create_scenario_blank_name_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/scenarios")
        .set_json(scenario_payload("  "))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or("").contains("name"));
}

#[actix_web::test]
async fn test_get_scenario_round_trips_through_store() {
    let app = test::init_service(build_app()).await;
    let create = test::TestRequest::post()
        .uri("/api/scenarios")
        .set_json(scenario_payload("saved"))
        .to_request();
    let created: serde_json::Value = test::call_and_read_body_json(&app, create).await;

    let get = test::TestRequest::get().uri("/api/scenarios/1").to_request();
    let fetched: serde_json::Value = test::call_and_read_body_json(&app, get).await;
    assert_eq!(fetched["payload"], created["payload"]);
}

#[actix_web::test]
async fn test_get_unknown_scenario_returns_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/scenarios/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Scenario not found: 99");
}

#[actix_web::test]
async fn test_list_scenarios_paginates() {
    let app = test::init_service(build_app()).await;
    for name in ["one", "two", "three"] {
        let req = test::TestRequest::post()
            .uri("/api/scenarios")
            .set_json(scenario_payload(name))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/scenarios?page=1&perPage=2")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body["payload"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["name"].as_str())
        .collect();
    assert_eq!(names, vec!["one", "two"]);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["totalPages"], 2);
    assert_eq!(body["_links"]["next"]["href"], "/api/scenarios?page=2&perPage=2");
    assert!(body["_links"].get("prev").is_none());
}

#[actix_web::test]
async fn test_list_scenarios_empty_store() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/scenarios").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"], serde_json::json!([]));
    assert_eq!(body["pagination"]["perPage"], 20);
}

#[actix_web::test]
async fn test_list_scenarios_non_numeric_page_returns_json_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/scenarios?page=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or("")
        .starts_with("Invalid query string"));
}

#[actix_web::test]
async fn test_get_scenario_non_numeric_id_returns_json_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/scenarios/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or("")
        .starts_with("Invalid path parameter"));
}

#[actix_web::test]
async fn test_list_scenarios_page_zero_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/scenarios?page=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
