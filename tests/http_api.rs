use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use launch_dash::app::build_dashboard;
use launch_dash::data::loader::read_csv;
use launch_dash::data::Dataset;
use launch_dash::ui::server::router;

const LAUNCHES: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525.0,F9 v1.0  B0004,v1.0
3,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,KSC LC-39A,1,5300.0,F9 FT B1031.1,FT
5,KSC LC-39A,1,3600.0,F9 B4 B1041.1,B4
6,KSC LC-39A,0,9600.0,F9 B5 B1046.1,B5
";

fn app() -> axum::Router {
    let dataset = Dataset::from_records(read_csv(LAUNCHES.as_bytes()).unwrap()).unwrap();
    router(Arc::new(build_dashboard(Arc::new(dataset)).unwrap()))
}

async fn get_json(path: &str) -> (StatusCode, Value) {
    let resp = app()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_update(body: Value) -> (StatusCode, Value) {
    let req = Request::post("/api/update")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn index_page_is_served() {
    let resp = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("/api/update"));
}

#[tokio::test]
async fn page_renders_searchable_dropdown_with_placeholder() {
    let resp = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8_lossy(&bytes);
    assert!(page.contains("c.searchable"));
    assert!(page.contains("placeholder: c.placeholder"));
    assert!(!page.contains("title: c.placeholder"));
    assert!(page.contains("Plotly.purge"));

    let (_, layout) = get_json("/api/layout").await;
    let dropdown = &layout["children"][1];
    assert_eq!(dropdown["searchable"], true);
    assert_eq!(dropdown["placeholder"], "Select a Launch Site here");
}

#[tokio::test]
async fn layout_and_bindings_describe_the_page() {
    let (status, layout) = get_json("/api/layout").await;
    assert_eq!(status, StatusCode::OK);
    let options = layout["children"][1]["options"].as_array().unwrap();
    let values: Vec<&str> = options.iter().map(|o| o["value"].as_str().unwrap()).collect();
    assert_eq!(values, ["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);

    let (_, bindings) = get_json("/api/bindings").await;
    assert_eq!(
        bindings,
        json!([
            { "inputs": ["site-dropdown"], "output": "success-pie-chart" },
            { "inputs": ["site-dropdown", "payload-slider"], "output": "success-payload-scatter-chart" }
        ])
    );

    let (_, health) = get_json("/health").await;
    assert_eq!(health["records"], 6);
}

#[tokio::test]
async fn pie_update_counts_site_outcomes() {
    let (status, spec) = post_update(json!({
        "output": "success-pie-chart",
        "inputs": { "site-dropdown": "KSC LC-39A" }
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(spec["data"][0]["labels"], json!(["Success", "Failure"]));
    assert_eq!(spec["data"][0]["values"], json!([2, 1]));
    assert_eq!(spec["layout"]["title"]["text"], "Launch Success vs. Failure for KSC LC-39A");
}

#[tokio::test]
async fn scatter_update_filters_and_colors_unmapped_categories() {
    let (status, spec) = post_update(json!({
        "output": "success-payload-scatter-chart",
        "inputs": { "site-dropdown": "ALL", "payload-slider": [500, 9600] }
    }))
    .await;
    assert_eq!(status, StatusCode::OK);

    let traces = spec["data"].as_array().unwrap();
    let names: Vec<&str> = traces.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["v1.0", "v1.1", "FT", "B4", "B5"]);
    assert_eq!(traces[0]["x"], json!([525.0]));
    assert_eq!(traces[0]["marker"]["color"], "blue");
    assert!(traces[4]["marker"]["color"].as_str().unwrap().starts_with('#'));
}

#[tokio::test]
async fn bad_requests_are_rejected_without_failing_the_server() {
    let (status, body) = post_update(json!({ "output": "nope", "inputs": {} })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));

    let (status, _) = post_update(json!({
        "output": "success-payload-scatter-chart",
        "inputs": { "site-dropdown": "ALL" }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_update(json!({
        "output": "success-payload-scatter-chart",
        "inputs": { "site-dropdown": "ALL", "payload-slider": [9000, 1000] }
    }))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
