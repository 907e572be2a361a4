use api::{AppState, Config, router};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use clap::Parser;
use http_body_util::BodyExt;
use lego_core::time::fixed_clock;
use serde_json::{Value, json};
use services::AppServices;
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::try_parse_from(["lego-api", "--in-memory", "--cors-origins", "*"]).unwrap();
    router(
        AppState::new(AppServices::in_memory(fixed_clock())),
        config.cors_layer(),
    )
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn root_greets() {
    let app = app();
    let (status, body) = send(&app, get("/api/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Matemáticas LEGO API");
}

#[tokio::test]
async fn registering_twice_returns_same_user() {
    let app = app();
    let payload = json!({ "name": "Camila", "age": 7 });

    let (status, first) = send(&app, post_json("/api/users", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["name"], "Camila");
    assert_eq!(first["age"], 7);
    assert_eq!(first["created_at"], "2024-03-01T09:00:00Z");

    let (_, second) = send(&app, post_json("/api/users", &payload)).await;
    assert_eq!(first["id"], second["id"]);

    let uri = format!("/api/users/{}", first["id"].as_str().unwrap());
    let (status, fetched) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, first);
}

#[tokio::test]
async fn age_bounds_are_enforced() {
    let app = app();
    for age in [2, 13] {
        let (status, body) =
            send(&app, post_json("/api/users", &json!({ "name": "Pablo", "age": age }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "La edad debe estar entre 3 y 12 años");
    }
    for age in [3, 12] {
        let (status, _) =
            send(&app, post_json("/api/users", &json!({ "name": "Pablo", "age": age }))).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn unknown_user_is_404() {
    let app = app();
    let (status, body) = send(&app, get("/api/users/9b2f6c0e-2a34-4c1e-8f51-3d6a1b7c9e00")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Usuario no encontrado");

    let (status, _) = send(&app, get("/api/users/no-such-user")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn progress_is_saved_and_listed() {
    let app = app();
    let (_, user) = send(&app, post_json("/api/users", &json!({ "name": "Iker", "age": 10 }))).await;
    let user_id = user["id"].as_str().unwrap().to_owned();

    let uri = format!("/api/users/{user_id}/progress");
    let (status, empty) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));

    let record = json!({
        "user_id": user_id,
        "age_group": "10-12",
        "operation": "division",
        "level": "dificil",
        "score": 90,
        "stars": 3,
        "completed_exercises": 10
    });
    let (status, saved) = send(&app, post_json("/api/progress", &record)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["operation"], "division");
    assert_eq!(saved["age_group"], "10-12");
    assert_eq!(saved["accuracy"], 90);
    assert_eq!(saved["timestamp"], "2024-03-01T09:00:00Z");

    let (_, listed) = send(&app, get(&uri)).await;
    assert_eq!(listed, json!([saved]));
}

#[tokio::test]
async fn progress_accepts_any_user_reference() {
    let app = app();
    let record = json!({
        "user_id": "guest",
        "age_group": "3-5",
        "operation": "suma",
        "level": "facil",
        "score": 40,
        "stars": 2,
        "completed_exercises": 5
    });
    let (status, saved) = send(&app, post_json("/api/progress", &record)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["user_id"], "guest");
    assert_eq!(saved["accuracy"], 80);

    let (status, listed) = send(&app, get("/api/users/guest/progress")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([saved]));

    // no user record is created for the reference
    let (status, _) = send(&app, get("/api/users/guest")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn progress_with_unknown_operation_is_rejected() {
    let app = app();
    let record = json!({
        "user_id": "9b2f6c0e-2a34-4c1e-8f51-3d6a1b7c9e00",
        "age_group": "3-5",
        "operation": "potencia",
        "level": "facil",
        "score": 0,
        "stars": 0,
        "completed_exercises": 0
    });
    let (status, _) = send(&app, post_json("/api/progress", &record)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exercises_default_to_ten() {
    let app = app();
    let (status, body) = send(
        &app,
        get("/api/exercises?age_group=3-5&operation=multiplicacion&level=facil"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let exercises = body["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 10);
    for ex in exercises {
        let a = ex["number1"].as_u64().unwrap();
        let b = ex["number2"].as_u64().unwrap();
        assert!((1..=5).contains(&a) && (1..=5).contains(&b));
        assert_eq!(ex["correct_answer"].as_u64().unwrap(), a * b);
        assert_eq!(ex["operation"], "multiplicacion");
        assert_eq!(ex["options"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn exercises_honor_count() {
    let app = app();
    let (status, body) = send(
        &app,
        get("/api/exercises?age_group=7-9&operation=division&level=intermedio&count=3"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let exercises = body["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 3);
    for ex in exercises {
        let n1 = ex["number1"].as_u64().unwrap();
        let n2 = ex["number2"].as_u64().unwrap();
        assert_eq!(n1, n2 * ex["correct_answer"].as_u64().unwrap());
    }
}

#[tokio::test]
async fn invalid_profile_or_count_is_bad_request() {
    let app = app();
    let (status, body) = send(
        &app,
        get("/api/exercises?age_group=6-8&operation=suma&level=facil"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("6-8"));

    let (status, body) = send(
        &app,
        get("/api/exercises?age_group=3-5&operation=suma&level=facil&count=500"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("100") && detail.contains("500"), "{detail}");

    let (status, body) = send(
        &app,
        get("/api/exercises?age_group=3-5&operation=suma&level=facil&count=100"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exercises"].as_array().unwrap().len(), 100);
}
