//! End-to-end tests against a local mock HTTP server.
//!
//! The client is blocking, so each scenario runs inside `spawn_blocking`
//! while the mock server lives on the async runtime.

use serde_json::{json, Value};
use snipeit::{
    resources::{assets::NewAsset, users::UserQuery},
    ClientConfig, Error, SnipeClient,
};
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const TOKEN: &str = "test-token";

async fn run<F>(server: &MockServer, scenario: F) -> snipeit::Result<Value>
where
    F: FnOnce(&SnipeClient) -> snipeit::Result<Value> + Send + 'static,
{
    let uri = server.uri();
    tokio::task::spawn_blocking(move || -> snipeit::Result<Value> {
        let client = SnipeClient::connect(&uri, TOKEN)?;
        scenario(&client)
    })
    .await
    .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_asset_posts_json_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/hardware"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"status_id": 2, "model_id": 24, "name": "pc1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "payload": {"id": 101}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = run(&server, |client| {
        client.create_asset(&NewAsset {
            status_id: 2,
            model_id: 24,
            name: Some("pc1".to_string()),
            ..Default::default()
        })
    })
    .await
    .unwrap();

    assert_eq!(created["payload"]["id"], 101);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_status_label_is_a_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/statuslabels/5"))
        .and(body_json(json!({
            "name": "X",
            "deployable": false,
            "pending": true,
            "archived": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = run(&server, |client| client.update_status_label(5, "X", "pending"))
        .await
        .unwrap();
    assert_eq!(response, json!({"status": "success"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_fieldset_is_a_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/fieldsets/3"))
        .and(body_json(json!({"name": "Laptops"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    run(&server, |client| client.update_fieldset(3, "Laptops"))
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_companies_sends_search_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/companies"))
        .and(query_param("search", "Acme"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"total": 0, "rows": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let listing = run(&server, |client| client.get_companies(Some("Acme")))
        .await
        .unwrap();
    assert_eq!(listing["total"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_user_by_name_picks_exact_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(query_param("search", "Ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "rows": [
                {"id": 1, "name": "Ada Lovelace"},
                {"id": 2, "name": "Ada"}
            ]
        })))
        .mount(&server)
        .await;

    let found = run(&server, |client| {
        Ok(client.get_user_by_name("Ada")?.unwrap_or(Value::Null))
    })
    .await
    .unwrap();
    assert_eq!(found, json!({"id": 2, "name": "Ada"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_filters_become_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(query_param("limit", "5"))
        .and(query_param("company_id", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"total": 0, "rows": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    run(&server, |client| {
        client.get_users(&UserQuery {
            limit: Some(5),
            company_id: Some(3),
            ..Default::default()
        })
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_body_is_returned_unchanged() {
    let server = MockServer::start().await;
    let body = json!({"status": "error", "messages": "Unauthorized", "payload": null});
    Mock::given(method("GET"))
        .and(path("/api/v1/hardware/17"))
        .respond_with(ResponseTemplate::new(401).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let response = run(&server, |client| client.get_asset_by_id(17))
        .await
        .unwrap();
    assert_eq!(response, body);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_html_error_page_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/models/9"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = run(&server, |client| client.delete_model(9)).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_validation_failure_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let result = run(&server, |client| {
        client.create_status_label("Broken", "Deployable")
    })
    .await;
    assert!(matches!(result, Err(Error::Validation(_))));

    let result = run(&server, |client| {
        client.get_users(&UserQuery {
            sort: Some("shoe_size".to_string()),
            ..Default::default()
        })
    })
    .await;
    assert!(matches!(result, Err(Error::Validation(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_client_from_config_keeps_server_sub_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snipe/api/v1/hardware/bytag/A%2F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = format!("{}/snipe", server.uri());
    let response = tokio::task::spawn_blocking(move || -> snipeit::Result<Value> {
        let config = ClientConfig::new(&uri, TOKEN)?.with_timeout(5);
        SnipeClient::new(config)?.get_asset_by_tag("A/1")
    })
    .await
    .expect("blocking task panicked")
    .unwrap();
    assert_eq!(response["id"], 4);
}
