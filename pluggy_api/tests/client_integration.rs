use pluggy_api::{
    types::{AccountType, ItemStatus, Parameters},
    Client, ConnectorFilters, Error, TransactionFilters,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn fetch_connectors_sends_api_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connectors"))
        .and(header("X-API-KEY", "test-key"))
        .and(query_param("includeHealth", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("connectors.json")))
        .mount(&server)
        .await;

    let result = client(&server)
        .fetch_connectors(&ConnectorFilters::default(), false)
        .await
        .unwrap();
    assert_eq!(result.results.len(), 2);
    assert_eq!(result.results[0].name, "Pluggy Bank");
    assert_eq!(result.results[0].credentials.len(), 2);
}

#[tokio::test]
async fn fetch_connectors_serializes_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connectors"))
        .and(query_param("countries", "AR,BR"))
        .and(query_param("sandbox", "true"))
        .and(query_param("includeHealth", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("connectors.json")))
        .mount(&server)
        .await;

    let filters = ConnectorFilters::default()
        .with_country("AR")
        .with_country("BR")
        .with_sandbox(true);
    let result = client(&server).fetch_connectors(&filters, true).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn fetch_item_revives_dates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items/a5d1ca6c-24c0-41c7-8b44-9272b18f7875"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("item.json")))
        .mount(&server)
        .await;

    let item = client(&server)
        .fetch_item("a5d1ca6c-24c0-41c7-8b44-9272b18f7875")
        .await
        .unwrap();
    assert_eq!(item.status, ItemStatus::Updating);
    assert!(!item.status.is_finished());
    assert_eq!(item.execution_status, "CREATING");
    assert_eq!(item.created_at.to_rfc3339(), "2020-06-01T21:33:48+00:00");
}

#[tokio::test]
async fn create_item_posts_sanitized_body() {
    let server = MockServer::start().await;
    let parameters = Parameters::from([
        ("user".to_string(), "user-ok".to_string()),
        ("password".to_string(), "password-ok".to_string()),
    ]);

    // Exact body match: an unset webhookUrl must not appear as a null key.
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(body_json(serde_json::json!({
            "connectorId": 0,
            "parameters": {"user": "user-ok", "password": "password-ok"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("item.json")))
        .mount(&server)
        .await;

    let item = client(&server).create_item(0, &parameters, None).await.unwrap();
    assert_eq!(item.connector.id, 0);
}

#[tokio::test]
async fn update_item_mfa_posts_parameters() {
    let server = MockServer::start().await;
    let parameters = Parameters::from([("token".to_string(), "123456".to_string())]);

    Mock::given(method("POST"))
        .and(path("/items/a5d1ca6c-24c0-41c7-8b44-9272b18f7875/mfa"))
        .and(body_json(serde_json::json!({"token": "123456"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("item.json")))
        .mount(&server)
        .await;

    let result = client(&server)
        .update_item_mfa("a5d1ca6c-24c0-41c7-8b44-9272b18f7875", Some(&parameters))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn delete_item_tolerates_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/items/a5d1ca6c-24c0-41c7-8b44-9272b18f7875"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client(&server)
        .delete_item("a5d1ca6c-24c0-41c7-8b44-9272b18f7875")
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn fetch_accounts_sends_type_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts"))
        .and(query_param("itemId", "a5d1ca6c-24c0-41c7-8b44-9272b18f7875"))
        .and(query_param("type", "CREDIT"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("accounts.json")))
        .mount(&server)
        .await;

    let result = client(&server)
        .fetch_accounts(
            "a5d1ca6c-24c0-41c7-8b44-9272b18f7875",
            Some(AccountType::Credit),
        )
        .await
        .unwrap();
    assert_eq!(result.results.len(), 2);
}

#[tokio::test]
async fn fetch_transactions_sends_date_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions"))
        .and(query_param("accountId", "03cc0eff-4ec5-495c-adb3-1ef9611624fc"))
        .and(query_param("from", "2020-06-01"))
        .and(query_param("to", "2020-06-30"))
        .and(query_param("pageSize", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("transactions.json")))
        .mount(&server)
        .await;

    let filters = TransactionFilters::default()
        .with_from(chrono::NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
        .with_to(chrono::NaiveDate::from_ymd_opt(2020, 6, 30).unwrap())
        .with_page_size(100);
    let result = client(&server)
        .fetch_transactions("03cc0eff-4ec5-495c-adb3-1ef9611624fc", &filters)
        .await
        .unwrap();
    assert_eq!(result.results.len(), 2);
    assert_eq!(result.results[0].amount, -30.0);
}

#[tokio::test]
async fn fetch_identity_by_item_id_sends_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/identity"))
        .and(query_param("itemId", "a5d1ca6c-24c0-41c7-8b44-9272b18f7875"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("identity.json")))
        .mount(&server)
        .await;

    let identity = client(&server)
        .fetch_identity_by_item_id("a5d1ca6c-24c0-41c7-8b44-9272b18f7875")
        .await
        .unwrap();
    assert_eq!(identity.full_name.as_deref(), Some("John Doe"));
}

#[tokio::test]
async fn create_connect_token_returns_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connect_token"))
        .and(body_json(serde_json::json!({})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"accessToken": "ey-connect-token"})),
        )
        .mount(&server)
        .await;

    let token = client(&server).create_connect_token(None, None).await.unwrap();
    assert_eq!(token.access_token, "ey-connect-token");
}

#[tokio::test]
async fn unauthorized_is_classified_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(403).set_body_json(
            serde_json::json!({"code": 403, "message": "Missing or invalid authorization token"}),
        ))
        .mount(&server)
        .await;

    let err = client(&server).fetch_items().await.unwrap_err();
    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 403);
            assert_eq!(code, 403);
            assert!(message.contains("authorization"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_parameter_is_classified_as_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 400,
            "message": "Invalid parameters",
            "details": [{
                "code": "INVALID_URL",
                "message": "webhookUrl must be a valid URL",
                "parameter": "webhookUrl"
            }]
        })))
        .mount(&server)
        .await;

    let parameters = Parameters::new();
    let err = client(&server)
        .create_item(0, &parameters, Some("not-a-url"))
        .await
        .unwrap_err();
    match err {
        Error::Validation { details, .. } => {
            assert_eq!(details[0].parameter, "webhookUrl");
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_credentials_are_classified_as_connector_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 400,
            "message": "Parameter validation error",
            "details": [{
                "code": "INVALID_CPF",
                "message": "cpf must have 11 digits"
            }]
        })))
        .mount(&server)
        .await;

    let parameters = Parameters::from([("cpf".to_string(), "123".to_string())]);
    let err = client(&server)
        .create_item(201, &parameters, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ConnectorValidation { .. }));
}

#[tokio::test]
async fn non_json_error_body_keeps_status_and_snippet() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_items().await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_accented_error_page_is_truncated_not_panicked() {
    let server = MockServer::start().await;
    // Accented error page well past the snippet limit, with a two-byte char
    // sitting exactly on the cut index.
    let page = format!(
        "{}{}",
        "x".repeat(1994),
        "Serviço temporariamente indisponível. ".repeat(20)
    );

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(503).set_body_string(&page))
        .mount(&server)
        .await;

    let err = client(&server).fetch_items().await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert!(body.ends_with("...[truncated]"));
            assert!(body.len() < page.len());
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_items().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}
