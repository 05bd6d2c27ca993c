use crate::common::test_executor;
use ibc_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_success_body_is_returned_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/iserver/account/trades")
        .match_header("content-type", "application/json")
        .match_header("user-agent", Matcher::Regex("^Mozilla/5.0".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"execution_id":"0000e0d5.6576fd38.01.01","symbol":"AAPL"}]"#)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let result = tasks::trades::trades().execute(&executor).await.unwrap();

    assert_eq!(
        result,
        json!([{"execution_id": "0000e0d5.6576fd38.01.01", "symbol": "AAPL"}])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_success_gets_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/iserver/reply/a1b2")
        .match_body(Matcher::Json(json!({"confirmed": true})))
        .with_status(200)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let task = tasks::orders::reply("a1b2", &ReplyMessage { confirmed: true }).unwrap();
    let result = task.execute(&executor).await.unwrap();

    assert_eq!(
        result,
        json!({"message": "response successful", "status_code": 200})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_accounts_listing_failure_is_returned_as_value() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/iserver/accounts")
        .with_status(401)
        .with_body(r#"{"error":"not authenticated","statusCode":401}"#)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let result = tasks::accounts::accounts().execute(&executor).await.unwrap();

    assert_eq!(
        result,
        json!({"error": "not authenticated", "statusCode": 401})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_accounts_listing_failure_with_empty_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/iserver/accounts")
        .with_status(401)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let result = tasks::accounts::accounts().execute(&executor).await.unwrap();

    assert_eq!(result, json!(""));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_accounts_listing_failure_with_text_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/iserver/accounts")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let result = tasks::accounts::accounts().execute(&executor).await.unwrap();

    assert_eq!(result, json!({"content": "Service Unavailable"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failure_builds_error_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/iserver/account/orders")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let err = tasks::orders::orders().execute(&executor).await.unwrap_err();

    let record = err.record().expect("http error record");
    assert_eq!(record.status_code, 500);
    assert_eq!(
        record.url,
        format!("{}/api/iserver/account/orders", server.url())
    );
    assert_eq!(record.response_body, json!({"content": "internal error"}));
    assert_eq!(record.request_method, "GET");
    assert_eq!(
        record.request_headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    let agent = record.request_headers.get("user-agent").unwrap();
    assert!(USER_AGENTS.contains(&agent.as_str()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failure_with_json_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/iserver/account/U1/order/42")
        .with_status(400)
        .with_body(r#"{"error":"order not found"}"#)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let err = tasks::orders::delete_order("U1", "42")
        .execute(&executor)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Http(_)));
    assert_eq!(err.status_code(), Some(400));
    let record = err.record().unwrap();
    assert_eq!(record.response_body, json!({"error": "order not found"}));
    assert_eq!(record.request_method, "DELETE");
}

#[tokio::test]
async fn test_failure_with_empty_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/iserver/news/top")
        .with_status(503)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let err = tasks::data::top_news().execute(&executor).await.unwrap_err();
    assert_eq!(err.record().unwrap().response_body, json!(""));
}

#[tokio::test]
async fn test_invalid_success_body_is_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/iserver/scanner/params")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let err = tasks::scanner::scanners().execute(&executor).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn test_list_params_are_comma_joined() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/trsrv/futures")
        .match_query(Matcher::UrlEncoded(
            "symbols".to_string(),
            "AAPL,MSFT".to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"AAPL":[],"MSFT":[]}"#)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let result = tasks::contract::search_futures(&["AAPL", "MSFT"])
        .execute(&executor)
        .await
        .unwrap();

    assert_eq!(result, json!({"AAPL": [], "MSFT": []}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_snapshot_query_string() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/iserver/marketdata/snapshot")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("conids".to_string(), "265598".to_string()),
            Matcher::UrlEncoded("fields".to_string(), "31,84,86".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"[{"conid":265598,"31":"189.50","84":"189.49","86":"189.51"}]"#)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let request = SnapshotRequest::new(["265598"])
        .with_field(MarketDataField::LastPrice)
        .with_field("84")
        .with_field(MarketDataField::AskPrice);
    let result = tasks::market_data::snapshot(&request)
        .execute(&executor)
        .await
        .unwrap();

    assert_eq!(result[0]["31"], json!("189.50"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_body_is_sent_as_json() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/trsrv/secdef")
        .match_body(Matcher::Json(json!({"conids": [265598, 8314]})))
        .with_status(200)
        .with_body(r#"{"secdef":[]}"#)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    tasks::contract::search_multiple_contracts(&[265598, 8314])
        .execute(&executor)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_gateway_is_network_error() {
    let executor = test_executor("http://127.0.0.1:1/v1");
    let err = tasks::trades::trades().execute(&executor).await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
}
