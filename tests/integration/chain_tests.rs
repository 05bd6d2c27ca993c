use crate::common::test_executor;
use ibc_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_chain_returns_second_stage_response() {
    let mut server = Server::new_async().await;
    let accounts = server
        .mock("GET", PORTFOLIO_ACCOUNTS_ENDPOINT)
        .with_status(200)
        .with_body(r#"[{"id":"U1234567"}]"#)
        .expect(1)
        .create_async()
        .await;
    let summary = server
        .mock("GET", "/api/portfolio/U1234567/summary")
        .with_status(200)
        .with_body(r#"{"netliquidation":{"amount":1000.0,"currency":"USD"}}"#)
        .expect(1)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let result = tasks::portfolio::account_summary("U1234567")
        .execute(&executor)
        .await
        .unwrap();

    assert_eq!(result["netliquidation"]["amount"], json!(1000.0));
    accounts.assert_async().await;
    summary.assert_async().await;
}

#[tokio::test]
async fn test_chain_stops_on_prerequisite_failure() {
    let mut server = Server::new_async().await;
    let accounts = server
        .mock("GET", PORTFOLIO_ACCOUNTS_ENDPOINT)
        .with_status(500)
        .with_body(r#"{"error":"gateway not ready"}"#)
        .expect(1)
        .create_async()
        .await;
    let ledger = server
        .mock("GET", "/api/portfolio/U1234567/ledger")
        .expect(0)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let err = tasks::portfolio::account_ledger("U1234567")
        .execute(&executor)
        .await
        .unwrap_err();

    let record = err.record().unwrap();
    assert_eq!(record.status_code, 500);
    assert!(record.url.ends_with(PORTFOLIO_ACCOUNTS_ENDPOINT));
    assert_eq!(record.response_body, json!({"error": "gateway not ready"}));
    accounts.assert_async().await;
    ledger.assert_async().await;
}

#[tokio::test]
async fn test_chained_positions_with_query() {
    let mut server = Server::new_async().await;
    let _accounts = server
        .mock("GET", PORTFOLIO_ACCOUNTS_ENDPOINT)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let positions = server
        .mock("GET", "/api/portfolio/U1/positions/1")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".to_string(), "position".to_string()),
            Matcher::UrlEncoded("direction".to_string(), "a".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"[{"conid":265598,"position":10.0}]"#)
        .create_async()
        .await;

    let executor = test_executor(&server.url());
    let request = PositionsRequest::new("U1")
        .with_page(1)
        .with_sort(SortField::Position)
        .with_direction(SortDirection::Ascending);
    let result = tasks::portfolio::portfolio_positions(&request)
        .execute(&executor)
        .await
        .unwrap();

    assert_eq!(result[0]["conid"], json!(265598));
    positions.assert_async().await;
}
