use super::support::RecordingExecutor;
use ibc_client::application::task::{Executable, Task, TaskPlan};
use ibc_client::constants::PORTFOLIO_ACCOUNTS_ENDPOINT;
use ibc_client::model::request::RequestDescriptor;
use serde_json::json;

#[test]
fn test_single_task_accessors() {
    let task = Task::single("trades.trades", RequestDescriptor::get("/api/iserver/account/trades"));
    assert_eq!(task.name(), "trades.trades");
    assert!(!task.is_chained());
    assert!(matches!(task.plan(), TaskPlan::Single(_)));
    assert_eq!(task.requests().len(), 1);
    assert_eq!(task.request().path, "/api/iserver/account/trades");
}

#[test]
fn test_chained_task_accessors() {
    let task = Task::chained(
        "portfolio.account_ledger",
        RequestDescriptor::get("/api/portfolio/U1/ledger"),
    );
    assert!(task.is_chained());
    let paths: Vec<&str> = task.requests().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec![PORTFOLIO_ACCOUNTS_ENDPOINT, "/api/portfolio/U1/ledger"]);
    assert_eq!(task.request().path, "/api/portfolio/U1/ledger");
}

#[tokio::test]
async fn test_task_execute_dispatches_on_plan() {
    let executor = RecordingExecutor::new();

    let single = Task::single("pnl.pnl_server_account", RequestDescriptor::get("/a"));
    assert_eq!(single.execute(&executor).await.unwrap(), json!({"path": "/a"}));

    let chained = Task::chained("portfolio.account_summary", RequestDescriptor::get("/b"));
    assert_eq!(chained.execute(&executor).await.unwrap(), json!({"path": "/b"}));

    assert_eq!(executor.paths(), vec!["/a", PORTFOLIO_ACCOUNTS_ENDPOINT, "/b"]);
}

#[tokio::test]
async fn test_descriptor_is_executable() {
    let executor = RecordingExecutor::new();
    let request = RequestDescriptor::delete("/api/iserver/account/U1/order/9");
    request.execute(&executor).await.unwrap();
    assert_eq!(executor.calls(), vec![request]);
}
