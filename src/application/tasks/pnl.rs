use crate::application::task::Task;
use crate::model::request::RequestDescriptor;

/// Returns PnL for the selected account and its models, if any.
pub fn pnl_server_account() -> Task {
    Task::single(
        "pnl.pnl_server_account",
        RequestDescriptor::get("/api/iserver/account/pnl/partitioned"),
    )
}
