use crate::application::task::Task;
use crate::model::request::RequestDescriptor;

/// Lists the alerts of an account.
pub fn available_alerts(account_id: &str) -> Task {
    Task::single(
        "alert.available_alerts",
        RequestDescriptor::get(format!("/api/iserver/account/{account_id}/alerts")),
    )
}

/// Returns the Mobile Trading Assistant alert.
///
/// Every user has exactly one MTA alert with a fixed tool id. It cannot be
/// created or deleted; deleting it through the alerts endpoint resets it.
pub fn mta_alerts() -> Task {
    Task::single(
        "alert.mta_alerts",
        RequestDescriptor::get("/api/iserver/account/mta"),
    )
}
