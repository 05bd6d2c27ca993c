use crate::application::task::Task;
use crate::model::request::RequestDescriptor;

/// Returns the trades of the selected account for the current day and the six previous days.
pub fn trades() -> Task {
    Task::single(
        "trades.trades",
        RequestDescriptor::get("/api/iserver/account/trades"),
    )
}
