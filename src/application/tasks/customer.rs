use crate::application::task::Task;
use crate::model::request::RequestDescriptor;

/// Returns the applicant id with all owner related entities.
pub fn customer_info() -> Task {
    Task::single(
        "customer.customer_info",
        RequestDescriptor::get("/api/ibcust/entity/info"),
    )
}
