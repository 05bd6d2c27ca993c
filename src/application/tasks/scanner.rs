use crate::application::task::Task;
use crate::application::tasks::to_body;
use crate::error::AppError;
use crate::model::request::RequestDescriptor;
use serde::Serialize;

/// Returns the parameter lists available to scanners.
pub fn scanners() -> Task {
    Task::single(
        "scanner.scanners",
        RequestDescriptor::get("/api/iserver/scanner/params"),
    )
}

/// Runs a scanner and returns the matching contracts.
///
/// `scanner` is usually a [`ScannerDefinition`](crate::model::requests::ScannerDefinition)
/// but any serializable value is sent as is.
///
/// # Errors
/// [`AppError::Json`] if the definition cannot be serialized.
pub fn run_scanner<T: Serialize + ?Sized>(scanner: &T) -> Result<Task, AppError> {
    Ok(Task::single(
        "scanner.run_scanner",
        RequestDescriptor::post("/api/iserver/scanner/run").with_body(to_body(scanner)?),
    ))
}
